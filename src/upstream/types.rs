//! Request and response shapes for the LeadWire API.
//!
//! Requests are built field by field; tool arguments never reach the wire as
//! interpolated strings. Responses deserialize leniently: unknown vendor
//! fields are ignored and missing ones become `None`.

use serde::{Deserialize, Serialize};

/// Body for `POST /organizations/search`
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationSearchRequest {
    pub q_keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_locations: Option<Vec<String>>,
    pub per_page: u32,
}

/// Body for `POST /people/search`
#[derive(Debug, Clone, Serialize)]
pub struct PeopleSearchRequest {
    pub q_organization_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_titles: Option<Vec<String>>,
    pub per_page: u32,
}

/// Body for `POST /people/match`
#[derive(Debug, Clone, Serialize)]
pub struct PersonMatchRequest {
    pub name: String,
    pub organization_name: String,
}

/// Body for `POST /people/bulk_match`; empty lists are omitted entirely.
#[derive(Debug, Clone, Serialize)]
pub struct BulkMatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationSearchResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub name: Option<String>,
    pub website_url: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub estimated_num_employees: Option<u64>,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeopleSearchResponse {
    #[serde(default)]
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonMatchResponse {
    pub person: Option<MatchedPerson>,
    pub credit_consumed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchedPerson {
    pub email: Option<String>,
    pub phone_number: Option<String>,
}
