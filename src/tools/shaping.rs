//! Reshapes upstream responses into the declared tool output shapes.
//!
//! Output fields are plain `Option`s serialized without skipping: a field the
//! vendor did not return surfaces as an explicit `null`, never silently
//! dropped or defaulted.

use crate::upstream::types::{
    OrganizationSearchResponse, PeopleSearchResponse, PersonMatchResponse,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CompanyRecord {
    pub name: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub employee_count: Option<u64>,
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanySearchResult {
    pub companies: Vec<CompanyRecord>,
}

pub fn shape_companies(response: OrganizationSearchResponse) -> CompanySearchResult {
    CompanySearchResult {
        companies: response
            .organizations
            .into_iter()
            .map(|org| CompanyRecord {
                name: org.name,
                website: org.website_url,
                city: org.city,
                country: org.country,
                employee_count: org.estimated_num_employees,
                industry: org.industry,
            })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct LeadRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadSearchResult {
    pub leads: Vec<LeadRecord>,
}

pub fn shape_leads(response: PeopleSearchResponse) -> LeadSearchResult {
    LeadSearchResult {
        leads: response
            .people
            .into_iter()
            .map(|person| LeadRecord {
                first_name: person.first_name,
                last_name: person.last_name,
                title: person.title,
                email: person.email,
                linkedin: person.linkedin_url,
            })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub credit_used: bool,
}

pub fn shape_contact(response: PersonMatchResponse) -> ContactInfo {
    let person = response.person.unwrap_or_default();
    ContactInfo {
        email: person.email,
        phone: person.phone_number,
        credit_used: response.credit_consumed.unwrap_or(false),
    }
}
