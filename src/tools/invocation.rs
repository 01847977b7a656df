//! Typed tool arguments, validated at the boundary before anything touches
//! the upstream API.

use crate::error::{GatewayError, Result};
use crate::upstream::types::{
    BulkMatchRequest, OrganizationSearchRequest, PeopleSearchRequest, PersonMatchRequest,
};
use serde::Deserialize;
use serde_json::Value;

/// Page size used when a search tool omits `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchCompaniesArgs {
    pub keyword: String,
    pub country: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl SearchCompaniesArgs {
    pub fn into_upstream(self) -> OrganizationSearchRequest {
        OrganizationSearchRequest {
            q_keywords: self.keyword,
            organization_locations: self.country.map(|country| vec![country]),
            per_page: self.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchPeopleArgs {
    pub company: String,
    pub role: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl SearchPeopleArgs {
    pub fn into_upstream(self) -> PeopleSearchRequest {
        PeopleSearchRequest {
            q_organization_name: self.company,
            person_titles: self.role.map(|role| vec![role]),
            per_page: self.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetContactInfoArgs {
    pub person_name: String,
    pub company: String,
}

impl GetContactInfoArgs {
    pub fn into_upstream(self) -> PersonMatchRequest {
        PersonMatchRequest {
            name: self.person_name,
            organization_name: self.company,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BulkEnrichPeopleArgs {
    #[serde(default)]
    pub person_ids: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
}

impl BulkEnrichPeopleArgs {
    pub fn into_upstream(self) -> BulkMatchRequest {
        BulkMatchRequest {
            person_ids: (!self.person_ids.is_empty()).then_some(self.person_ids),
            emails: (!self.emails.is_empty()).then_some(self.emails),
        }
    }
}

/// One variant per registered tool
#[derive(Debug, Clone)]
pub enum ToolInvocation {
    SearchCompanies(SearchCompaniesArgs),
    SearchPeople(SearchPeopleArgs),
    GetContactInfo(GetContactInfoArgs),
    BulkEnrichPeople(BulkEnrichPeopleArgs),
}

impl ToolInvocation {
    /// Parse and validate tool arguments. A request that fails here never
    /// produces an upstream call.
    pub fn parse(name: &str, arguments: Value) -> Result<Self> {
        let arguments = if arguments.is_null() {
            Value::Object(Default::default())
        } else {
            arguments
        };

        match name {
            "search_companies" => serde_json::from_value(arguments)
                .map(ToolInvocation::SearchCompanies)
                .map_err(GatewayError::invalid_params),
            "search_people" => serde_json::from_value(arguments)
                .map(ToolInvocation::SearchPeople)
                .map_err(GatewayError::invalid_params),
            "get_contact_info" => serde_json::from_value(arguments)
                .map(ToolInvocation::GetContactInfo)
                .map_err(GatewayError::invalid_params),
            "bulk_enrich_people" => {
                let args: BulkEnrichPeopleArgs =
                    serde_json::from_value(arguments).map_err(GatewayError::invalid_params)?;
                if args.person_ids.is_empty() && args.emails.is_empty() {
                    return Err(GatewayError::InvalidParams(
                        "bulk_enrich_people requires person_ids or emails".to_string(),
                    ));
                }
                Ok(ToolInvocation::BulkEnrichPeople(args))
            }
            other => Err(GatewayError::UnknownTool(other.to_string())),
        }
    }
}
