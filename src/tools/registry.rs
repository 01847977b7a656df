use crate::mcp::types::ToolDefinition;
use serde_json::json;

/// Static tool table served by `tools/list`. Must stay in sync with
/// `ToolInvocation::parse`.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "search_companies".to_string(),
            description: "Search companies by keyword, optionally filtered by country".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keyword": { "type": "string", "description": "Search keyword" },
                    "country": { "type": "string", "description": "Restrict results to a country" },
                    "limit": { "type": "number", "description": "Maximum results, default 10" }
                },
                "required": ["keyword"]
            }),
        },
        ToolDefinition {
            name: "search_people".to_string(),
            description: "Search people working at a company, optionally filtered by role"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "company": { "type": "string", "description": "Company name" },
                    "role": { "type": "string", "description": "Job title filter" },
                    "limit": { "type": "number", "description": "Maximum results, default 10" }
                },
                "required": ["company"]
            }),
        },
        ToolDefinition {
            name: "get_contact_info".to_string(),
            description: "Look up email and phone for a person at a company (uses a credit)"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "person_name": { "type": "string", "description": "Full name of the person" },
                    "company": { "type": "string", "description": "Company the person works at" }
                },
                "required": ["person_name", "company"]
            }),
        },
        ToolDefinition {
            name: "bulk_enrich_people".to_string(),
            description: "Bulk person enrichment by ids or email addresses".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "person_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Person ids"
                    },
                    "emails": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Email addresses"
                    }
                },
                "required": []
            }),
        },
    ]
}
