use serde::{Deserialize, Serialize};

/// SCIM ListResponse envelope.
///
/// Servers omit `Resources` when nothing matched, so it defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(rename = "Resources", default = "Vec::new")]
    pub resources: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u64>,
}

impl<T> ListResponse<T> {
    pub fn into_resources(self) -> Vec<T> {
        self.resources
    }
}
