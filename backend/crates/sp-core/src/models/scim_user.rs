use crate::{InputRecord, ScimEmail, ScimMeta, ScimRole, USER_SCHEMA};

use serde::{Deserialize, Serialize};

/// SCIM 2.0 User resource.
///
/// Outgoing create requests never carry `id` or `meta`; both are filled in by
/// the server on the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScimUser {
    #[serde(default)]
    pub schemas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub emails: Vec<ScimEmail>,
    #[serde(default)]
    pub roles: Vec<ScimRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ScimMeta>,
}

fn default_active() -> bool {
    true
}

impl ScimUser {
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.primary)
            .or_else(|| self.emails.first())
            .map(|e| e.value.as_str())
    }
}

impl From<&InputRecord> for ScimUser {
    /// Map an input row into the fixed provisioning shape.
    ///
    /// `externalId` mirrors `userName`. An empty display name falls back to
    /// the user name.
    fn from(record: &InputRecord) -> Self {
        let display_name = if record.display_name.is_empty() {
            record.user_name.clone()
        } else {
            record.display_name.clone()
        };

        Self {
            schemas: vec![String::from(USER_SCHEMA)],
            id: None,
            external_id: Some(record.user_name.clone()),
            user_name: record.user_name.clone(),
            display_name: Some(display_name),
            active: true,
            emails: record.emails.iter().map(|e| ScimEmail::work(e)).collect(),
            roles: vec![ScimRole::primary(record.role())],
            meta: None,
        }
    }
}
