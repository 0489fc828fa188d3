use serde::Deserialize;
use serde_json::Value;

/// Error document returned by a SCIM endpoint on a non-2xx response.
///
/// `status` is a string per RFC 7644 but some providers send a number, so it
/// is kept as raw JSON. `message` covers providers that answer with their own
/// error shape instead of the SCIM one.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScimErrorResponse {
    pub schemas: Vec<String>,
    pub status: Option<Value>,
    pub scim_type: Option<String>,
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl ScimErrorResponse {
    /// Human-readable summary, `None` when the document carries no text
    pub fn summary(&self) -> Option<String> {
        let text = self.detail.as_ref().or(self.message.as_ref())?;
        match self.scim_type {
            Some(ref scim_type) => Some(format!("{} ({})", text, scim_type)),
            None => Some(text.clone()),
        }
    }
}
