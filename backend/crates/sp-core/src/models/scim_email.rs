use crate::EMAIL_TYPE_WORK;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScimEmail {
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

impl ScimEmail {
    /// Work address flagged primary, the shape used for every address read from input
    pub fn work(value: &str) -> Self {
        Self {
            value: value.to_string(),
            kind: Some(String::from(EMAIL_TYPE_WORK)),
            primary: true,
        }
    }
}
