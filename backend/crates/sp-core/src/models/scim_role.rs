use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScimRole {
    pub value: String,
    #[serde(default)]
    pub primary: bool,
}

impl ScimRole {
    pub fn primary(value: &str) -> Self {
        Self {
            value: value.to_string(),
            primary: true,
        }
    }
}
