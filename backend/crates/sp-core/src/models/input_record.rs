use crate::{DEFAULT_ROLE, MULTI_VALUE_SEPARATOR};

use serde::Deserialize;

/// One row of the input CSV.
///
/// Multi-valued cells are already split: `emails` holds every address from the
/// `emails` column, `role` the first entry of the `roles` column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputRecord {
    /// 1-based line in the source file, when read from one
    pub line: Option<u64>,
    pub user_name: String,
    pub display_name: String,
    pub emails: Vec<String>,
    pub role: Option<String>,
}

/// Raw row as it appears under the CSV header.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct CsvRow {
    #[serde(rename = "userName")]
    pub(crate) user_name: String,
    #[serde(rename = "displayName")]
    pub(crate) display_name: String,
    pub(crate) emails: String,
    pub(crate) roles: String,
}

impl InputRecord {
    pub fn new(user_name: &str, display_name: &str, emails: &[&str], role: Option<&str>) -> Self {
        Self {
            line: None,
            user_name: user_name.to_string(),
            display_name: display_name.to_string(),
            emails: emails.iter().map(|e| e.to_string()).collect(),
            role: role.map(String::from),
        }
    }

    /// Role to provision, falling back to the default role
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }

    pub fn has_user_name(&self) -> bool {
        !self.user_name.is_empty()
    }

    pub(crate) fn from_row(row: CsvRow, line: Option<u64>) -> Self {
        Self {
            line,
            user_name: row.user_name.trim().to_string(),
            display_name: row.display_name.trim().to_string(),
            emails: split_multi_value(&row.emails),
            role: split_multi_value(&row.roles).into_iter().next(),
        }
    }
}

fn split_multi_value(cell: &str) -> Vec<String> {
    cell.split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}
