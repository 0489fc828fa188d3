pub mod csv_reader;
pub mod error;
pub mod filter;
pub mod models;

#[cfg(test)]
mod tests;

pub use csv_reader::{read_csv, read_csv_file};
pub use error::{CoreError, Result as CoreResult};
pub use filter::user_name_eq;
pub use models::input_record::InputRecord;
pub use models::list_response::ListResponse;
pub use models::scim_email::ScimEmail;
pub use models::scim_error::ScimErrorResponse;
pub use models::scim_meta::ScimMeta;
pub use models::scim_role::ScimRole;
pub use models::scim_user::ScimUser;

/// Core User resource schema URN
pub const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// Role assigned when the input row names none
pub const DEFAULT_ROLE: &str = "user";
/// Email type attached to every address read from input
pub const EMAIL_TYPE_WORK: &str = "work";
/// Separator for multi-valued CSV cells (emails, roles)
pub const MULTI_VALUE_SEPARATOR: char = ';';
