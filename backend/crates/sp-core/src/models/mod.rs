pub mod input_record;
pub mod list_response;
pub mod scim_email;
pub mod scim_error;
pub mod scim_meta;
pub mod scim_role;
pub mod scim_user;
