mod filter;
mod scim_error;
