//! SCIM filter expressions used by the client.

/// Build `userName eq "<name>"`, escaping the characters that would end the
/// quoted string early.
pub fn user_name_eq(user_name: &str) -> String {
    format!("userName eq \"{}\"", escape_value(user_name))
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
