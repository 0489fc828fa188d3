use crate::user_name_eq;

#[test]
fn test_user_name_eq_plain() {
    assert_eq!(user_name_eq("alice"), r#"userName eq "alice""#);
}

#[test]
fn test_user_name_eq_escapes_quotes_and_backslashes() {
    assert_eq!(user_name_eq(r#"a"b\c"#), r#"userName eq "a\"b\\c""#);
}
