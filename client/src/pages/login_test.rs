use super::*;

#[test]
fn validate_credentials_trims_username_and_requires_both_fields() {
    assert_eq!(
        validate_credentials("  alice ", " secret "),
        Ok(("alice".to_owned(), " secret ".to_owned()))
    );
    assert_eq!(validate_credentials("", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_credentials("alice", "   "), Err("Enter both username and password."));
}
