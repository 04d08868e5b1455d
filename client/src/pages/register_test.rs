use super::*;

#[test]
fn validate_registration_requires_matching_confirmation() {
    assert_eq!(
        validate_registration(" bob ", "hunter2", "hunter2"),
        Ok(("bob".to_owned(), "hunter2".to_owned()))
    );
    assert_eq!(validate_registration("bob", "hunter2", "hunter3"), Err("Passwords do not match."));
    assert_eq!(validate_registration("bob", "hunter2", " hunter2"), Err("Passwords do not match."));
}

#[test]
fn validate_registration_reports_blank_fields_first() {
    assert_eq!(validate_registration("", "", "x"), Err("Enter both username and password."));
}
