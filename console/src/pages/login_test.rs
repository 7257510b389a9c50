use super::*;

#[test]
fn accepts_well_formed_credentials() {
    assert_eq!(
        validate_credentials(" user@example.com ", "hunter2hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2hunter2".to_owned()))
    );
}

#[test]
fn rejects_missing_or_malformed_email() {
    assert_eq!(
        validate_credentials("   ", "hunter2hunter2"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_credentials("not-an-email", "hunter2hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn rejects_short_passwords() {
    assert_eq!(
        validate_credentials("user@example.com", "short"),
        Err("Password must be at least 8 characters.")
    );
}
