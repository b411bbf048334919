use crate::constants::{EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED};
use crate::core::errors::FieldError;
use crate::core::models::user::{User, is_valid_email};
use crate::core::services::HelloWorldService;

#[test]
fn test_valid_user_has_no_violations() {
    let user = User::new("Ana", "a@a.com");
    assert!(user.validate().is_empty());
    assert!(user.is_valid());
}

#[test]
fn test_missing_name_is_rejected() {
    let user = User {
        id: None,
        name: None,
        email: Some("a@a.com".to_string()),
    };
    assert_eq!(user.validate(), vec![FieldError::new("name", NAME_REQUIRED)]);
}

#[test]
fn test_missing_email_is_rejected() {
    let user = User {
        id: None,
        name: Some("Ana".to_string()),
        email: None,
    };
    assert_eq!(user.validate(), vec![FieldError::new("email", EMAIL_REQUIRED)]);
}

#[test]
fn test_malformed_email_is_rejected() {
    let user = User::new("Ana", "not-an-email");
    assert_eq!(user.validate(), vec![FieldError::new("email", EMAIL_INVALID)]);
}

#[test]
fn test_all_violations_are_reported_in_field_order() {
    let violations = User::default().validate();
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email"]);
}

#[test]
fn test_empty_name_is_still_present() {
    assert!(User::new("", "a@a.com").is_valid());
}

#[test]
fn test_empty_email_is_present_and_valid() {
    assert!(User::new("Ana", "").validate().is_empty());
}

#[test]
fn test_non_ascii_email_is_accepted() {
    assert!(User::new("José", "josé@exemplo.com.br").is_valid());
}

#[test]
fn test_email_format() {
    for email in [
        "a@a.com",
        "a@a",
        "first.last+tag@sub.example.org",
        "o'neil@example.co.uk",
        "x_y-z@my-host.io",
        "josé@example.com",
        "a@münchen.de",
        "用户@例子.广告",
        // presence is checked separately
        "",
    ] {
        assert!(is_valid_email(email), "expected {email} to be accepted");
    }

    let long_local = format!("{}@example.com", "a".repeat(65));
    assert!(is_valid_email(&format!("{}@example.com", "é".repeat(64))));
    for email in [
        "plain",
        "a@",
        "@a.com",
        "a@@a.com",
        "a b@c.com",
        "a@-a.com",
        "a@a-.com",
        ".a@a.com",
        "a..b@a.com",
        "a@a.com.",
        long_local.as_str(),
    ] {
        assert!(!is_valid_email(email), "expected {email:?} to be rejected");
    }
}

#[test]
fn test_hello_world_service() {
    let service = HelloWorldService::new();
    assert_eq!(service.hello_world("Leonardo"), "Hello World Leonardo");
    assert_eq!(
        service.hello_world_for("Ana", "42", "nenhum"),
        "Hello World Ana id: 42 filter: nenhum"
    );
}
