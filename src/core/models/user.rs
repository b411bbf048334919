use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED};
use crate::core::errors::FieldError;

pub type UserId = i64;

const MAX_LOCAL_PART_LEN: usize = 64;

// local@domain; atext atoms (plus non-ASCII) in the local part, hostname or
// internationalized labels in the domain
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{FFFF}-]+",
        r"(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{FFFF}-]+)*",
        r"@[A-Za-z0-9\x{80}-\x{FFFF}](?:[A-Za-z0-9\x{80}-\x{FFFF}-]{0,61}[A-Za-z0-9\x{80}-\x{FFFF}])?",
        r"(?:\.[A-Za-z0-9\x{80}-\x{FFFF}](?:[A-Za-z0-9\x{80}-\x{FFFF}-]{0,61}[A-Za-z0-9\x{80}-\x{FFFF}])?)*$",
    ))
    .expect("email pattern is a valid regex")
});

/// The persisted user record.
///
/// Fields are optional so that an unvalidated instance can be represented;
/// [`User::validate`] decides whether it may be written. Anything returned by
/// a repository has all three fields set.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    /// Assigned by the store on first save, immutable afterwards.
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// A not-yet-persisted user.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Every constraint this instance breaks, in field order. Empty means valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut violations = Vec::new();

        if self.name.is_none() {
            violations.push(FieldError::new("name", NAME_REQUIRED));
        }

        match self.email.as_deref() {
            None => violations.push(FieldError::new("email", EMAIL_REQUIRED)),
            Some(email) if !is_valid_email(email) => {
                violations.push(FieldError::new("email", EMAIL_INVALID))
            }
            Some(_) => {}
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Format check only; presence is `validate`'s concern, so an empty string
/// passes here.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return true;
    }
    match email.split_once('@') {
        Some((local, _)) if local.chars().count() <= MAX_LOCAL_PART_LEN => EMAIL_PATTERN.is_match(email),
        _ => false,
    }
}
