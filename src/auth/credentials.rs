use crate::auth::basic::Credentials;
use std::collections::HashMap;
use tracing::warn;

/// A stored secret tagged with how it is encoded, e.g. `{noop}password` or
/// `{bcrypt}$2b$12$...`.
#[derive(Clone, PartialEq, Eq)]
pub enum PasswordDescriptor {
    /// Cleartext, compared as-is. Only fit for demos.
    Noop(String),
    Bcrypt(String),
    /// Unknown or missing `{id}` prefix; never matches.
    Unsupported(String),
}

impl PasswordDescriptor {
    pub fn parse(stored: &str) -> Self {
        let encoded = stored
            .strip_prefix('{')
            .and_then(|rest| rest.split_once('}'));
        match encoded {
            Some(("noop", secret)) => PasswordDescriptor::Noop(secret.to_string()),
            Some(("bcrypt", hash)) => PasswordDescriptor::Bcrypt(hash.to_string()),
            Some((id, _)) => PasswordDescriptor::Unsupported(id.to_string()),
            None => PasswordDescriptor::Unsupported(String::new()),
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        match self {
            PasswordDescriptor::Noop(secret) => secret == raw,
            PasswordDescriptor::Bcrypt(hash) => match bcrypt::verify(raw, hash) {
                Ok(matched) => matched,
                Err(e) => {
                    warn!("Stored bcrypt hash could not be checked: {}", e);
                    false
                }
            },
            PasswordDescriptor::Unsupported(id) => {
                warn!(encoding = %id, "No password encoder for stored credential");
                false
            }
        }
    }
}

impl std::fmt::Debug for PasswordDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            PasswordDescriptor::Noop(_) => "noop",
            PasswordDescriptor::Bcrypt(_) => "bcrypt",
            PasswordDescriptor::Unsupported(id) => id,
        };
        write!(f, "{{{}}}<redacted>", id)
    }
}

#[derive(Clone, Debug)]
pub struct StoredCredential {
    pub password: PasswordDescriptor,
    pub roles: Vec<String>,
}

/// Immutable username -> credential mapping, built once at startup.
#[derive(Clone, Debug, Default)]
pub struct CredentialStore {
    users: HashMap<String, StoredCredential>,
}

impl CredentialStore {
    pub fn builder() -> CredentialStoreBuilder {
        CredentialStoreBuilder::default()
    }

    /// The single demo identity: `admin` / `password`, role `USER`.
    pub fn default_users() -> Self {
        Self::builder()
            .user("admin", "{noop}password", &["USER"])
            .build()
    }

    /// Roles of the matching identity, or `None` when the username is unknown
    /// or the password does not match.
    pub fn authenticate(&self, credentials: &Credentials) -> Option<&[String]> {
        let stored = self.users.get(&credentials.username)?;
        if stored.password.matches(&credentials.password) {
            Some(stored.roles.as_slice())
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[derive(Default)]
pub struct CredentialStoreBuilder {
    users: HashMap<String, StoredCredential>,
}

impl CredentialStoreBuilder {
    pub fn user(mut self, username: &str, stored_password: &str, roles: &[&str]) -> Self {
        self.users.insert(
            username.to_string(),
            StoredCredential {
                password: PasswordDescriptor::parse(stored_password),
                roles: roles.iter().map(|r| r.to_string()).collect(),
            },
        );
        self
    }

    pub fn build(self) -> CredentialStore {
        CredentialStore { users: self.users }
    }
}
