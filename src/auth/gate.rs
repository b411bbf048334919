use crate::auth::basic::Credentials;
use crate::auth::credentials::CredentialStore;
use crate::auth::rules::{Requirement, SecurityRules};
use tracing::debug;

/// Who a request was let through as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Principal {
    /// Reached a permit-all path; credentials were not looked at.
    Anonymous,
    Authenticated { username: String, roles: Vec<String> },
}

impl Principal {
    pub fn username(&self) -> Option<&str> {
        match self {
            Principal::Anonymous => None,
            Principal::Authenticated { username, .. } => Some(username),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    Allow(Principal),
    Deny,
}

impl AuthDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AuthDecision::Allow(_))
    }
}

/// Stateless per-request authentication: rules first, then credentials.
#[derive(Clone, Debug)]
pub struct AuthGate {
    rules: SecurityRules,
    store: CredentialStore,
}

impl AuthGate {
    pub fn new(rules: SecurityRules, store: CredentialStore) -> Self {
        AuthGate { rules, store }
    }

    pub fn evaluate(&self, path: &str, credentials: Option<&Credentials>) -> AuthDecision {
        if self.rules.requirement_for(path) == Requirement::PermitAll {
            return AuthDecision::Allow(Principal::Anonymous);
        }

        let Some(credentials) = credentials else {
            debug!(path, "No credentials on protected path");
            return AuthDecision::Deny;
        };

        match self.store.authenticate(credentials) {
            Some(roles) => AuthDecision::Allow(Principal::Authenticated {
                username: credentials.username.clone(),
                roles: roles.to_vec(),
            }),
            None => {
                debug!(path, username = %credentials.username, "Bad credentials");
                AuthDecision::Deny
            }
        }
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        AuthGate::new(SecurityRules::default_rules(), CredentialStore::default_users())
    }
}
