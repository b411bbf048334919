pub mod basic;
pub mod credentials;
pub mod gate;
pub mod rules;

pub use basic::Credentials;
pub use credentials::{CredentialStore, PasswordDescriptor, StoredCredential};
pub use gate::{AuthDecision, AuthGate, Principal};
pub use rules::{PathPattern, Requirement, SecurityRules};
