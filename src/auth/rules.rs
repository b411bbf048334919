//! Ordered path rules deciding which requests need credentials.

/// `"/docs/**"` style prefix match, or an exact path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathPattern {
    Exact(String),
    /// Matches the prefix itself and every path below it.
    Prefix(String),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => PathPattern::Prefix(prefix.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(exact) => path == exact,
            PathPattern::Prefix(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    PermitAll,
    Authenticated,
}

/// First matching rule wins; unmatched paths require authentication.
#[derive(Clone, Debug)]
pub struct SecurityRules {
    rules: Vec<(PathPattern, Requirement)>,
}

impl SecurityRules {
    pub fn new() -> Self {
        SecurityRules { rules: Vec::new() }
    }

    pub fn rule(mut self, patterns: &[&str], requirement: Requirement) -> Self {
        self.rules.extend(
            patterns
                .iter()
                .map(|pattern| (PathPattern::parse(pattern), requirement)),
        );
        self
    }

    /// Database console and API docs are open, everything else needs a login.
    pub fn default_rules() -> Self {
        Self::new().rule(
            &["/h2-console/**", "/v3/api-docs/**", "/swagger-ui/**", "/openapi.yaml"],
            Requirement::PermitAll,
        )
    }

    pub fn requirement_for(&self, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, requirement)| *requirement)
            .unwrap_or(Requirement::Authenticated)
    }
}

impl Default for SecurityRules {
    fn default() -> Self {
        Self::default_rules()
    }
}
