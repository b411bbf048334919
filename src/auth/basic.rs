use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// A username/password pair taken from an `Authorization: Basic` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Header value that would carry these credentials.
    pub fn to_header_value(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.username, self.password))
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What an `Authorization` header said, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasicHeader {
    Absent,
    /// Present but not a decodable Basic token.
    Malformed,
    Present(Credentials),
}

impl BasicHeader {
    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            BasicHeader::Present(credentials) => Some(credentials),
            _ => None,
        }
    }
}

/// Parse an `Authorization` header value.
///
/// The scheme is matched case-insensitively; the password is everything after
/// the first `:` and may itself contain colons.
pub fn parse_authorization(value: Option<&str>) -> BasicHeader {
    let Some(value) = value else {
        return BasicHeader::Absent;
    };

    let Some((scheme, token)) = value.trim().split_once(' ') else {
        return BasicHeader::Malformed;
    };
    if !scheme.eq_ignore_ascii_case("basic") {
        return BasicHeader::Malformed;
    }

    let decoded = match STANDARD.decode(token.trim()) {
        Ok(bytes) => bytes,
        Err(_) => return BasicHeader::Malformed,
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return BasicHeader::Malformed;
    };

    match decoded.split_once(':') {
        Some((username, password)) => BasicHeader::Present(Credentials::new(username, password)),
        None => BasicHeader::Malformed,
    }
}
