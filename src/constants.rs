/// Name interpolated by `GET /hello-world`.
pub const DEFAULT_GREETING_NAME: &str = "Leonardo";

/// Value of `filter` when the query parameter is absent.
pub const DEFAULT_FILTER: &str = "nenhum";

/// Realm advertised in the Basic challenge.
pub const AUTH_REALM: &str = "Realm";

// Field violation messages
pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
pub const EMAIL_INVALID: &str = "Email inválido";
