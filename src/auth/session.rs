use uuid::Uuid;

pub const TOKEN_PREFIX: &str = "session-";

/// Token handed out on login.
///
/// This is NOT a credential: it is not signed, not stored and nothing ever
/// checks it. Real session handling needs a verifiable token in its place.
pub fn issue_placeholder_token() -> String {
    format!("{}{}", TOKEN_PREFIX, Uuid::new_v4())
}
