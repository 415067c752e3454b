use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use utoipa::ToSchema;

// Request bodies keep every field optional so a missing field becomes the
// route's own error response instead of a generic deserialization failure.

/// Reads a text field, turning plain numbers and booleans into their string
/// form. Objects and arrays are still rejected.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "Jane Doe")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[schema(example = "jane@company.com")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[schema(example = "secret")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
    #[schema(example = "Employee")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "jane@company.com")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[schema(example = "secret")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginUser {
    pub email: String,
    pub role: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: LoginUser,
    /// Placeholder, not a verifiable credential.
    #[schema(example = "session-8f14e45f-ceea-467f-a8f4-3e1d7b6c1c2a")]
    pub token: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLeaveReq {
    #[schema(example = "Jane Doe")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_name: Option<String>,
    #[schema(example = "jane@company.com")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub employee_email: Option<String>,
    #[schema(example = "Sick Leave")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub leave_type: Option<String>,
    #[schema(example = "2026-01-05")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[schema(example = "2026-01-07")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
    #[schema(example = "Flu")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub reason: Option<String>,
    #[schema(example = "Pending")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct StatusUpdateReq {
    #[schema(example = "Approved")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
