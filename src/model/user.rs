use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::RegisterReq;

pub const DEFAULT_ROLE: &str = "Employee";

/// Stored account document. The password is kept in plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// A user ready to be inserted, with defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl NewUser {
    /// Returns `None` when a required field is absent or empty.
    pub fn from_request(req: RegisterReq) -> Option<Self> {
        let required = |field: Option<String>| field.filter(|v| !v.is_empty());

        Some(Self {
            name: required(req.name)?,
            email: required(req.email)?,
            password: required(req.password)?,
            role: req.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }

    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }
}
