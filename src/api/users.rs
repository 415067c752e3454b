use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    error::{ApiError, StoreError},
    model::user::{NewUser, User},
    models::{MessageResponse, RegisterReq},
    store::UserStore,
};

/// User record as returned to clients, password included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@company.com")]
    pub email: String,
    #[schema(example = "secret")]
    pub password: String,
    #[schema(example = "Employee")]
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            password: user.password,
            role: user.role,
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body(content = RegisterReq, content_type = "application/json"),
    responses(
        (status = 201, description = "User registered", body = MessageResponse, example = json!({
            "message": "Employee registered successfully!"
        })),
        (status = 400, description = "Duplicate email or missing field", body = MessageResponse, example = json!({
            "message": "Email already exists."
        }))
    ),
    tag = "Users"
)]
pub async fn register(
    users: web::Data<dyn UserStore>,
    payload: web::Json<RegisterReq>,
) -> Result<HttpResponse, ApiError> {
    let new_user = NewUser::from_request(payload.into_inner()).ok_or_else(|| {
        info!("Registration rejected: required field missing");
        ApiError::RegistrationFailed
    })?;

    users.insert_user(new_user).await.map_err(|e| {
        match &e {
            StoreError::DuplicateKey { .. } => info!("Registration rejected: email taken"),
            StoreError::Backend { .. } => error!(error = %e, "Failed to insert user"),
        }
        ApiError::RegistrationFailed
    })?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Employee registered successfully!")))
}

/// List every registered user
#[utoipa::path(
    get,
    path = "/api/users/all",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Store failure", body = MessageResponse, example = json!({
            "message": "Error fetching users"
        }))
    ),
    tag = "Users"
)]
pub async fn list_users(users: web::Data<dyn UserStore>) -> Result<HttpResponse, ApiError> {
    let all = users.list_users().await.map_err(|e| {
        error!(error = %e, "Failed to fetch users");
        ApiError::UserListFailed
    })?;

    let body: Vec<UserResponse> = all.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
