use crate::{
    auth::session::issue_placeholder_token,
    error::ApiError,
    models::{LoginReqDto, LoginResponse, LoginUser},
    store::UserStore,
};
use actix_web::{HttpResponse, web};
use tracing::{debug, error, info, instrument};

/// Login by exact email and password match
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body(content = LoginReqDto, content_type = "application/json"),
    responses(
        (status = 200, description = "Credentials matched", body = LoginResponse),
        (status = 401, description = "No matching user", body = MessageResponse, example = json!({
            "message": "Invalid email or password. Please contact Admin."
        })),
        (status = 500, description = "Store failure", body = MessageResponse, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(users, payload),
    fields(email = payload.email.as_deref().unwrap_or_default())
)]
pub async fn login(
    users: web::Data<dyn UserStore>,
    payload: web::Json<LoginReqDto>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");

    let LoginReqDto { email, password } = payload.into_inner();
    let (Some(email), Some(password)) = (email, password) else {
        info!("Invalid credentials: email or password missing");
        return Err(ApiError::InvalidCredentials);
    };

    debug!("Looking up user by credentials");

    let user = match users.find_by_credentials(&email, &password).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!("Invalid credentials: no matching user");
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, "Login Error");
            return Err(ApiError::Internal);
        }
    };

    info!(role = %user.role, "Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        user: LoginUser {
            email: user.email,
            role: user.role,
            name: user.name,
        },
        token: issue_placeholder_token(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::routes::test_support::{failing_config, memory_config};
    use crate::store::memory::MemoryStore;

    async fn login_status(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new().configure(memory_config(Arc::new(MemoryStore::default()))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(json!({
                "name": "Ann",
                "email": "ann@corp.io",
                "password": "pw",
                "role": "Admin"
            }))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn valid_login_returns_user_and_token() {
        let (status, body) = login_status(json!({"email": "ann@corp.io", "password": "pw"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "ann@corp.io");
        assert_eq!(body["user"]["role"], "Admin");
        assert_eq!(body["user"]["name"], "Ann");
        assert!(!body["token"].as_str().unwrap().is_empty());
        assert!(body["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let (status, body) = login_status(json!({"email": "ann@corp.io", "password": "PW"})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body["message"],
            "Invalid email or password. Please contact Admin."
        );
    }

    #[actix_web::test]
    async fn unknown_email_is_unauthorized() {
        let (status, _) = login_status(json!({"email": "bo@corp.io", "password": "pw"})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn empty_body_does_not_match_anyone() {
        let (status, _) = login_status(json!({})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn store_failure_is_internal_error() {
        let app = test::init_service(App::new().configure(failing_config())).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "ann@corp.io", "password": "pw"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Internal Server Error");
    }
}
