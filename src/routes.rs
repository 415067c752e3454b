use crate::{
    api::{leave_request, users},
    auth::handlers,
    error::ApiError,
};
use actix_web::{error::JsonPayloadError, web};
use tracing::warn;

/// JSON extractor settings shared by every route.
pub fn json_config() -> web::JsonConfig {
    json_config_for(ApiError::InvalidBody)
}

/// Body that parses as JSON but has a field of the wrong shape answers with
/// `on_bad_field`. Syntax and content-type problems stay `InvalidBody`.
fn json_config_for(on_bad_field: ApiError) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, req| {
        warn!(error = %err, path = %req.path(), "Rejected request body");
        match &err {
            JsonPayloadError::Deserialize(e) if e.is_data() => on_bad_field.into(),
            _ => ApiError::InvalidBody.into(),
        }
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.service(
        web::scope(api_prefix)
            .service(
                web::scope("/users")
                    // /users/register
                    .service(
                        web::resource("/register")
                            .app_data(json_config_for(ApiError::RegistrationFailed))
                            .route(web::post().to(users::register)),
                    )
                    // /users/all
                    .service(web::resource("/all").route(web::get().to(users::list_users))),
            )
            .service(
                web::scope("/auth")
                    .service(web::resource("/login").route(web::post().to(handlers::login))),
            )
            .service(
                web::scope("/leaves")
                    .service(
                        web::resource("/apply")
                            .app_data(json_config_for(ApiError::LeaveSaveFailed))
                            .route(web::post().to(leave_request::apply_leave)),
                    )
                    // /leaves/my-leaves/{email}
                    .service(
                        web::resource("/my-leaves/{email}")
                            .route(web::get().to(leave_request::my_leaves)),
                    )
                    .service(web::resource("/all").route(web::get().to(leave_request::all_leaves)))
                    // /leaves/update/{id}
                    .service(
                        web::resource("/update/{id}")
                            .route(web::put().to(leave_request::update_status)),
                    ),
            ),
    );
}
