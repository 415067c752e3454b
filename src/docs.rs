use crate::api::leave_request::LeaveResponse;
use crate::api::users::UserResponse;
use crate::models::{
    ApplyLeaveReq, LoginReqDto, LoginResponse, LoginUser, MessageResponse, RegisterReq,
    StatusUpdateReq,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Leave API",
        version = "0.1.0",
        description = r#"
## Smart Leave

Backend for a small employee leave-management tool.

### Features
- **Users**: register accounts and list them
- **Auth**: log in by email and password
- **Leave**: apply for leave, list leaves per employee or globally, update a leave's status

### Notes
- Passwords are stored and compared as plain text.
- The login token is a placeholder and is not verified anywhere.
- Every error body has the shape `{"message": "..."}`.
"#,
    ),
    paths(
        crate::api::users::register,
        crate::api::users::list_users,

        crate::auth::handlers::login,

        crate::api::leave_request::apply_leave,
        crate::api::leave_request::my_leaves,
        crate::api::leave_request::all_leaves,
        crate::api::leave_request::update_status
    ),
    components(
        schemas(
            RegisterReq,
            UserResponse,
            LoginReqDto,
            LoginResponse,
            LoginUser,
            ApplyLeaveReq,
            StatusUpdateReq,
            LeaveResponse,
            MessageResponse
        )
    ),
    tags(
        (name = "Users", description = "User directory APIs"),
        (name = "Auth", description = "Login API"),
        (name = "Leave", description = "Leave ledger APIs"),
    )
)]
pub struct ApiDoc;
