use actix_web::{HttpResponse, web};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    model::leave_request::{Leave, NewLeave},
    models::{ApplyLeaveReq, MessageResponse, StatusUpdateReq},
    store::LeaveStore,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Jane Doe")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "jane@company.com")]
    pub employee_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Sick Leave")]
    pub leave_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-05")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-07")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Flu")]
    pub reason: Option<String>,
    #[schema(example = "Pending")]
    pub status: String,
}

impl From<Leave> for LeaveResponse {
    fn from(leave: Leave) -> Self {
        Self {
            id: leave.id.to_hex(),
            employee_name: leave.employee_name,
            employee_email: leave.employee_email,
            leave_type: leave.leave_type,
            start_date: leave.start_date,
            end_date: leave.end_date,
            reason: leave.reason,
            status: leave.status,
        }
    }
}

fn to_responses(leaves: Vec<Leave>) -> Vec<LeaveResponse> {
    leaves.into_iter().map(LeaveResponse::from).collect()
}

/* =========================
Apply for leave
========================= */
#[utoipa::path(
    post,
    path = "/api/leaves/apply",
    request_body(content = ApplyLeaveReq, content_type = "application/json"),
    responses(
        (status = 201, description = "Leave stored", body = MessageResponse, example = json!({
            "message": "Applied successfully!"
        })),
        (status = 500, description = "Store failure", body = MessageResponse, example = json!({
            "message": "Save failed"
        }))
    ),
    tag = "Leave"
)]
pub async fn apply_leave(
    leaves: web::Data<dyn LeaveStore>,
    payload: web::Json<ApplyLeaveReq>,
) -> Result<HttpResponse, ApiError> {
    let leave = leaves
        .insert_leave(NewLeave::from_request(payload.into_inner()))
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to save leave request");
            ApiError::LeaveSaveFailed
        })?;

    info!(leave_id = %leave.id, status = %leave.status, "Leave request stored");

    Ok(HttpResponse::Created().json(MessageResponse::new("Applied successfully!")))
}

/* =========================
Leaves of one employee
========================= */
#[utoipa::path(
    get,
    path = "/api/leaves/my-leaves/{email}",
    params(
        ("email" = String, Path, description = "Exact, case-sensitive employee email")
    ),
    responses(
        (status = 200, description = "Leaves applied with this email", body = [LeaveResponse]),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Leave"
)]
pub async fn my_leaves(
    leaves: web::Data<dyn LeaveStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();

    let found = leaves.list_leaves_by_email(&email).await.map_err(|e| {
        error!(error = %e, email = %email, "Failed to fetch employee leaves");
        ApiError::Internal
    })?;

    debug!(email = %email, count = found.len(), "Employee leaves fetched");

    Ok(HttpResponse::Ok().json(to_responses(found)))
}

/* =========================
All leaves
========================= */
#[utoipa::path(
    get,
    path = "/api/leaves/all",
    responses(
        (status = 200, description = "Every leave request", body = [LeaveResponse]),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Leave"
)]
pub async fn all_leaves(leaves: web::Data<dyn LeaveStore>) -> Result<HttpResponse, ApiError> {
    let all = leaves.list_leaves().await.map_err(|e| {
        error!(error = %e, "Failed to fetch leave list");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok().json(to_responses(all)))
}

/* =========================
Update leave status
========================= */
/// Unknown ids answer `200 null`, an id that is not an ObjectId included.
#[utoipa::path(
    put,
    path = "/api/leaves/update/{id}",
    params(
        ("id" = String, Path, description = "Leave record identifier")
    ),
    request_body(content = StatusUpdateReq, content_type = "application/json"),
    responses(
        (status = 200, description = "Updated leave, or null when the id matches nothing", body = LeaveResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Leave"
)]
pub async fn update_status(
    leaves: web::Data<dyn LeaveStore>,
    path: web::Path<String>,
    payload: web::Json<StatusUpdateReq>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();

    let Ok(leave_id) = ObjectId::parse_str(&raw_id) else {
        debug!(leave_id = %raw_id, "Not an ObjectId, nothing to update");
        return Ok(HttpResponse::Ok().json(Option::<LeaveResponse>::None));
    };

    let updated = leaves
        .update_leave_status(leave_id, payload.into_inner().status)
        .await
        .map_err(|e| {
            error!(error = %e, leave_id = %leave_id, "Update leave status failed");
            ApiError::Internal
        })?;

    match &updated {
        Some(leave) => info!(leave_id = %leave_id, status = %leave.status, "Leave status updated"),
        None => debug!(leave_id = %leave_id, "No leave with this id"),
    }

    Ok(HttpResponse::Ok().json(updated.map(LeaveResponse::from)))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::routes::test_support::{failing_config, memory_config};
    use crate::store::memory::MemoryStore;

    fn apply_req(body: Value) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri("/api/leaves/apply")
            .set_json(body)
    }

    #[actix_web::test]
    async fn applied_leave_defaults_to_pending() {
        let app = test::init_service(
            App::new().configure(memory_config(Arc::new(MemoryStore::default()))),
        )
        .await;

        let resp = test::call_service(
            &app,
            apply_req(json!({
                "employeeName": "Ann",
                "employeeEmail": "ann@corp.io",
                "leaveType": "Sick Leave",
                "startDate": "2026-01-05",
                "endDate": "2026-01-07",
                "reason": "Flu"
            }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let msg: Value = test::read_body_json(resp).await;
        assert_eq!(msg["message"], "Applied successfully!");

        let req = test::TestRequest::get().uri("/api/leaves/all").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
        assert_eq!(all[0]["status"], "Pending");
        assert_eq!(all[0]["leaveType"], "Sick Leave");
    }

    #[actix_web::test]
    async fn non_text_fields_are_not_validated() {
        let app = test::init_service(
            App::new().configure(memory_config(Arc::new(MemoryStore::default()))),
        )
        .await;

        let req = apply_req(json!({"employeeEmail": "ann@corp.io", "reason": 5})).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/leaves/my-leaves/ann@corp.io")
            .to_request();
        let mine: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mine[0]["reason"], "5");

        // a nested value cannot be stored as text, which is a failed save
        let req = apply_req(json!({"reason": {"text": "Flu"}})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Save failed");
    }

    #[actix_web::test]
    async fn my_leaves_filters_by_exact_email() {
        let app = test::init_service(
            App::new().configure(memory_config(Arc::new(MemoryStore::default()))),
        )
        .await;

        for (email, reason) in [
            ("ann@corp.io", "one"),
            ("bo@corp.io", "two"),
            ("ann@corp.io", "three"),
            ("Ann@corp.io", "four"),
        ] {
            let req = apply_req(json!({"employeeEmail": email, "reason": reason})).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/api/leaves/my-leaves/ann@corp.io")
            .to_request();
        let mine: Value = test::call_and_read_body_json(&app, req).await;
        let reasons: Vec<&str> = mine
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["reason"].as_str().unwrap())
            .collect();
        assert_eq!(reasons, vec!["one", "three"]);

        let req = test::TestRequest::get()
            .uri("/api/leaves/my-leaves/nobody@corp.io")
            .to_request();
        let none: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(none, json!([]));
    }

    #[actix_web::test]
    async fn status_update_changes_only_status() {
        let app = test::init_service(
            App::new().configure(memory_config(Arc::new(MemoryStore::default()))),
        )
        .await;

        let req = apply_req(json!({
            "employeeEmail": "ann@corp.io",
            "leaveType": "Annual",
            "reason": "Trip"
        }))
        .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/leaves/all").to_request();
        let before: Value = test::call_and_read_body_json(&app, req).await;
        let id = before[0]["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/leaves/update/{id}"))
            .set_json(json!({"status": "Approved"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["status"], "Approved");
        assert_eq!(updated["_id"], id.as_str());

        let req = test::TestRequest::get().uri("/api/leaves/all").to_request();
        let after: Value = test::call_and_read_body_json(&app, req).await;
        let mut expected = before[0].clone();
        expected["status"] = json!("Approved");
        assert_eq!(after[0], expected);
    }

    #[actix_web::test]
    async fn unknown_id_returns_null() {
        let app = test::init_service(
            App::new().configure(memory_config(Arc::new(MemoryStore::default()))),
        )
        .await;

        for id in [ObjectId::new().to_hex(), "not-an-id".to_string()] {
            let req = test::TestRequest::put()
                .uri(&format!("/api/leaves/update/{id}"))
                .set_json(json!({"status": "Rejected"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, Value::Null);
        }
    }

    #[actix_web::test]
    async fn store_failures_return_500() {
        let app = test::init_service(App::new().configure(failing_config())).await;

        let resp = test::call_service(&app, apply_req(json!({})).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Save failed");

        for uri in ["/api/leaves/all", "/api/leaves/my-leaves/ann@corp.io"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        let req = test::TestRequest::put()
            .uri(&format!("/api/leaves/update/{}", ObjectId::new().to_hex()))
            .set_json(json!({"status": "Approved"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Internal Server Error");
    }
}
