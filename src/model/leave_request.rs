use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::ApplyLeaveReq;

pub const DEFAULT_STATUS: &str = "Pending";

/// Stored leave document. Absent text fields are left out of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLeave {
    pub employee_name: Option<String>,
    pub employee_email: Option<String>,
    pub leave_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub reason: Option<String>,
    pub status: String,
}

impl NewLeave {
    pub fn from_request(req: ApplyLeaveReq) -> Self {
        Self {
            employee_name: req.employee_name,
            employee_email: req.employee_email,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
            status: req.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }

    pub fn into_leave(self, id: ObjectId) -> Leave {
        Leave {
            id,
            employee_name: self.employee_name,
            employee_email: self.employee_email,
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
            status: self.status,
        }
    }
}
