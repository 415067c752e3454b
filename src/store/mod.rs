//! Document store seams.
//!
//! Handlers only see these traits; the backend is picked at boot in
//! [`crate::db::init_store`].

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use crate::model::leave_request::{Leave, NewLeave};
use crate::model::user::{NewUser, User};

pub mod memory;
pub mod mongo;

pub const USERS_COLLECTION: &str = "users";
pub const LEAVES_COLLECTION: &str = "leaves";

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`StoreError::DuplicateKey`] when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// All users in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Exact, case-sensitive match on both fields.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn insert_leave(&self, leave: NewLeave) -> Result<Leave, StoreError>;

    /// All leaves in insertion order.
    async fn list_leaves(&self) -> Result<Vec<Leave>, StoreError>;

    async fn list_leaves_by_email(&self, email: &str) -> Result<Vec<Leave>, StoreError>;

    /// Sets `status` and returns the record after the write, or `None` for an
    /// unknown id. A `None` status leaves the record untouched.
    async fn update_leave_status(
        &self,
        id: ObjectId,
        status: Option<String>,
    ) -> Result<Option<Leave>, StoreError>;
}
