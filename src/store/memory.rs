use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{PoisonError, RwLock};

use super::{LeaveStore, UserStore};
use crate::error::StoreError;
use crate::model::leave_request::{Leave, NewLeave};
use crate::model::user::{NewUser, User};

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    leaves: RwLock<Vec<Leave>>,
}

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::backend("in-memory collection lock poisoned")
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate(format!("email {}", user.email)));
        }

        let user = user.into_user(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().map_err(poisoned)?.clone())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn insert_leave(&self, leave: NewLeave) -> Result<Leave, StoreError> {
        let leave = leave.into_leave(ObjectId::new());
        self.leaves.write().map_err(poisoned)?.push(leave.clone());
        Ok(leave)
    }

    async fn list_leaves(&self) -> Result<Vec<Leave>, StoreError> {
        Ok(self.leaves.read().map_err(poisoned)?.clone())
    }

    async fn list_leaves_by_email(&self, email: &str) -> Result<Vec<Leave>, StoreError> {
        let leaves = self.leaves.read().map_err(poisoned)?;
        Ok(leaves
            .iter()
            .filter(|l| l.employee_email.as_deref() == Some(email))
            .cloned()
            .collect())
    }

    async fn update_leave_status(
        &self,
        id: ObjectId,
        status: Option<String>,
    ) -> Result<Option<Leave>, StoreError> {
        let mut leaves = self.leaves.write().map_err(poisoned)?;

        let Some(leave) = leaves.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        if let Some(status) = status {
            leave.status = status;
        }
        Ok(Some(leave.clone()))
    }
}
