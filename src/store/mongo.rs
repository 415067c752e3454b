use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::{LEAVES_COLLECTION, LeaveStore, USERS_COLLECTION, UserStore};
use crate::error::StoreError;
use crate::model::leave_request::{Leave, NewLeave};
use crate::model::user::{NewUser, User};

const DUPLICATE_KEY_CODE: i32 = 11000;

impl From<MongoError> for StoreError {
    fn from(e: MongoError) -> Self {
        classify(e.kind.as_ref(), e.to_string())
    }
}

fn classify(kind: &ErrorKind, message: String) -> StoreError {
    match kind {
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE => {
            StoreError::duplicate(message)
        }
        _ => StoreError::backend(message),
    }
}

/// MongoDB backed store holding the `users` and `leaves` collections.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
    users: Collection<User>,
    leaves: Collection<Leave>,
    /// Set once the unique email index is known to exist. Shared by clones.
    email_index: Arc<OnceCell<()>>,
}

impl MongoStore {
    /// Parses the connection string and builds the client. No round trip to
    /// the server happens here.
    pub async fn connect(database_url: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(database_url).await?;
        let db = client.database(database_name);

        Ok(Self {
            users: db.collection(USERS_COLLECTION),
            leaves: db.collection(LEAVES_COLLECTION),
            db,
            email_index: Arc::new(OnceCell::new()),
        })
    }

    /// Pings the server and makes sure the unique email index exists.
    pub async fn prepare(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        info!(database = %self.db.name(), "MongoDB connected successfully");
        self.ensure_email_index().await
    }

    /// Creates the unique email index unless an earlier call already did.
    /// A failed attempt leaves the cell empty, so the next call tries again.
    async fn ensure_email_index(&self) -> Result<(), StoreError> {
        self.email_index
            .get_or_try_init(|| async {
                let index = IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build();
                self.users.create_index(index).await?;
                debug!("Unique email index ensured on users");
                Ok::<(), StoreError>(())
            })
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl UserStore for MongoStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        // without the index a duplicate email would be accepted
        self.ensure_email_index().await?;
        let user = user.into_user(ObjectId::new());
        self.users.insert_one(&user).await?;
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .find_one(doc! { "email": email, "password": password })
            .await?)
    }
}

#[async_trait]
impl LeaveStore for MongoStore {
    async fn insert_leave(&self, leave: NewLeave) -> Result<Leave, StoreError> {
        let leave = leave.into_leave(ObjectId::new());
        self.leaves.insert_one(&leave).await?;
        Ok(leave)
    }

    async fn list_leaves(&self) -> Result<Vec<Leave>, StoreError> {
        let cursor = self.leaves.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_leaves_by_email(&self, email: &str) -> Result<Vec<Leave>, StoreError> {
        let cursor = self
            .leaves
            .find(doc! { "employeeEmail": email })
            .sort(doc! { "_id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_leave_status(
        &self,
        id: ObjectId,
        status: Option<String>,
    ) -> Result<Option<Leave>, StoreError> {
        let filter = doc! { "_id": id };

        // an empty $set is rejected by the server, so a missing status is a plain read
        let Some(status) = status else {
            return Ok(self.leaves.find_one(filter).await?);
        };

        Ok(self
            .leaves
            .find_one_and_update(filter, doc! { "$set": { "status": status } })
            .return_document(ReturnDocument::After)
            .await?)
    }
}
