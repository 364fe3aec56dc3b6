use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One account record; `id` is the primary key in the backing store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// POST /users accepts either a single user object or an array of them.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum UsersPayload {
    Many(Vec<User>),
    One(User),
}

impl UsersPayload {
    pub fn into_users(self) -> Vec<User> {
        match self {
            UsersPayload::Many(users) => users,
            UsersPayload::One(user) => vec![user],
        }
    }
}

#[async_trait]
pub trait Database: Send + Sync + Clone {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Opens a connection to the store and closes it again. No query.
    async fn ping(&self) -> Result<(), Self::Error>;

    /// Reads the whole users table, in whatever order the store returns it.
    async fn read_users(&self) -> Result<Vec<User>, Self::Error>;

    /// Upserts each user in sequence order. Not transactional: a failure
    /// partway through leaves earlier rows committed and aborts the rest.
    async fn write_users(&self, users: &[User]) -> Result<(), Self::Error>;
}
