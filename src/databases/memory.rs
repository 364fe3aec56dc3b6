use async_trait::async_trait;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use crate::database::{Database, User};

/// In-memory stand-in for the Postgres backend, used by handler tests.
/// Mirrors the upsert contract: insert on a fresh id, overwrite otherwise.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    type Error = Infallible;

    async fn ping(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn read_users(&self) -> Result<Vec<User>, Self::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn write_users(&self, users: &[User]) -> Result<(), Self::Error> {
        let mut table = self.users.lock().unwrap();
        for user in users {
            table.insert(user.id.clone(), user.clone());
        }
        Ok(())
    }
}
