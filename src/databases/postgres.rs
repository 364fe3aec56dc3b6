use async_trait::async_trait;
use sqlx::{Connection, PgConnection};

use crate::database::{Database, User};

const SELECT_USERS: &str = "SELECT id, name, email, age FROM users";

// Positional binds only; values never reach the SQL text itself.
const UPSERT_USER: &str = "\
INSERT INTO users (id, name, email, age)
VALUES ($1, $2, $3, $4)
ON CONFLICT (id) DO UPDATE SET
    name = EXCLUDED.name,
    email = EXCLUDED.email,
    age = EXCLUDED.age";

/// Postgres backend. Holds only the connection string: every operation opens
/// its own connection and releases it before returning. No pool.
#[derive(Clone)]
pub struct PostgresDatabase {
    url: String,
}

impl PostgresDatabase {
    pub fn new(url: &str) -> Self {
        PostgresDatabase {
            url: url.to_string(),
        }
    }

    async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect(&self.url).await
    }

    async fn run_upserts(conn: &mut PgConnection, users: &[User]) -> Result<(), sqlx::Error> {
        // One round trip per user, in input order, no wrapping transaction:
        // a failure here leaves earlier upserts committed.
        for user in users {
            sqlx::query(UPSERT_USER)
                .bind(&user.id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.age)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    type Error = sqlx::Error;

    async fn ping(&self) -> Result<(), Self::Error> {
        let conn = self.connect().await?;
        conn.close().await
    }

    async fn read_users(&self) -> Result<Vec<User>, Self::Error> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&mut conn)
            .await;
        // Close before reporting the query's outcome; a query error wins
        // over a close error.
        let closed = conn.close().await;
        let users = result?;
        closed?;
        Ok(users)
    }

    async fn write_users(&self, users: &[User]) -> Result<(), Self::Error> {
        let mut conn = self.connect().await?;
        let result = Self::run_upserts(&mut conn, users).await;
        let closed = conn.close().await;
        result.and(closed)
    }
}
