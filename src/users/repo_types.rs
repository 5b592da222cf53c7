use serde::Serialize;
use sqlx::FromRow;

/// Row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i32,      // assigned by the store, never by the client
    pub name: String, // NOT NULL
}
