pub mod repo;
pub mod repo_types;

#[cfg(test)]
pub(crate) mod fake;

pub use repo::{PgUserStore, StoreError, UserStore};
pub use repo_types::User;
