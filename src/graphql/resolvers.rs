//! One function per root field. Each performs at most one store call and
//! turns the outcome into a field result or a field-scoped error.

use async_graphql::Result;
use tracing::{debug, error, info, instrument};

use super::errors::{not_found, store_error};
use crate::users::{User, UserStore};

/// `user(id: Int)`. A missing id or a missing row both resolve to `null`.
#[instrument(skip(store))]
pub async fn user(store: &dyn UserStore, id: Option<i32>) -> Result<Option<User>> {
    let Some(id) = id else {
        debug!("user queried without id");
        return Ok(None);
    };
    store.fetch_by_id(id).await.map_err(|e| {
        error!(error = %e, user_id = id, "fetch_by_id failed");
        store_error(&e)
    })
}

#[instrument(skip(store))]
pub async fn create_user(store: &dyn UserStore, name: String) -> Result<Option<User>> {
    match store.insert(&name).await {
        Ok(user) => {
            info!(user_id = user.id, "user created");
            Ok(Some(user))
        }
        Err(e) => {
            error!(error = %e, "insert failed");
            Err(store_error(&e))
        }
    }
}

/// Unlike `user`, a missing row here is an error.
#[instrument(skip(store))]
pub async fn update_user(store: &dyn UserStore, id: i32, name: String) -> Result<Option<User>> {
    match store.update_by_id(id, &name).await {
        Ok(Some(user)) => {
            info!(user_id = id, "user updated");
            Ok(Some(user))
        }
        Ok(None) => {
            debug!(user_id = id, "update matched no row");
            Err(not_found(id))
        }
        Err(e) => {
            error!(error = %e, user_id = id, "update_by_id failed");
            Err(store_error(&e))
        }
    }
}

/// `true` when a row was removed, `false` when none matched.
/// On a store error the field is `null` and only the error is reported.
#[instrument(skip(store))]
pub async fn delete_user(store: &dyn UserStore, id: i32) -> Result<Option<bool>> {
    match store.delete_by_id(id).await {
        Ok(rows) => {
            info!(user_id = id, rows, "user delete");
            Ok(Some(rows > 0))
        }
        Err(e) => {
            error!(error = %e, user_id = id, "delete_by_id failed");
            Err(store_error(&e))
        }
    }
}
