use async_graphql::{Error, ErrorExtensions};

use crate::users::StoreError;

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const STORE_ERROR: &str = "STORE_ERROR";

pub fn store_error(e: &StoreError) -> Error {
    Error::new(e.to_string()).extend_with(|_, ext| ext.set("code", STORE_ERROR))
}

pub fn not_found(id: i32) -> Error {
    Error::new(format!("no user with id {id}")).extend_with(|_, ext| ext.set("code", NOT_FOUND))
}
