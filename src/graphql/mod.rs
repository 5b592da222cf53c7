mod errors;
pub mod handlers;
mod resolvers;
pub mod schema;

pub use handlers::graphql_routes;
pub use schema::{build_schema, StoreHandle, UserSchema};
