use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};

use super::resolvers;
use crate::users::{User, UserStore};

/// Store handle injected as schema data and shared by every resolver.
pub type StoreHandle = Arc<dyn UserStore>;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// A stored user. Both fields are nullable in the schema but always populated.
#[Object]
impl User {
    async fn id(&self) -> Option<i32> {
        Some(self.id)
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Serially resolved fields (mutations) drop a field that returns `Err`
/// instead of nulling it. Record the error on the context and resolve to
/// `null` explicitly; root query fields go through the same path.
fn null_on_error<T>(ctx: &Context<'_>, res: Result<Option<T>>) -> Option<T> {
    match res {
        Ok(value) => value,
        Err(err) => {
            let err = ctx.set_error_path(err.into_server_error(ctx.item.pos));
            ctx.add_error(err);
            None
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn user(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<User>> {
        let store = ctx.data::<StoreHandle>()?;
        let res = resolvers::user(store.as_ref(), id).await;
        Ok(null_on_error(ctx, res))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, name: String) -> Result<Option<User>> {
        let store = ctx.data::<StoreHandle>()?;
        let res = resolvers::create_user(store.as_ref(), name).await;
        Ok(null_on_error(ctx, res))
    }

    async fn update_user(&self, ctx: &Context<'_>, id: i32, name: String) -> Result<Option<User>> {
        let store = ctx.data::<StoreHandle>()?;
        let res = resolvers::update_user(store.as_ref(), id, name).await;
        Ok(null_on_error(ctx, res))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<bool>> {
        let store = ctx.data::<StoreHandle>()?;
        let res = resolvers::delete_user(store.as_ref(), id).await;
        Ok(null_on_error(ctx, res))
    }
}

pub fn build_schema(store: StoreHandle) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(5)
        .disable_introspection()
        .finish()
}
