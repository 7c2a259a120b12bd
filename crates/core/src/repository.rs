//! Repository abstraction: persistence access keyed by entity type.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::DomainResult;

/// Generic persistence contract over an entity type.
///
/// - `create` fails with `Conflict` if the id is already stored.
/// - `update` fails with `NotFound` if the id is not stored.
/// - `find` fails with `NotFound` if the id is not stored.
/// - `find_all` returns entities in creation order.
///
/// No transactional or batching semantics.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
{
    async fn create(&self, entity: &T) -> DomainResult<()>;

    async fn update(&self, entity: &T) -> DomainResult<()>;

    async fn find(&self, id: &T::Id) -> DomainResult<T>;

    async fn find_all(&self) -> DomainResult<Vec<T>>;
}

#[async_trait]
impl<T, R> Repository<T> for Arc<R>
where
    T: Entity + Send + Sync + 'static,
    R: Repository<T> + ?Sized,
{
    async fn create(&self, entity: &T) -> DomainResult<()> {
        (**self).create(entity).await
    }

    async fn update(&self, entity: &T) -> DomainResult<()> {
        (**self).update(entity).await
    }

    async fn find(&self, id: &T::Id) -> DomainResult<T> {
        (**self).find(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<T>> {
        (**self).find_all().await
    }
}
