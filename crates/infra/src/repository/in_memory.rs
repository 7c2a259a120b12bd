use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use storefront_core::{DomainError, DomainResult, Entity, Repository};

#[derive(Debug)]
struct Row<T> {
    /// Insertion position, keeps `find_all` in creation order.
    seq: u64,
    entity: T,
}

#[derive(Debug)]
struct Table<T: Entity> {
    rows: HashMap<T::Id, Row<T>>,
    next_seq: u64,
}

/// In-memory repository for tests/dev.
///
/// Stores clones of the entities it is given; callers never share state with it.
/// Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryRepository<T: Entity> {
    table: RwLock<Table<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: HashMap::new(),
                next_seq: 0,
            }),
        }
    }

    /// Number of stored entities.
    pub fn len(&self) -> DomainResult<usize> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("lock poisoned")
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    async fn create(&self, entity: &T) -> DomainResult<()> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let id = entity.id().clone();
        if table.rows.contains_key(&id) {
            return Err(DomainError::conflict(format!("{} {id} already exists", T::KIND)));
        }

        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.insert(id, Row { seq, entity: entity.clone() });

        tracing::debug!(kind = T::KIND, id = %entity.id(), "entity created");
        Ok(())
    }

    async fn update(&self, entity: &T) -> DomainResult<()> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let row = table
            .rows
            .get_mut(entity.id())
            .ok_or_else(|| DomainError::not_found(T::KIND, entity.id().to_string()))?;
        row.entity = entity.clone();

        tracing::debug!(kind = T::KIND, id = %entity.id(), "entity updated");
        Ok(())
    }

    async fn find(&self, id: &T::Id) -> DomainResult<T> {
        let table = self.table.read().map_err(|_| poisoned())?;
        table
            .rows
            .get(id)
            .map(|row| row.entity.clone())
            .ok_or_else(|| DomainError::not_found(T::KIND, id.to_string()))
    }

    async fn find_all(&self) -> DomainResult<Vec<T>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        let mut rows: Vec<&Row<T>> = table.rows.values().collect();
        rows.sort_by_key(|row| row.seq);
        Ok(rows.into_iter().map(|row| row.entity.clone()).collect())
    }
}
