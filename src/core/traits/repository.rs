use crate::core::error::Result;
use async_trait::async_trait;

/// Base repository trait for CRUD operations
/// All repositories implement this trait for consistency
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Entity: Send;

    /// List all entities in storage order
    async fn find_all(&self) -> Result<Vec<Self::Entity>>;

    /// Find entity by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Entity>>;

    /// Persist an entity: insert when its id is unset, otherwise
    /// overwrite the row matching the id
    async fn save(&self, entity: Self::Entity) -> Result<Self::Entity>;

    /// Delete an entity by ID; existence is not checked at this level
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
