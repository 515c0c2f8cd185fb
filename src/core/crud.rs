use std::marker::PhantomData;

use crate::core::error::{AppError, Result};
use crate::core::traits::{CrudRepository, ResourceMapper};

/// Generic service implementing the uniform resource operations over a
/// repository and a mapper. Each resource instantiates this once; the
/// product service layers its filter queries on top.
pub struct CrudService<R, M> {
    repository: R,
    _mapper: PhantomData<M>,
}

impl<R, M> CrudService<R, M>
where
    R: CrudRepository<Entity = M::Entity>,
    M: ResourceMapper,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _mapper: PhantomData,
        }
    }

    pub(crate) fn repository(&self) -> &R {
        &self.repository
    }

    /// Map every stored entity to its output representation, storage order.
    pub async fn get_all(&self) -> Result<Vec<M::Dto>> {
        let entities = self.repository.find_all().await?;
        tracing::info!(
            resource = M::RESOURCE,
            count = entities.len(),
            "received entities"
        );
        Ok(entities.into_iter().map(M::to_dto).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<M::Dto> {
        let entity = self.entity_by_id(id).await?;
        tracing::info!(resource = M::RESOURCE, id, "received entity");
        Ok(M::to_dto(entity))
    }

    /// Persist a new entity built from the input representation and return
    /// its output representation including the assigned id.
    pub async fn add(&self, modify: M::ModifyDto) -> Result<M::Dto> {
        let saved = self.repository.save(M::from_modify(None, modify)).await?;
        tracing::info!(resource = M::RESOURCE, "saved entity");
        Ok(M::to_dto(saved))
    }

    /// Replace the entity wholesale: every field comes from the input
    /// representation, only the id survives. Fields absent from the input
    /// end up null in storage.
    pub async fn update(&self, id: i64, modify: M::ModifyDto) -> Result<M::Dto> {
        // Same not-found contract as get and delete.
        self.entity_by_id(id).await?;
        let saved = self
            .repository
            .save(M::from_modify(Some(id), modify))
            .await?;
        tracing::info!(resource = M::RESOURCE, id, "saved updated entity");
        Ok(M::to_dto(saved))
    }

    /// Delete by id, returning the output representation captured before
    /// removal.
    pub async fn delete_by_id(&self, id: i64) -> Result<M::Dto> {
        let removed = M::to_dto(self.entity_by_id(id).await?);
        self.repository.delete_by_id(id).await?;
        tracing::info!(resource = M::RESOURCE, id, "removed entity");
        Ok(removed)
    }

    /// Fetch-or-fail precondition shared by get, update and delete.
    async fn entity_by_id(&self, id: i64) -> Result<M::Entity> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(M::RESOURCE, id))
    }
}
