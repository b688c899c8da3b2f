use crate::domain::errors::DomainResult;
use crate::domain::record::entity::{NewSluggedRecord, SluggedRecord, SluggedRecordUpdate};
use crate::domain::record::value_objects::{RecordId, Slug, SlugScope};
use async_trait::async_trait;
use std::collections::HashSet;

/// Implementations must reject a second record with the same slug in the
/// same scope with `DomainError::Conflict`.
#[async_trait]
pub trait RecordWriteRepository: Send + Sync {
    async fn insert(&self, record: NewSluggedRecord) -> DomainResult<SluggedRecord>;
    async fn update(&self, update: SluggedRecordUpdate) -> DomainResult<SluggedRecord>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait RecordReadRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<SluggedRecord>>;
    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &Slug,
    ) -> DomainResult<Option<SluggedRecord>>;
    /// Every slug stored in `scope`, leaving out the record being saved.
    async fn existing_slugs(
        &self,
        scope: &SlugScope,
        exclude: Option<RecordId>,
    ) -> DomainResult<HashSet<String>>;
    async fn list(&self, scope: &SlugScope) -> DomainResult<Vec<SluggedRecord>>;
}
