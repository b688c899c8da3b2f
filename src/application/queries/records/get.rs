use super::RecordQueryService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::record::{RecordId, Slug, SlugScope},
};

pub struct GetRecordByIdQuery {
    pub id: i64,
}

pub struct GetRecordBySlugQuery {
    pub scope: String,
    pub slug: String,
}

impl RecordQueryService {
    pub async fn get_record_by_id(&self, query: GetRecordByIdQuery) -> ApplicationResult<RecordDto> {
        let id = RecordId::new(query.id)?;
        let record = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("record not found"))?;
        Ok(record.into())
    }

    pub async fn get_record_by_slug(
        &self,
        query: GetRecordBySlugQuery,
    ) -> ApplicationResult<RecordDto> {
        let scope = SlugScope::new(query.scope)?;
        let slug = Slug::new(query.slug)?;
        let record = self
            .read_repo
            .find_by_slug(&scope, &slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no record with slug `{slug}`")))?;
        Ok(record.into())
    }
}
