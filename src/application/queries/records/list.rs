use super::RecordQueryService;
use crate::{
    application::{dto::RecordDto, error::ApplicationResult},
    domain::record::SlugScope,
};

pub struct ListRecordsQuery {
    pub scope: String,
}

impl RecordQueryService {
    /// Records of one scope, oldest first.
    pub async fn list_records(&self, query: ListRecordsQuery) -> ApplicationResult<Vec<RecordDto>> {
        let scope = SlugScope::new(query.scope)?;
        let records = self.read_repo.list(&scope).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
