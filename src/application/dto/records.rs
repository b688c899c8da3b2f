use crate::domain::record::{RecordFields, SluggedRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub id: i64,
    pub scope: String,
    pub kind: String,
    pub fields: RecordFields,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SluggedRecord> for RecordDto {
    fn from(record: SluggedRecord) -> Self {
        Self {
            id: record.id.into(),
            scope: record.scope.into_inner(),
            kind: record.kind.into_inner(),
            fields: record.fields,
            slug: record.slug.into_inner(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
