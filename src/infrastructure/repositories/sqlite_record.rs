use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{
    NewSluggedRecord, RecordFields, RecordId, RecordKind, RecordReadRepository,
    RecordWriteRepository, Slug, SlugScope, SluggedRecord, SluggedRecordUpdate,
};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::HashSet;
use std::sync::Arc;

const RECORD_COLUMNS: &str = "id, scope, kind, fields, slug, created_at, updated_at";

fn encode_fields(fields: &RecordFields) -> DomainResult<String> {
    serde_json::to_string(fields)
        .map_err(|err| DomainError::Persistence(format!("failed to encode fields: {err}")))
}

#[derive(Clone)]
pub struct SqliteRecordWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteRecordWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteRecordReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteRecordReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    scope: String,
    kind: String,
    fields: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecordRow> for SluggedRecord {
    type Error = DomainError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let fields: RecordFields = serde_json::from_str(&row.fields).map_err(|err| {
            DomainError::Persistence(format!("record {} has malformed fields: {err}", row.id))
        })?;

        Ok(SluggedRecord {
            id: RecordId::new(row.id)?,
            scope: SlugScope::new(row.scope)?,
            kind: RecordKind::new(row.kind)?,
            fields,
            slug: Slug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl RecordWriteRepository for SqliteRecordWriteRepository {
    async fn insert(&self, record: NewSluggedRecord) -> DomainResult<SluggedRecord> {
        let NewSluggedRecord {
            scope,
            kind,
            fields,
            slug,
            created_at,
            updated_at,
        } = record;

        let sql = format!(
            "INSERT INTO slugged_records (scope, kind, fields, slug, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING {RECORD_COLUMNS}"
        );
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(scope.as_str())
            .bind(kind.as_str())
            .bind(encode_fields(&fields)?)
            .bind(slug.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        SluggedRecord::try_from(row)
    }

    async fn update(&self, update: SluggedRecordUpdate) -> DomainResult<SluggedRecord> {
        let SluggedRecordUpdate {
            id,
            fields,
            slug,
            updated_at,
        } = update;

        let fields = fields.as_ref().map(encode_fields).transpose()?;
        let sql = format!(
            "UPDATE slugged_records SET fields = COALESCE(?, fields), slug = COALESCE(?, slug), updated_at = ? WHERE id = ? RETURNING {RECORD_COLUMNS}"
        );
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(fields)
            .bind(slug.as_ref().map(|s| s.as_str()))
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("record {id} not found")))?;

        SluggedRecord::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM slugged_records WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("record {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordReadRepository for SqliteRecordReadRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<SluggedRecord>> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM slugged_records WHERE id = ?");
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(SluggedRecord::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &Slug,
    ) -> DomainResult<Option<SluggedRecord>> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM slugged_records WHERE scope = ? AND slug = ?");
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(scope.as_str())
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(SluggedRecord::try_from).transpose()
    }

    async fn existing_slugs(
        &self,
        scope: &SlugScope,
        exclude: Option<RecordId>,
    ) -> DomainResult<HashSet<String>> {
        let exclude = exclude.map(i64::from);
        let slugs = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM slugged_records WHERE scope = ? AND (? IS NULL OR id <> ?)",
        )
        .bind(scope.as_str())
        .bind(exclude)
        .bind(exclude)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().collect())
    }

    async fn list(&self, scope: &SlugScope) -> DomainResult<Vec<SluggedRecord>> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM slugged_records WHERE scope = ? ORDER BY id ASC");
        let rows = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(scope.as_str())
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(SluggedRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
