// tests/support/mocks.rs
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use autoslug_core::application::ports::time::Clock;
use autoslug_core::domain::errors::{DomainError, DomainResult};
use autoslug_core::domain::record::{
    NewSluggedRecord, RecordId, RecordKind, RecordReadRepository, RecordWriteRepository, Slug,
    SlugScope, SluggedRecord, SluggedRecordUpdate,
};

/* -------------------------------- in-memory store -------------------------------- */

#[derive(Default)]
struct StoreState {
    next_id: i64,
    records: BTreeMap<i64, SluggedRecord>,
}

impl StoreState {
    fn slug_taken(&self, scope: &SlugScope, slug: &Slug, except: Option<i64>) -> bool {
        self.records.values().any(|r| {
            r.scope == *scope && r.slug == *slug && Some(i64::from(r.id)) != except
        })
    }
}

/// Record storage that enforces one slug per scope, like the database
/// constraint does.
#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: Mutex<StoreState>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugs of a scope in insertion order.
    pub fn slugs(&self, scope: &str) -> Vec<String> {
        let state = self.inner.lock().unwrap();
        state
            .records
            .values()
            .filter(|r| r.scope.as_str() == scope)
            .map(|r| r.slug.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl RecordWriteRepository for InMemoryRecordStore {
    async fn insert(&self, record: NewSluggedRecord) -> DomainResult<SluggedRecord> {
        let mut state = self.inner.lock().unwrap();
        if state.slug_taken(&record.scope, &record.slug, None) {
            return Err(DomainError::Conflict("slug already exists in scope".into()));
        }

        state.next_id += 1;
        let id = state.next_id;
        let created = SluggedRecord {
            id: RecordId::new(id)?,
            scope: record.scope,
            kind: record.kind,
            fields: record.fields,
            slug: record.slug,
            created_at: record.created_at,
            updated_at: record.updated_at,
        };
        state.records.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: SluggedRecordUpdate) -> DomainResult<SluggedRecord> {
        let mut state = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        let scope = state
            .records
            .get(&id)
            .map(|r| r.scope.clone())
            .ok_or_else(|| DomainError::NotFound("record not found".into()))?;

        if let Some(slug) = &update.slug {
            if state.slug_taken(&scope, slug, Some(id)) {
                return Err(DomainError::Conflict("slug already exists in scope".into()));
            }
        }

        let record = state
            .records
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("record not found".into()))?;
        if let Some(fields) = update.fields {
            record.fields = fields;
        }
        if let Some(slug) = update.slug {
            record.slug = slug;
        }
        record.updated_at = update.updated_at;
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .records
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("record not found".into()))
    }
}

#[async_trait]
impl RecordReadRepository for InMemoryRecordStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<SluggedRecord>> {
        let state = self.inner.lock().unwrap();
        Ok(state.records.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &Slug,
    ) -> DomainResult<Option<SluggedRecord>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .records
            .values()
            .find(|r| r.scope == *scope && r.slug == *slug)
            .cloned())
    }

    async fn existing_slugs(
        &self,
        scope: &SlugScope,
        exclude: Option<RecordId>,
    ) -> DomainResult<HashSet<String>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .records
            .values()
            .filter(|r| r.scope == *scope && Some(r.id) != exclude)
            .map(|r| r.slug.as_str().to_string())
            .collect())
    }

    async fn list(&self, scope: &SlugScope) -> DomainResult<Vec<SluggedRecord>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .records
            .values()
            .filter(|r| r.scope == *scope)
            .cloned()
            .collect())
    }
}

/* -------------------------------- concurrent writer -------------------------------- */

/// Write repository that lets a rival writer commit the same slug right
/// before each of the first `races` inserts, reproducing the window between
/// reading the existing slugs and committing.
pub struct RacingWriteRepo {
    store: Arc<InMemoryRecordStore>,
    races: Mutex<u32>,
}

impl RacingWriteRepo {
    pub fn new(store: Arc<InMemoryRecordStore>, races: u32) -> Self {
        Self {
            store,
            races: Mutex::new(races),
        }
    }
}

#[async_trait]
impl RecordWriteRepository for RacingWriteRepo {
    async fn insert(&self, record: NewSluggedRecord) -> DomainResult<SluggedRecord> {
        let race = {
            let mut races = self.races.lock().unwrap();
            if *races > 0 {
                *races -= 1;
                true
            } else {
                false
            }
        };

        if race {
            let rival = NewSluggedRecord {
                kind: RecordKind::new("rival")?,
                ..record.clone()
            };
            self.store.insert(rival).await?;
        }
        self.store.insert(record).await
    }

    async fn update(&self, update: SluggedRecordUpdate) -> DomainResult<SluggedRecord> {
        self.store.update(update).await
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        self.store.delete(id).await
    }
}

/* -------------------------------- clock -------------------------------- */

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

#[derive(Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(*FIXED_NOW)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
