// src/domain/record/entity.rs
use crate::domain::record::options::SlugFieldOptions;
use crate::domain::record::value_objects::{RecordFields, RecordId, RecordKind, Slug, SlugScope};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct SluggedRecord {
    pub id: RecordId,
    pub scope: SlugScope,
    pub kind: RecordKind,
    pub fields: RecordFields,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SluggedRecord {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Merges `changes` into the stored fields and reports whether any
    /// field feeding the slug ended up with a different value.
    pub fn apply_fields(
        &mut self,
        changes: RecordFields,
        options: &SlugFieldOptions,
        now: DateTime<Utc>,
    ) -> bool {
        let mut source_changed = false;
        for (name, value) in changes {
            let previous = self.fields.insert(name.clone(), value);
            let is_source = options.populate_from().iter().any(|field| *field == name);
            if is_source && previous.as_deref() != self.fields.get(&name).map(String::as_str) {
                source_changed = true;
            }
        }
        self.updated_at = now;
        source_changed
    }

    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewSluggedRecord {
    pub scope: SlugScope,
    pub kind: RecordKind,
    pub fields: RecordFields,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SluggedRecordUpdate {
    pub id: RecordId,
    pub fields: Option<RecordFields>,
    pub slug: Option<Slug>,
    pub updated_at: DateTime<Utc>,
}

impl SluggedRecordUpdate {
    pub fn new(id: RecordId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            fields: None,
            slug: None,
            updated_at,
        }
    }

    pub fn with_fields(mut self, fields: RecordFields) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }
}
