// src/application/commands/records/save.rs
use super::RecordCommandService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::record::{
        RecordFields, RecordId, Slug, SluggedRecordUpdate, services::choose_basis,
    },
};
use tracing::{info, warn};

/// Re-save of an existing record. `fields` holds only the values being
/// changed; `slug` is an explicit slug chosen by the caller.
#[derive(Debug, Clone)]
pub struct SaveRecordCommand {
    pub id: i64,
    pub fields: RecordFields,
    pub slug: Option<String>,
}

impl SaveRecordCommand {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            fields: RecordFields::new(),
            slug: None,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

impl RecordCommandService {
    pub async fn save_record(&self, command: SaveRecordCommand) -> ApplicationResult<RecordDto> {
        let id = RecordId::new(command.id)?;
        let explicit_slug = command.slug.map(Slug::new).transpose()?;

        let mut attempt = 1;
        loop {
            let mut record = self
                .read_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("record not found"))?;

            let now = self.clock.now();
            let source_changed = record.apply_fields(command.fields.clone(), &self.options, now);
            if let Some(slug) = &explicit_slug {
                record.set_slug(slug.clone(), now);
            }

            let basis = choose_basis(
                Some(&record.slug),
                source_changed,
                explicit_slug.is_some(),
                &self.options,
            );
            let slug = self
                .slug_service
                .generate_unique_slug(&record.scope, &record.fields, &basis, Some(record.id), &self.options)
                .await?;
            record.set_slug(slug, now);

            let update = SluggedRecordUpdate::new(id, record.updated_at)
                .with_fields(record.fields.clone())
                .with_slug(record.slug.clone());

            match self.write_repo.update(update).await {
                Ok(saved) => {
                    info!(id = %saved.id, slug = %saved.slug, source_changed, "record saved");
                    return Ok(saved.into());
                }
                Err(err) if self.should_retry(&err, attempt) => {
                    warn!(id = %id, attempt, error = %err, "slug claimed concurrently, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(self.surface(err)),
            }
        }
    }
}
