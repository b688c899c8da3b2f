// src/application/commands/records/create.rs
use super::RecordCommandService;
use crate::{
    application::{dto::RecordDto, error::ApplicationResult},
    domain::record::{
        NewSluggedRecord, RecordFields, RecordKind, SlugScope, services::SlugBasis,
    },
};
use tracing::{info, warn};

pub struct CreateRecordCommand {
    pub scope: String,
    pub kind: String,
    pub fields: RecordFields,
}

impl CreateRecordCommand {
    pub fn builder() -> CreateRecordCommandBuilder {
        CreateRecordCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateRecordCommandBuilder {
    scope: Option<String>,
    kind: Option<String>,
    fields: RecordFields,
}

impl CreateRecordCommandBuilder {
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Defaults to the scope when not set.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<CreateRecordCommand, &'static str> {
        let scope = self.scope.ok_or("scope is required")?;
        Ok(CreateRecordCommand {
            kind: self.kind.unwrap_or_else(|| scope.clone()),
            scope,
            fields: self.fields,
        })
    }
}

impl RecordCommandService {
    pub async fn create_record(&self, command: CreateRecordCommand) -> ApplicationResult<RecordDto> {
        let scope = SlugScope::new(command.scope)?;
        let kind = RecordKind::new(command.kind)?;
        let fields = command.fields;

        let mut attempt = 1;
        loop {
            let now = self.clock.now();
            let slug = self
                .slug_service
                .generate_unique_slug(&scope, &fields, &SlugBasis::Source, None, &self.options)
                .await?;

            let new_record = NewSluggedRecord {
                scope: scope.clone(),
                kind: kind.clone(),
                fields: fields.clone(),
                slug,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_record).await {
                Ok(created) => {
                    info!(id = %created.id, scope = %created.scope, slug = %created.slug, "record created");
                    return Ok(created.into());
                }
                Err(err) if self.should_retry(&err, attempt) => {
                    warn!(scope = %scope, attempt, error = %err, "slug claimed concurrently, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(self.surface(err)),
            }
        }
    }
}
