// src/application/commands/records/override_slug.rs
use super::RecordCommandService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::record::{RecordId, Slug, SluggedRecordUpdate},
};
use tracing::info;

/// Writes a slug straight to storage without running the generator, the
/// way a bulk update would. The value is stored verbatim.
pub struct OverrideSlugCommand {
    pub id: i64,
    pub slug: String,
}

impl RecordCommandService {
    pub async fn override_slug(&self, command: OverrideSlugCommand) -> ApplicationResult<RecordDto> {
        let id = RecordId::new(command.id)?;
        let slug = Slug::new(command.slug)?;
        let update = SluggedRecordUpdate::new(id, self.clock.now()).with_slug(slug);

        let updated = self.write_repo.update(update).await.map_err(|err| {
            if err.is_conflict() {
                ApplicationError::conflict(format!("slug override rejected: {err}"))
            } else {
                err.into()
            }
        })?;

        info!(id = %updated.id, slug = %updated.slug, "slug overridden");
        Ok(updated.into())
    }
}
