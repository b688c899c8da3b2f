// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryRecordStore};
use autoslug_core::application::commands::records::{CreateRecordCommand, RecordCommandService};
use autoslug_core::application::dto::RecordDto;
use autoslug_core::application::ports::{time::Clock, util::SlugGenerator};
use autoslug_core::application::services::ApplicationServices;
use autoslug_core::domain::record::{RecordReadRepository, RecordWriteRepository, SlugFieldOptions};
use autoslug_core::infrastructure::util::DefaultSlugGenerator;

/// Scope shared by the base model and the model derived from it.
pub const SCOPE: &str = "slugged_test_model";
pub const BASE_KIND: &str = "slugged_test_model";
pub const CHILD_KIND: &str = "child_slugged_test_model";

pub fn build_services(
    write_repo: Arc<dyn RecordWriteRepository>,
    read_repo: Arc<dyn RecordReadRepository>,
    options: SlugFieldOptions,
    max_save_attempts: u32,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    ApplicationServices::new(write_repo, read_repo, clock, slugger, options, max_save_attempts)
}

/// Services over a fresh in-memory store with the given slug field.
pub fn in_memory_services(options: SlugFieldOptions) -> (Arc<InMemoryRecordStore>, ApplicationServices) {
    let store = Arc::new(InMemoryRecordStore::new());
    let services = build_services(store.clone(), store.clone(), options, 3);
    (store, services)
}

pub async fn create_titled(commands: &RecordCommandService, kind: &str, title: &str) -> RecordDto {
    let command = CreateRecordCommand::builder()
        .scope(SCOPE)
        .kind(kind)
        .field("title", title)
        .build()
        .expect("valid command");
    commands.create_record(command).await.expect("record created")
}
