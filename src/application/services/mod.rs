// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::records::RecordCommandService,
    ports::{ClockPort, SlugGeneratorPort},
    queries::records::RecordQueryService,
};
use crate::domain::record::{
    RecordReadRepository, RecordWriteRepository, SlugFieldOptions, services::SlugService,
};

/// Wires the record command/query services around one slug field
/// definition.
pub struct ApplicationServices {
    record_commands: Arc<RecordCommandService>,
    record_queries: Arc<RecordQueryService>,
}

impl ApplicationServices {
    pub fn new(
        record_write_repo: Arc<dyn RecordWriteRepository>,
        record_read_repo: Arc<dyn RecordReadRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        options: SlugFieldOptions,
        max_save_attempts: u32,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(
            Arc::clone(&record_read_repo),
            Arc::clone(&slugger),
        ));

        let record_commands = Arc::new(
            RecordCommandService::new(
                Arc::clone(&record_write_repo),
                Arc::clone(&record_read_repo),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
                options,
            )
            .with_max_save_attempts(max_save_attempts),
        );

        let record_queries = Arc::new(RecordQueryService::new(Arc::clone(&record_read_repo)));

        Self {
            record_commands,
            record_queries,
        }
    }

    pub fn record_commands(&self) -> Arc<RecordCommandService> {
        Arc::clone(&self.record_commands)
    }

    pub fn record_queries(&self) -> Arc<RecordQueryService> {
        Arc::clone(&self.record_queries)
    }
}
