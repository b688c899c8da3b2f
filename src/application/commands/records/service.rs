// src/application/commands/records/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationError, ports::time::Clock},
    domain::{
        errors::DomainError,
        record::{
            RecordReadRepository, RecordWriteRepository, SlugFieldOptions,
            services::SlugService,
        },
    },
};

pub const DEFAULT_MAX_SAVE_ATTEMPTS: u32 = 3;

pub struct RecordCommandService {
    pub(super) write_repo: Arc<dyn RecordWriteRepository>,
    pub(super) read_repo: Arc<dyn RecordReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) options: SlugFieldOptions,
    pub(super) max_save_attempts: u32,
}

impl RecordCommandService {
    pub fn new(
        write_repo: Arc<dyn RecordWriteRepository>,
        read_repo: Arc<dyn RecordReadRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
        options: SlugFieldOptions,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            options,
            max_save_attempts: DEFAULT_MAX_SAVE_ATTEMPTS,
        }
    }

    /// Number of generate-and-commit rounds before a slug conflict is
    /// handed back to the caller. Clamped to at least one.
    pub fn with_max_save_attempts(mut self, attempts: u32) -> Self {
        self.max_save_attempts = attempts.max(1);
        self
    }

    pub fn options(&self) -> &SlugFieldOptions {
        &self.options
    }

    pub(super) fn should_retry(&self, err: &DomainError, attempt: u32) -> bool {
        err.is_conflict() && attempt < self.max_save_attempts
    }

    pub(super) fn surface(&self, err: DomainError) -> ApplicationError {
        if err.is_conflict() {
            ApplicationError::conflict(format!(
                "slug still taken after {} attempt(s): {err}",
                self.max_save_attempts
            ))
        } else {
            err.into()
        }
    }
}
