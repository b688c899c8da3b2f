// src/application/commands/records/mod.rs
mod create;
mod delete;
mod override_slug;
mod save;
mod service;

pub use create::{CreateRecordCommand, CreateRecordCommandBuilder};
pub use delete::DeleteRecordCommand;
pub use override_slug::OverrideSlugCommand;
pub use save::SaveRecordCommand;
pub use service::RecordCommandService;
