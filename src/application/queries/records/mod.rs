// src/application/queries/records/mod.rs
mod get;
mod list;
mod service;

pub use get::{GetRecordByIdQuery, GetRecordBySlugQuery};
pub use list::ListRecordsQuery;
pub use service::RecordQueryService;
