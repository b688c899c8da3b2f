// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_record;

pub use error::map_sqlx;
pub use sqlite_record::{SqliteRecordReadRepository, SqliteRecordWriteRepository};
