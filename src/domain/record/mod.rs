pub mod entity;
pub mod options;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewSluggedRecord, SluggedRecord, SluggedRecordUpdate};
pub use options::SlugFieldOptions;
pub use repository::{RecordReadRepository, RecordWriteRepository};
pub use value_objects::{RecordFields, RecordId, RecordKind, Slug, SlugScope};
