//! Auto-populated, unique slugs for persisted records.
//!
//! A slug is derived from one or more source fields of a record, normalized
//! to lowercase ASCII, and made unique inside an explicit scope by
//! appending `-2`, `-3`, ... on collision. The pure pieces live in
//! [`domain::record::services`]; the save path that decides when to
//! regenerate, commits, and retries on conflicts lives in
//! [`application::commands::records`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
