//! # Import and Export
//!
//! Translation between tasks and bulk files.
//!
//! | Format | Export | Import |
//! |--------|--------|--------|
//! | `json` | Array of task mappings | Array of objects with `title`, `description`, `completed` |
//! | `csv` | `id,title,description,completed,created_at,updated_at` | Header-driven; `title,description,completed` are read |
//!
//! Imports always create new tasks; IDs and timestamps in the source file
//! are ignored.

mod export;
mod format;
mod import;
mod validate;

pub use export::{Exporter, CSV_HEADER};
pub use format::Format;
pub use import::{parse_csv, parse_json, Importer};
pub use validate::{InputValidator, RawFlag, RawImportRecord, ValidatedRecord};
