//! Loading and repair of Messenger export documents
//!
//! # Error Handling Strategy
//!
//! Unlike line-oriented history files, an export document is parsed as a whole,
//! so there is no graceful degradation at the file level:
//!
//! - **Malformed files**: A file that fails to parse, or lacks a `messages` array,
//!   aborts the load with an error naming the file.
//!
//! - **Malformed fields**: Individual messages with a missing or mistyped
//!   `timestamp_ms` or `content` are kept; the field is read as absent and the
//!   analysis that needs it skips the message.
//!
//! - **Encoding**: A string that cannot be repaired aborts the load with its
//!   location inside the merged document.

pub mod dataset;
pub mod deserializers;
pub mod recode;

pub use dataset::{discover_json_files, load_dataset, merge_documents, parse_json_file};
pub use recode::{TargetEncoding, recode, recode_str};
