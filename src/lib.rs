//! Messenger Analyze - Activity and vocabulary statistics for Messenger exports
//!
//! This library reads a conversation exported from Facebook Messenger (one or more
//! `message_N.json` files in a directory) and derives:
//!
//! - A dense daily message-count series, optionally smoothed with a trailing moving average
//! - A word-frequency table over message bodies, ranked by count
//!
//! The export stores non-ASCII text as UTF-8 bytes escaped one per character; every
//! string is repaired while loading (see [`parsers::recode`]).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use messenger_analyze::{AnalysisConfig, analyze, load_dataset};
//!
//! let config = AnalysisConfig::default();
//! let dataset = load_dataset(Path::new("inbox/alice_abc123"), config.encoding)?;
//! let report = analyze(&dataset, &config)?;
//! for (word, count) in &report.top_words {
//!     println!("{word}: {count}");
//! }
//! # Ok::<(), messenger_analyze::AnalyzeError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use analysis::{Report, aggregate, analyze, count_words, smooth};
pub use config::AnalysisConfig;
pub use error::{AnalyzeError, RecodeError};
pub use models::{DailyCountSeries, Dataset, FrequencyTable, Message, SmoothedSeries};
pub use parsers::{TargetEncoding, load_dataset, recode};
