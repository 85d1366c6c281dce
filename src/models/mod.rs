//! Data models for exported Messenger chat history.
//!
//! - [`Message`] - One chat entry; unknown fields are carried through untouched
//! - [`Dataset`] - All messages merged from every export file in a directory
//! - [`DailyCountSeries`] - Dense per-day message counts
//! - [`SmoothedSeries`] - Moving average of a [`DailyCountSeries`]
//! - [`FrequencyTable`] - Insertion-ordered token counts
//!
//! Message fields are deserialized leniently (see `parsers::deserializers`):
//! a malformed `timestamp_ms` or `content` is treated as absent.

pub mod frequency;
pub mod message;
pub mod series;

pub use frequency::FrequencyTable;
pub use message::{Dataset, Message};
pub use series::{DailyCountSeries, SeriesPoint, SmoothedSeries};
