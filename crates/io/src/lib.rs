//! # selene-io
//!
//! Read and write the daily lunar table as CSV with a fixed 11-column
//! schema. Bridges the on-disk format into Selene's internal
//! [`DailyLunarRecord`](selene_events::DailyLunarRecord) type and wraps
//! parsed tables in a validated [`LunarDataset`] handle.

mod dataset;
mod error;
mod reader;
mod schema;
mod writer;

pub use dataset::LunarDataset;
pub use error::TableError;
pub use reader::read_table;
pub use schema::COLUMNS;
pub use writer::write_table;
