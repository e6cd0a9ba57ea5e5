//! Local artifact stages
//!
//! The pipeline's two on-disk encodings:
//!
//! - `writer` serializes the catalog as a pretty-printed JSON array,
//!   warning (not failing) when it overwrites an existing file.
//! - `ndjson` reads the JSON artifact back, validates the top-level value
//!   is an array, and rewrites it as one compact JSON object per line.
//!
//! Neither stage writes atomically or takes a lock; concurrent runs are
//! last-writer-wins, same as the remote object.

mod ndjson;
mod writer;

pub use ndjson::convert_to_ndjson;
pub use writer::write_catalog;
