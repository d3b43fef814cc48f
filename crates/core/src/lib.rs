//! Domain types and pure logic for the subway admin backend.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates build on
//! these types and call into [`sections`] to turn a line's stored edges into
//! an ordered route.

pub mod error;
pub mod line;
pub mod sections;
pub mod types;
