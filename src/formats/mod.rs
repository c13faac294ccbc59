//! Encoders for the finished report tree.

pub mod json;
pub mod msgpack;
