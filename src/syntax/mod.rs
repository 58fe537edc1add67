//! Input definition types (the deserialized Graph Definition File).

pub mod types;
