//! Key-value persistence contracts and the persisted key catalog.

pub mod keys;
pub mod kv;
