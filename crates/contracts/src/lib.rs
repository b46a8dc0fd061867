//! Типы и логика, общие для frontend и backend.
//!
//! Компилируется и нативно, и в wasm32.

pub mod domain;
