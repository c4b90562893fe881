//! Cache backend implementations.
//!
//! This module provides concrete implementations of the `Cache` trait
//! defined in `phonebook_core::cache`.

pub mod memory;

pub use memory::MemoryCache;
