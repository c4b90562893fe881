//! In-memory storage backend implementation.

#![cfg_attr(not(feature = "inmemory"), allow(dead_code))]

mod repository;

pub use repository::InMemoryRepository;
