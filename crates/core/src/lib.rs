//! Functional core for the phonebook service.
//!
//! Pure domain types and functions plus the traits the imperative shell
//! implements: the persistence collaborator ([`storage::PhoneNumberRepository`]),
//! the cache backing store ([`cache::Cache`]) and the service boundary
//! ([`service::PhoneNumberService`]).

pub mod cache;
pub mod phone;
pub mod service;
pub mod storage;
