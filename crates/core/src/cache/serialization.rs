//! Pure functions for serializing/deserializing domain types to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use crate::phone::{PageEnvelope, PhoneNumber};
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a single phone number to JSON bytes.
pub fn serialize_phone_number(phone_number: &PhoneNumber) -> Result<Vec<u8>> {
    serde_json::to_vec(phone_number).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Serializes a slice of phone numbers to JSON bytes.
pub fn serialize_phone_numbers(phone_numbers: &[PhoneNumber]) -> Result<Vec<u8>> {
    serde_json::to_vec(phone_numbers)
        .map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of phone numbers.
pub fn deserialize_phone_numbers(bytes: &[u8]) -> Result<Vec<PhoneNumber>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a page of phone numbers to JSON bytes.
///
/// # Arguments
/// * `page` - The page envelope to serialize
///
/// # Returns
/// JSON-encoded bytes holding the content and the pagination metadata
pub fn serialize_page(page: &PageEnvelope<PhoneNumber>) -> Result<Vec<u8>> {
    serde_json::to_vec(page).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a page of phone numbers.
pub fn deserialize_page(bytes: &[u8]) -> Result<PageEnvelope<PhoneNumber>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
