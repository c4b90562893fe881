mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{customer_phone_numbers_key, phone_number_key, phone_numbers_page_key};
pub use serialization::{
    deserialize_page, deserialize_phone_numbers, serialize_page, serialize_phone_number,
    serialize_phone_numbers, SerializationError,
};
pub use traits::Cache;
