//! Cache key derivation.
//!
//! Each cached operation owns a namespace. Page listings are keyed by the
//! `(page, size)` pair only, so two requests for the same page at different
//! sizes are cached independently.

use crate::phone::{CustomerId, PageRequest, PhoneNumberId};

/// Returns the cache key for one page of the phone number listing.
pub fn phone_numbers_page_key(request: PageRequest) -> String {
    format!("phone_numbers:page:{}:{}", request.page, request.size)
}

/// Returns the cache key for all phone numbers of a customer.
pub fn customer_phone_numbers_key(customer_id: CustomerId) -> String {
    format!("customer:{}:phone_numbers", customer_id)
}

/// Returns the cache key for a single phone number.
pub fn phone_number_key(id: PhoneNumberId) -> String {
    format!("phone_number:{}", id)
}
