use serde::{Deserialize, Serialize};

use super::PageRequestError;

/// Identifier of a phone number record.
pub type PhoneNumberId = i64;

/// Identifier of the customer owning a phone number.
pub type CustomerId = i64;

/// A customer's phone number.
///
/// `activated` is the only field the service mutates; `id` never changes
/// once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: PhoneNumberId,
    pub phone_number: String,
    pub activated: bool,
    pub customer_id: CustomerId,
}

impl PhoneNumber {
    /// Creates a new, deactivated phone number.
    pub fn new(id: PhoneNumberId, phone_number: impl Into<String>, customer_id: CustomerId) -> Self {
        Self {
            id,
            phone_number: phone_number.into(),
            activated: false,
            customer_id,
        }
    }

    /// Sets the activation flag.
    pub fn with_activated(mut self, activated: bool) -> Self {
        self.activated = activated;
        self
    }
}

/// A zero-based page index with a non-zero page size.
///
/// Deserialization goes through [`PageRequest::new`], so a zero size is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

#[derive(Deserialize)]
struct RawPageRequest {
    page: u32,
    size: u32,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PageRequestError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.page, raw.size)
    }
}

impl PageRequest {
    /// Creates a new page request, validating that `size >= 1`.
    pub fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::ZeroSize);
        }
        Ok(Self { page, size })
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub content: Vec<T>,
    /// Requested page index (zero-based).
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// True when no page follows this one.
    pub last: bool,
    pub total_pages: u64,
    pub total_records: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_phone_number_is_deactivated() {
        let phone = PhoneNumber::new(7, "0411993721", 3);

        assert_eq!(phone.id, 7);
        assert_eq!(phone.phone_number, "0411993721");
        assert!(!phone.activated);
        assert_eq!(phone.customer_id, 3);
    }

    #[test]
    fn test_phone_number_json_field_names() {
        let phone = PhoneNumber::new(1, "0488992263", 1).with_activated(true);

        let json = serde_json::to_value(&phone).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "phone_number": "0488992263",
                "activated": true,
                "customer_id": 1
            })
        );
    }

    #[test]
    fn test_page_request_rejects_zero_size() {
        assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::ZeroSize));
    }

    #[test]
    fn test_page_request_deserialize_rejects_zero_size() {
        let result = serde_json::from_str::<PageRequest>(r#"{"page": 0, "size": 0}"#);

        let err = result.unwrap_err();
        assert!(err.to_string().contains(&PageRequestError::ZeroSize.to_string()));
    }

    #[test]
    fn test_page_request_deserialize_valid() {
        let request: PageRequest = serde_json::from_str(r#"{"page": 2, "size": 5}"#).unwrap();

        assert_eq!(request, PageRequest::new(2, 5).unwrap());
    }

    #[test]
    fn test_page_request_offset() {
        let request = PageRequest::new(3, 25).unwrap();
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn test_page_request_offset_does_not_overflow() {
        let request = PageRequest::new(u32::MAX, u32::MAX).unwrap();
        assert_eq!(request.offset(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_page_envelope_json_field_names() {
        let envelope: PageEnvelope<i32> = PageEnvelope {
            content: vec![],
            page: 0,
            size: 9,
            last: true,
            total_pages: 0,
            total_records: 0,
        };

        let json = serde_json::to_value(&envelope).unwrap();

        assert!(json.get("total_pages").is_some());
        assert!(json.get("total_records").is_some());
        assert_eq!(json["last"], true);
    }
}
