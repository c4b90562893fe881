use thiserror::Error;

/// Errors that can occur when constructing a page request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("Invalid page request: page size must be greater than or equal to one")]
    ZeroSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_error_display() {
        assert_eq!(
            PageRequestError::ZeroSize.to_string(),
            "Invalid page request: page size must be greater than or equal to one"
        );
    }
}
