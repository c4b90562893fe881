mod error;
mod http_mapping;
mod traits;

pub use error::{CollaboratorError, Result, ServiceError};
pub use http_mapping::service_error_to_status_code;
pub use traits::PhoneNumberService;
