mod error;
mod mock_data;
mod operations;
mod pagination;
mod types;

pub use error::PageRequestError;
pub use mock_data::generate_seed_phone_numbers;
pub use operations::apply_activation;
pub use pagination::{assemble_page, is_last_page, total_pages};
pub use types::{CustomerId, PageEnvelope, PageRequest, PhoneNumber, PhoneNumberId};
