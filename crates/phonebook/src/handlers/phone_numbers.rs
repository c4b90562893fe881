//! Phone number handlers.
//!
//! Inputs are validated here; everything else is delegated to the service
//! facade held in [`AppState`].

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use phonebook_core::phone::{CustomerId, PageEnvelope, PageRequest, PhoneNumber, PhoneNumberId};

use crate::{handlers::AppError, state::AppState};

const PAGE_MESSAGE: &str = "Page number should be greater than or equal to zero.";
const SIZE_MESSAGE: &str = "Page size should be greater than or equal to one.";
const PAGE_TOO_LARGE_MESSAGE: &str = "Page number should be less than or equal to 4294967295.";
const SIZE_TOO_LARGE_MESSAGE: &str = "Page size should be less than or equal to 4294967295.";
const CUSTOMER_ID_MESSAGE: &str = "Customer ID must be a numeric.";
const PHONE_NUMBER_ID_MESSAGE: &str = "Phone number ID must be a numeric.";

/// Query parameters for listing phone numbers.
#[derive(Debug, Deserialize)]
pub struct ListPhoneNumbersQuery {
    /// Zero-based page index (default: 0)
    #[serde(default)]
    pub page: i64,
    /// Records per page (default: 10)
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}

impl ListPhoneNumbersQuery {
    /// Validates both parameters, reporting every violation at once.
    fn into_page_request(self) -> Result<PageRequest, AppError> {
        let page = bounded(self.page, 0, PAGE_MESSAGE, PAGE_TOO_LARGE_MESSAGE);
        let size = bounded(self.size, 1, SIZE_MESSAGE, SIZE_TOO_LARGE_MESSAGE);

        match (page, size) {
            (Ok(page), Ok(size)) => PageRequest::new(page, size)
                .map_err(|err| AppError::validation(vec![err.to_string()])),
            (page, size) => Err(AppError::validation(
                [page.err(), size.err()]
                    .into_iter()
                    .flatten()
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }
}

/// Checks `min <= value <= u32::MAX`, naming the violated bound.
fn bounded(
    value: i64,
    min: u32,
    below_message: &'static str,
    above_message: &'static str,
) -> Result<u32, &'static str> {
    if value < i64::from(min) {
        return Err(below_message);
    }
    u32::try_from(value).map_err(|_| above_message)
}

/// Parses a path segment holding a numeric identifier.
fn parse_id(raw: &str, message: &str) -> Result<i64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(vec![message.to_string()]));
    }
    raw.parse()
        .map_err(|_| AppError::validation(vec![message.to_string()]))
}

/// List one page of phone numbers (GET /phone-numbers).
pub async fn list_phone_numbers(
    State(state): State<AppState>,
    query: Result<Query<ListPhoneNumbersQuery>, QueryRejection>,
) -> Result<Json<PageEnvelope<PhoneNumber>>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::validation(vec![rejection.body_text()]))?;
    let request = query.into_page_request()?;

    let page = state.phone_service.list_page(request).await?;
    Ok(Json(page))
}

/// List every phone number of a customer (GET /phone-numbers/customers/{customer_id}).
pub async fn list_customer_phone_numbers(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<PhoneNumber>>, AppError> {
    let customer_id: CustomerId = parse_id(&customer_id, CUSTOMER_ID_MESSAGE)?;

    let phone_numbers = state.phone_service.list_by_customer(customer_id).await?;
    Ok(Json(phone_numbers))
}

/// Activate a phone number (PATCH /phone-numbers/{phone_number_id}/activation).
pub async fn activate_phone_number(
    State(state): State<AppState>,
    Path(phone_number_id): Path<String>,
) -> Result<Json<PhoneNumber>, AppError> {
    set_activation(&state, &phone_number_id, true).await
}

/// Deactivate a phone number (PATCH /phone-numbers/{phone_number_id}/deactivation).
pub async fn deactivate_phone_number(
    State(state): State<AppState>,
    Path(phone_number_id): Path<String>,
) -> Result<Json<PhoneNumber>, AppError> {
    set_activation(&state, &phone_number_id, false).await
}

async fn set_activation(
    state: &AppState,
    phone_number_id: &str,
    desired: bool,
) -> Result<Json<PhoneNumber>, AppError> {
    let id: PhoneNumberId = parse_id(phone_number_id, PHONE_NUMBER_ID_MESSAGE)?;

    let updated = state.phone_service.set_activation(id, desired).await?;
    Ok(Json(updated))
}
