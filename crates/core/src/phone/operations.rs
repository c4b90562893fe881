use crate::service::ServiceError;

use super::PhoneNumber;

/// Applies an activation change to a fetched record.
///
/// Rejects the no-op transition: if the record already holds `desired`,
/// returns [`ServiceError::StateConflict`] and leaves the record untouched.
pub fn apply_activation(mut record: PhoneNumber, desired: bool) -> Result<PhoneNumber, ServiceError> {
    if record.activated == desired {
        return Err(ServiceError::StateConflict {
            id: record.id,
            activated: desired,
        });
    }
    record.activated = desired;
    Ok(record)
}
