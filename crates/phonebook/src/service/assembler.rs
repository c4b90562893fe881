//! Page assembly over the persistence collaborator.

use phonebook_core::phone::{assemble_page, PageEnvelope, PageRequest, PhoneNumber};
use phonebook_core::service::Result;
use phonebook_core::storage::PhoneNumberRepository;

/// Fetches one page of phone numbers together with the total record count.
///
/// The count and content queries run concurrently and may complete in either
/// order. If either fails, the whole operation fails with that error and no
/// partial envelope is produced.
pub async fn list_page<R>(repository: &R, request: PageRequest) -> Result<PageEnvelope<PhoneNumber>>
where
    R: PhoneNumberRepository + ?Sized,
{
    let (total_records, content) =
        tokio::try_join!(repository.count(), repository.find_page(request))?;

    tracing::trace!(
        page = request.page,
        size = request.size,
        total_records,
        returned = content.len(),
        "Assembled phone number page"
    );

    Ok(assemble_page(request, content, total_records))
}
