use crate::shared::api_client::{fetch_all_with_signal, ApiError};
use contracts::domain::common::Resource;
use web_sys::AbortSignal;

/// Number of records of one resource. The list endpoints have no count
/// route, so the whole list is fetched.
pub async fn count<R: Resource>(signal: &AbortSignal) -> Result<usize, ApiError> {
    fetch_all_with_signal::<R>(Some(signal)).await.map(|items| items.len())
}
