use futures::future;
use log::trace;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("data fetch failed: {reason}")]
pub struct FetchError {
    pub reason: String,
}

const FEED_SAMPLE: [i32; 3] = [1, 2, 3];

/// The payload is produced on the first poll, not at call time.
pub async fn fetch_data() -> Result<Vec<i32>, FetchError> {
    let data = future::lazy(|_| FEED_SAMPLE.to_vec()).await;
    trace!("fetched {} values", data.len());
    Ok(data)
}
