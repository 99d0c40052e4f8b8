//! Retry helper for HTTP requests with exponential backoff.
//!
//! Reads, updates and deletes send through [`send_request_with_retry`]:
//! rate-limited (429) and transient gateway responses (502, 503, 504) are
//! retried with exponential backoff. Creates send through
//! [`send_create_request_with_retry`], which retries 429 only; a gateway
//! error on a POST may still have created the record, and replaying it
//! would create a duplicate.
//!
//! Any other non-2xx response becomes [`ClientError::ApiError`] carrying the
//! HubSpot error body.

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::HubSpotErrorBody;
use crate::tracing::inject_trace_context;

/// Response header carrying the HubSpot request correlation ID.
const CORRELATION_ID_HEADER: &str = "x-hubspot-correlation-id";

/// Sends an HTTP request, retrying rate-limited and unavailable responses.
///
/// The wait before retry `n` (starting at 0) is `2^n` seconds, or the
/// server's `Retry-After` value in seconds when that is longer. `max_retries`
/// counts retries, so at most `max_retries + 1` requests are sent.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when every attempt was retryable.
/// Returns `ClientError::ApiError` for any other non-2xx response.
/// Propagates transport failures as `ClientError::HttpError`.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    send_with_policy(builder, max_retries, ClientError::is_retryable_status).await
}

/// Sends a record-creating request, retrying only rate-limited responses.
///
/// HubSpot rejects a 429 before doing any work, so replaying it is safe.
/// A 502/503/504 is returned as [`ClientError::ApiError`] on the first
/// occurrence. Backoff and attempt counting match [`send_request_with_retry`].
pub async fn send_create_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    send_with_policy(builder, max_retries, is_rate_limited).await
}

fn is_rate_limited(status: u16) -> bool {
    status == 429
}

async fn send_with_policy(
    builder: RequestBuilder,
    max_retries: usize,
    retryable: fn(u16) -> bool,
) -> Result<Response> {
    let builder = inject_trace_context(builder);

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder.send().await?;
                    return check_status(response).await;
                } else {
                    debug!("Cannot clone request builder for retry");
                    return Err(ClientError::MaxRetriesExceeded(attempt));
                }
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if !retryable(status) {
            if attempt > 0 && response.status().is_success() {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let exponential = 2u64.pow(attempt as u32);
            let backoff_secs =
                retry_after_secs(&response).map_or(exponential, |s| s.max(exponential));
            debug!(
                status,
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_secs,
                "Retryable status, backing off"
            );
            tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
        } else {
            debug!(status, attempts = attempt + 1, "Max retries exhausted");
        }
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Seconds from a numeric `Retry-After` header.
fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

/// Pass 2xx responses through; turn anything else into an API error.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let header_correlation_id = response
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (message, category, correlation_id) =
        match serde_json::from_str::<HubSpotErrorBody>(&body) {
            Ok(parsed) => (
                parsed.message,
                parsed.category,
                parsed.correlation_id.or(header_correlation_id),
            ),
            Err(_) => (body, None, header_correlation_id),
        };

    Err(ClientError::ApiError {
        status,
        url,
        message,
        category,
        correlation_id,
    })
}
