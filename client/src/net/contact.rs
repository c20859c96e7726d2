//! Contact form submission to an external form collector.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`.
//! Everywhere else callers supply their own [`ContactTransport`], which is how
//! the outcome mapping is exercised without a network.
//!
//! ERROR HANDLING
//! ==============
//! Every submission resolves to exactly one [`SubmitOutcome`]. Validation
//! errors from the collector are surfaced verbatim, other non-2xx replies get
//! a generic server message, and transport failures become
//! [`SubmitOutcome::NetworkError`]. Nothing is retried.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Deserialize;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const SERVER_ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Oops! A network error occurred. Please check your connection and try again.";

/// Result of one contact form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The collector accepted the message (2xx).
    Success,
    /// The collector rejected the message; `message` is shown to the user.
    RecoverableError { message: String },
    /// The request never completed.
    NetworkError,
}

impl SubmitOutcome {
    /// Human-readable status text for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::RecoverableError { message } => message.as_str(),
            Self::NetworkError => NETWORK_ERROR_MESSAGE,
        }
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    message: Option<String>,
}

/// Map a completed response to an outcome.
pub fn classify_response(response: &EndpointResponse) -> SubmitOutcome {
    if response.is_success() {
        return SubmitOutcome::Success;
    }
    let message = validation_message(&response.body).unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_owned());
    SubmitOutcome::RecoverableError { message }
}

/// Join the collector's validation messages with `", "`.
///
/// Returns `None` when the body is not JSON, has no `errors` list, or the list
/// carries no messages.
fn validation_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = parsed.errors?.into_iter().filter_map(|e| e.message).collect();
    if messages.is_empty() {
        return None;
    }
    Some(messages.join(", "))
}

/// Sends form fields to a collector endpoint.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// POST `fields` to `action` with `Accept: application/json`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request could not be completed.
    async fn post_form(&self, action: &str, fields: &[(&'static str, String)]) -> Result<EndpointResponse, String>;
}

/// Submit the contact form once and classify the result.
pub async fn submit_contact<T: ContactTransport>(
    transport: &T,
    action: &str,
    fields: &[(&'static str, String)],
) -> SubmitOutcome {
    match transport.post_form(action, fields).await {
        Ok(response) => classify_response(&response),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::debug!("contact submission to {action} failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            SubmitOutcome::NetworkError
        }
    }
}

/// Browser `fetch` transport with a URL-encoded body.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl ContactTransport for FetchTransport {
    async fn post_form(&self, action: &str, fields: &[(&'static str, String)]) -> Result<EndpointResponse, String> {
        let params = web_sys::UrlSearchParams::new().map_err(|e| format!("{e:?}"))?;
        for (name, value) in fields {
            params.append(name, value);
        }
        let resp = gloo_net::http::Request::post(action)
            .header("Accept", "application/json")
            .body(params)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        // An unreadable error body still yields the generic server message.
        let body = resp.text().await.unwrap_or_default();
        Ok(EndpointResponse { status, body })
    }
}
