//! Contact submission transport
//!
//! The contact flow hands a snapshot of the form to a [`SubmissionTransport`]
//! and waits for a [`Receipt`]. The default [`SimulatedTransport`] just waits
//! a fixed delay; a real backend plugs in behind the same trait.

use std::time::Duration;

use codewave_core::{ContactForm, Receipt};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::ContactSettings;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("no response after {0}ms")]
    Timeout(u64),
}

impl From<TransportError> for codewave_core::Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(millis) => codewave_core::Error::TransportTimeout { millis },
            other => codewave_core::Error::transport(other.to_string()),
        }
    }
}

/// Delivers a contact form somewhere.
///
/// Use `SubmissionTransport` (the `Send` variant) when the future has to
/// cross threads, e.g. inside `tokio::spawn`.
#[trait_variant::make(SubmissionTransport: Send)]
pub trait LocalSubmissionTransport {
    /// Send the form; resolves once the other side has acknowledged it.
    async fn submit(&self, form: ContactForm) -> Result<Receipt, TransportError>;
}

/// Pretends to send the form after an artificial delay.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    fail: bool,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// A transport that always reports the service as unavailable.
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }

    pub fn from_settings(settings: &ContactSettings) -> Self {
        Self {
            delay: Duration::from_millis(settings.submit_delay_ms),
            fail: settings.simulate_failure,
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, form: ContactForm) -> Result<Receipt, TransportError> {
        debug!(
            "Simulating submission from {} <{}> ({} chars)",
            form.name,
            form.email,
            form.message.len()
        );
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(TransportError::Unavailable(
                "simulated outage".to_string(),
            ));
        }
        Ok(Receipt::new(receipt_reference()))
    }
}

/// Human-friendly reference like `CW-20250314-4821`.
pub fn receipt_reference() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..10000);
    format!("CW-{}-{}", chrono::Local::now().format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            message: "Hello".into(),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_then_succeeds() {
        let transport = SimulatedTransport::new(Duration::from_millis(2000));
        let start = tokio::time::Instant::now();
        let receipt = SubmissionTransport::submit(&transport, form()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert!(receipt.reference.starts_with("CW-"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_transport() {
        let transport = SimulatedTransport::failing(Duration::from_millis(10));
        let err = SubmissionTransport::submit(&transport, form())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Unavailable(_)));
    }

    #[test]
    fn test_transport_error_into_core_error() {
        let err: codewave_core::Error = TransportError::Timeout(5000).into();
        assert!(matches!(
            err,
            codewave_core::Error::TransportTimeout { millis: 5000 }
        ));
        let err: codewave_core::Error = TransportError::Unavailable("outage".into()).into();
        assert!(matches!(err, codewave_core::Error::Transport { .. }));
        assert!(err.to_string().contains("outage"));
    }

    #[test]
    fn test_from_settings() {
        let settings = ContactSettings {
            simulate_failure: true,
            ..Default::default()
        };
        let transport = SimulatedTransport::from_settings(&settings);
        assert!(transport.fail);
        assert_eq!(transport.delay, Duration::from_millis(2000));
    }
}
