//! Action handlers: side effects requested by the update function

use std::sync::Arc;
use std::time::Duration;

use codewave_core::ContactForm;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::timers::TimerRegistry;
use crate::transport::{SubmissionTransport, TransportError};

/// Execute an action returned by `handler::update`
pub fn handle_action<T>(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut TimerRegistry,
    transport: &Arc<T>,
    submit_timeout: Duration,
) where
    T: SubmissionTransport + Sync + 'static,
{
    match action {
        UpdateAction::ScheduleTimer(spec) => {
            timers.schedule(spec, msg_tx.clone());
        }

        UpdateAction::CancelTimer(kind) => {
            timers.cancel(kind);
        }

        UpdateAction::SubmitContact { form } => {
            let task =
                spawn_submission(form, msg_tx.clone(), Arc::clone(transport), submit_timeout);
            timers.track_submission(task);
        }
    }
}

/// Run the transport in the background and report the outcome as a message.
fn spawn_submission<T>(
    form: ContactForm,
    msg_tx: mpsc::Sender<Message>,
    transport: Arc<T>,
    submit_timeout: Duration,
) -> JoinHandle<()>
where
    T: SubmissionTransport + Sync + 'static,
{
    tokio::spawn(async move {
        let outcome = match tokio::time::timeout(submit_timeout, transport.submit(form)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(
                u64::try_from(submit_timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        };

        let msg = match outcome {
            Ok(receipt) => {
                debug!("Submission acknowledged: {}", receipt.reference);
                Message::SubmissionSucceeded(receipt)
            }
            Err(e) => {
                let err = codewave_core::Error::from(e);
                warn!("Submission failed: {}", err);
                Message::SubmissionFailed(err.to_string())
            }
        };

        let _ = msg_tx.send(msg).await;
    })
}
