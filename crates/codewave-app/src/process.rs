//! Message processing
//!
//! Runs a message (and any follow-up messages it produces) through the TEA
//! update function and dispatches the resulting actions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerRegistry;
use crate::transport::SubmissionTransport;

/// Process a message through the TEA update function
pub fn process_message<T>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut TimerRegistry,
    transport: &Arc<T>,
) where
    T: SubmissionTransport + Sync + 'static,
{
    let submit_timeout = Duration::from_millis(state.settings.contact.timeout_ms);

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        for action in result.actions {
            handle_action(action, msg_tx, timers, transport, submit_timeout);
        }

        msg = result.message;
    }
}
