//! Turns OS termination signals into `Message::Quit`

use codewave_core::prelude::*;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::message::Message;

/// Forward the first SIGINT/SIGTERM (Ctrl+C elsewhere) to the engine as a
/// quit request. The task ends after one signal, or as soon as `shutdown`
/// turns `true`.
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            signal = next_shutdown_signal() => match signal {
                Ok(name) => {
                    info!("{} received, leaving the page", name);
                    if tx.send(Message::Quit).await.is_err() {
                        debug!("engine already gone, quit request dropped");
                    }
                }
                Err(e) => error!("Signal handler error: {}", e),
            },
            _ = async { let _ = shutdown.wait_for(|stop| *stop).await; } => {
                debug!("Signal handler stopping");
            }
        }
    })
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn next_shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}
