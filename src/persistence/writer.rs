//! Single-writer persistence queue
//!
//! A spawned task owns the write side of a [`PersistenceBridge`] and drains
//! snapshots from an unbounded channel in the order they were enqueued. Writes
//! therefore land in mutation order and the stored copy always converges to
//! the most recent in-memory state, even when callers never await a save.

use crate::cart::CartState;
use crate::error::{CartError, CartResult};
use crate::persistence::bridge::PersistenceBridge;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Messages processed by the writer task
enum WriterMessage {
    /// Persist a full snapshot and report the outcome
    Save {
        snapshot: CartState,
        reply: oneshot::Sender<CartResult<()>>,
    },

    /// Report whether the latest write succeeded once everything before it is done
    Flush { reply: oneshot::Sender<CartResult<()>> },
}

/// Handle to the writer task
///
/// The task exits once every handle has been dropped and the queue is empty.
#[derive(Debug, Clone)]
pub struct PersistenceWriter {
    sender: mpsc::UnboundedSender<WriterMessage>,
}

impl PersistenceWriter {
    /// Start the writer task on the current tokio runtime
    pub fn spawn(bridge: PersistenceBridge) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(bridge, receiver));
        Self { sender }
    }

    /// Queue a snapshot for writing
    ///
    /// Never blocks. The returned handle may be awaited for the outcome or
    /// dropped; the write happens either way.
    pub fn enqueue(&self, snapshot: CartState) -> PendingSave {
        let (reply, receiver) = oneshot::channel();

        if let Err(mpsc::error::SendError(message)) =
            self.sender.send(WriterMessage::Save { snapshot, reply })
        {
            if let WriterMessage::Save { reply, .. } = message {
                let _ = reply.send(Err(CartError::WriterClosed));
            }
        }

        PendingSave { receiver }
    }

    /// Wait for all queued writes
    ///
    /// Returns the failure of the most recent write, if it failed. Each write
    /// carries the full cart, so a later success supersedes earlier failures.
    /// Flushing does not clear a failure: it is reported until the next
    /// successful write.
    pub async fn flush(&self) -> CartResult<()> {
        let (reply, receiver) = oneshot::channel();
        self.sender
            .send(WriterMessage::Flush { reply })
            .map_err(|_| CartError::WriterClosed)?;

        receiver.await.map_err(|_| CartError::WriterClosed)?
    }
}

/// Outcome of one queued write
#[derive(Debug)]
#[must_use = "dropping a PendingSave does not cancel the write, but its failure goes unobserved"]
pub struct PendingSave {
    receiver: oneshot::Receiver<CartResult<()>>,
}

impl PendingSave {
    /// Wait until the snapshot has been written
    pub async fn wait(self) -> CartResult<()> {
        self.receiver.await.map_err(|_| CartError::WriterClosed)?
    }
}

async fn run_writer(bridge: PersistenceBridge, mut receiver: mpsc::UnboundedReceiver<WriterMessage>) {
    // Reason the most recent write failed, cleared by the next success
    let mut last_failure: Option<String> = None;

    while let Some(message) = receiver.recv().await {
        match message {
            WriterMessage::Save { snapshot, reply } => {
                let result = bridge.save(&snapshot).await;
                match &result {
                    Ok(()) => last_failure = None,
                    Err(e) => {
                        warn!("Failed to persist cart to {}: {}", bridge.key(), e);
                        last_failure = Some(e.to_string());
                    }
                }
                let _ = reply.send(result);
            }
            WriterMessage::Flush { reply } => {
                let result = match &last_failure {
                    Some(reason) => Err(CartError::write_failed(bridge.key().as_str(), reason)),
                    None => Ok(()),
                };
                let _ = reply.send(result);
            }
        }
    }

    debug!("Persistence writer for {} stopped", bridge.key());
}
