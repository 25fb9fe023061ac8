//! One-shot shutdown notification.
//!
//! A background thread runs a small tokio runtime that waits for Ctrl-C
//! (and SIGTERM on Unix), then sends a single message to the UI thread,
//! which polls for it once per frame.

use std::thread;

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use tracing::{debug, info, warn};

/// Sending half: fires the shutdown notification.
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    tx: Sender<()>,
}

impl ShutdownTrigger {
    /// Fires the notification. Firing more than once has no further effect.
    pub fn fire(&self) {
        // A full channel means the notification is already pending.
        let _ = self.tx.try_send(());
    }
}

/// Receiving half: polled by the render loop.
#[derive(Debug)]
pub struct ShutdownSignal {
    rx: Receiver<()>,
    triggered: bool,
}

impl ShutdownSignal {
    /// Creates a connected trigger/signal pair.
    #[must_use]
    pub fn channel() -> (ShutdownTrigger, ShutdownSignal) {
        let (tx, rx) = bounded(1);
        (
            ShutdownTrigger { tx },
            ShutdownSignal {
                rx,
                triggered: false,
            },
        )
    }

    /// Spawns the OS signal listener and returns the signal it fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener thread cannot be spawned.
    pub fn install() -> Result<Self> {
        let (trigger, signal) = Self::channel();

        thread::Builder::new()
            .name("shutdown-signal".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        warn!(error = %e, "Could not start signal runtime, Ctrl-C will not be handled");
                        return;
                    }
                };

                match runtime.block_on(wait_for_interrupt()) {
                    Ok(name) => {
                        info!(signal = name, "Received shutdown signal");
                        trigger.fire();
                    }
                    Err(e) => warn!(error = %e, "Failed to listen for shutdown signals"),
                }
            })
            .context("Failed to spawn shutdown signal thread")?;

        debug!("Shutdown signal listener installed");
        Ok(signal)
    }

    /// Returns true once the notification has been received.
    ///
    /// Never blocks. Stays true after the first positive poll.
    pub fn is_triggered(&mut self) -> bool {
        if !self.triggered {
            match self.rx.try_recv() {
                Ok(()) => self.triggered = true,
                // A dropped trigger means nobody can ask us to stop.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
            }
        }
        self.triggered
    }
}

/// Waits for the first interrupt and returns its name.
async fn wait_for_interrupt() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                Ok("SIGINT")
            }
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok("Ctrl-C")
    }
}
