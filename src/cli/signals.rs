//! Shutdown signal handling

use tokio::sync::watch;
use tracing::debug;

/// Shutdown signal raised by Ctrl+C (and SIGTERM on Unix)
pub struct ShutdownSignal {
    sender: watch::Sender<bool>,
    receiver: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(false);
        Self { sender, receiver }
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Request shutdown
    pub fn trigger(&self) {
        self.sender.send_replace(true);
    }

    /// Wait until shutdown is requested
    pub async fn wait(&self) {
        let mut receiver = self.receiver.clone();
        // Only errors when the sender is gone, which `self` prevents
        let _ = receiver.wait_for(|requested| *requested).await;
    }

    /// Setup signal handlers
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Received Ctrl+C");
                sender.send_replace(true);
            }
        });

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let sender = self.sender.clone();
            let mut sigterm = signal(SignalKind::terminate())?;
            tokio::spawn(async move {
                sigterm.recv().await;
                debug!("Received SIGTERM");
                sender.send_replace(true);
            });
        }

        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
