use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, info_span, warn, Instrument};

use crate::domain::ports::ConnectionCheck;
use crate::error::AppError;

/// Watches the shared database handle. A lost connection is re-established;
/// any other failure is handed back to the caller as fatal.
pub struct ConnectionMonitor {
    check: Arc<dyn ConnectionCheck>,
    interval: Duration,
}

impl ConnectionMonitor {
    pub fn new(check: Arc<dyn ConnectionCheck>, interval: Duration) -> Self {
        Self { check, interval }
    }

    /// Runs until a fatal error occurs and returns it.
    pub async fn run(&self) -> AppError {
        info!("Starting database connection monitor...");

        loop {
            sleep(self.interval).await;

            let outcome = async {
                match self.check.ping().await {
                    Ok(()) => Ok(()),
                    Err(fault) => self.handle_fault(fault).await,
                }
            }
                .instrument(info_span!("db_monitor"))
                .await;

            if let Err(fatal) = outcome {
                return fatal;
            }
        }
    }

    pub async fn handle_fault(&self, fault: AppError) -> Result<(), AppError> {
        error!("Database error: {}", fault);

        if !fault.is_connection_lost() {
            return Err(fault);
        }

        warn!("Database connection lost. Reconnecting...");
        match self.check.reconnect().await {
            Ok(()) => {
                info!("Database connection re-established");
                Ok(())
            }
            Err(e) if e.is_connection_lost() => {
                warn!("Reconnect failed, retrying on next check: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn lost() -> AppError {
        AppError::Database(sqlx::Error::Io(io::Error::new(io::ErrorKind::ConnectionAborted, "server went away")))
    }

    fn fatal() -> AppError {
        AppError::Database(sqlx::Error::Protocol("unexpected packet".into()))
    }

    /// Replays scripted ping results, then reports healthy.
    struct ScriptedConnection {
        pings: Mutex<Vec<Result<(), AppError>>>,
        reconnect_fails_with: Mutex<Option<AppError>>,
        reconnects: AtomicUsize,
    }

    impl ScriptedConnection {
        fn new(mut pings: Vec<Result<(), AppError>>) -> Self {
            pings.reverse();
            Self {
                pings: Mutex::new(pings),
                reconnect_fails_with: Mutex::new(None),
                reconnects: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ConnectionCheck for ScriptedConnection {
        async fn ping(&self) -> Result<(), AppError> {
            self.pings.lock().unwrap().pop().unwrap_or(Ok(()))
        }

        async fn reconnect(&self) -> Result<(), AppError> {
            self.reconnects.fetch_add(1, Ordering::SeqCst);
            match self.reconnect_fails_with.lock().unwrap().take() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn connection_lost_triggers_reconnect() {
        let check = Arc::new(ScriptedConnection::new(vec![]));
        let monitor = ConnectionMonitor::new(check.clone(), Duration::from_millis(1));

        monitor.handle_fault(lost()).await.expect("lost connection must not be fatal");
        assert_eq!(check.reconnects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn other_errors_are_fatal_without_reconnect() {
        let check = Arc::new(ScriptedConnection::new(vec![]));
        let monitor = ConnectionMonitor::new(check.clone(), Duration::from_millis(1));

        let err = monitor.handle_fault(fatal()).await.unwrap_err();
        assert!(matches!(err, AppError::Database(sqlx::Error::Protocol(_))));
        assert_eq!(check.reconnects.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_reconnect_after_loss_is_retried_later() {
        let check = Arc::new(ScriptedConnection::new(vec![]));
        *check.reconnect_fails_with.lock().unwrap() = Some(lost());
        let monitor = ConnectionMonitor::new(check.clone(), Duration::from_millis(1));

        assert!(monitor.handle_fault(lost()).await.is_ok());
    }

    #[tokio::test]
    async fn fatal_reconnect_error_is_returned() {
        let check = Arc::new(ScriptedConnection::new(vec![]));
        *check.reconnect_fails_with.lock().unwrap() = Some(fatal());
        let monitor = ConnectionMonitor::new(check.clone(), Duration::from_millis(1));

        assert!(monitor.handle_fault(lost()).await.is_err());
    }

    #[tokio::test]
    async fn run_survives_loss_and_stops_on_fatal_error() {
        let check = Arc::new(ScriptedConnection::new(vec![Ok(()), Err(lost()), Ok(()), Err(fatal())]));
        let monitor = ConnectionMonitor::new(check.clone(), Duration::from_millis(1));

        let err = tokio::time::timeout(Duration::from_secs(5), monitor.run())
            .await
            .expect("monitor should stop on the fatal error");

        assert!(!err.is_connection_lost());
        assert_eq!(check.reconnects.load(Ordering::SeqCst), 1);
    }
}
