//! Notification queue and worker.
//!
//! `dispatch` never blocks: payloads go into a bounded channel and a
//! worker task shows them one at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use notification_curation::{DesktopNotifier, DisplayPayload};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::Present;

const QUEUE_CAPACITY: usize = 100;

/// Sending half of the desktop notification queue.
#[derive(Debug, Clone)]
pub struct QueueNotifier {
    tx: mpsc::Sender<DisplayPayload>,
    dropped: Arc<AtomicUsize>,
}

impl QueueNotifier {
    /// Payloads rejected because the queue was full or closed.
    /// Shared by all clones.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl DesktopNotifier for QueueNotifier {
    fn dispatch(&self, payload: DisplayPayload) {
        let tag = payload.tag.clone();
        if let Err(e) = self.tx.try_send(payload) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(%tag, "Notification queue full or closed: {e}");
        }
    }
}

/// Start the queue worker. It stops once every [`QueueNotifier`] clone
/// is dropped and the queue is drained.
pub fn start_worker<P>(presenter: P) -> (QueueNotifier, JoinHandle<()>)
where
    P: Present + Send + Sync + 'static,
{
    spawn_worker(presenter, QUEUE_CAPACITY)
}

fn spawn_worker<P>(presenter: P, capacity: usize) -> (QueueNotifier, JoinHandle<()>)
where
    P: Present + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel::<DisplayPayload>(capacity);
    let handle = tokio::spawn(worker_loop(Arc::new(presenter), rx));
    tracing::info!("Notification queue worker started");
    let notifier = QueueNotifier {
        tx,
        dropped: Arc::new(AtomicUsize::new(0)),
    };
    (notifier, handle)
}

async fn worker_loop<P>(presenter: Arc<P>, mut rx: mpsc::Receiver<DisplayPayload>)
where
    P: Present + Send + Sync + 'static,
{
    while let Some(payload) = rx.recv().await {
        let tag = payload.tag.clone();
        let p = presenter.clone();
        // Platform backends may block on D-Bus
        match tokio::task::spawn_blocking(move || p.present(&payload)).await {
            Ok(Ok(())) => tracing::debug!(%tag, "Desktop notification shown"),
            Ok(Err(e)) => tracing::warn!(%tag, "Failed to show notification: {e}"),
            Err(e) => tracing::error!(%tag, "Notification task failed: {e}"),
        }
    }

    tracing::info!("Notification queue worker stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::desktop::DesktopError;

    #[derive(Default)]
    struct Recording(Arc<Mutex<Vec<String>>>);

    impl Present for Recording {
        fn present(&self, payload: &DisplayPayload) -> Result<(), DesktopError> {
            self.0.lock().expect("lock").push(payload.tag.clone());
            Ok(())
        }
    }

    struct Failing;

    impl Present for Failing {
        fn present(&self, _payload: &DisplayPayload) -> Result<(), DesktopError> {
            Err(DesktopError::Service("no notification daemon".into()))
        }
    }

    fn payload(tag: &str) -> DisplayPayload {
        DisplayPayload {
            tag: tag.into(),
            title: "Alice".into(),
            icon: String::new(),
            body: Some("followed you".into()),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_worker_shows_in_order_and_stops() {
        let shown = Arc::new(Mutex::new(Vec::new()));
        let (notifier, handle) = start_worker(Recording(shown.clone()));

        notifier.dispatch(payload("1"));
        notifier.dispatch(payload("2"));
        assert_eq!(notifier.dropped(), 0);
        drop(notifier);

        handle.await.expect("worker panicked");
        assert_eq!(*shown.lock().expect("lock"), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_presenter_errors_do_not_stop_worker() {
        let (notifier, handle) = start_worker(Failing);
        notifier.dispatch(payload("1"));
        notifier.dispatch(payload("2"));
        drop(notifier);

        handle.await.expect("worker panicked");
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_blocking() {
        let shown = Arc::new(Mutex::new(Vec::new()));
        let (notifier, handle) = spawn_worker(Recording(shown.clone()), 1);

        for i in 0..50 {
            notifier.dispatch(payload(&i.to_string()));
        }
        let dropped = notifier.dropped();
        drop(notifier);
        handle.await.expect("worker panicked");

        let shown = shown.lock().expect("lock");
        assert!(!shown.is_empty());
        assert!(dropped > 0);
        assert_eq!(shown.len() + dropped, 50);
    }
}
