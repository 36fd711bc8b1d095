//! Shared test utilities for rd-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::Mutex;

    use rd_core::notify::{Delivery, EmailNotice, EmailNotifier};
    use tempfile::TempDir;

    use crate::TicketStore;
    use crate::service::TicketService;

    /// Records every notice it is asked to send and answers with a fixed outcome.
    pub struct RecordingNotifier {
        sent: Mutex<Vec<EmailNotice>>,
        outcome: Delivery,
    }

    impl RecordingNotifier {
        pub fn new(outcome: Delivery) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                outcome,
            }
        }

        pub fn notices(&self) -> Vec<EmailNotice> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl EmailNotifier for RecordingNotifier {
        async fn send_status_email(&self, notice: &EmailNotice) -> Delivery {
            self.sent.lock().unwrap().push(notice.clone());
            self.outcome.clone()
        }
    }

    /// Initialized store in a temp dir. Keep the `TempDir` alive for the test.
    pub async fn test_store() -> (TempDir, TicketStore) {
        let dir = TempDir::new().unwrap();
        let store = TicketStore::new(dir.path().join("tickets.db"));
        store.initialize().await.unwrap();
        (dir, store)
    }

    /// Service over a temp store with a notifier that reports success.
    pub async fn test_service() -> (TempDir, TicketService<RecordingNotifier>) {
        test_service_with(Delivery::Sent).await
    }

    /// Service over a temp store with a notifier that reports `outcome`.
    pub async fn test_service_with(
        outcome: Delivery,
    ) -> (TempDir, TicketService<RecordingNotifier>) {
        let (dir, store) = test_store().await;
        let svc = TicketService::new(store, RecordingNotifier::new(outcome), "CMT");
        (dir, svc)
    }
}
