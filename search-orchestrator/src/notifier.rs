use async_trait::async_trait;

/// Receives progress messages while a request is processed (relaxation steps, debug
/// parameters). Delivery failures are the implementation's to log; they never abort a search.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}
