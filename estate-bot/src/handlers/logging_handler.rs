use async_trait::async_trait;
use estate_core::{Event, Handler, HandlerResponse, Result};
use tracing::{debug, info, instrument};

/// Logs each event in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let user = event.user();
        match event {
            Event::Message(message) => info!(
                user_id = user.id,
                username = %user.username.as_deref().unwrap_or("unknown"),
                message_content = %message.content,
                "Received message"
            ),
            Event::Callback(callback) => info!(
                user_id = user.id,
                username = %user.username.as_deref().unwrap_or("unknown"),
                data = %callback.data,
                "Received button press"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(
            event_id = %event.id(),
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}
