//! # Handler chain
//!
//! Runs a sequence of handlers for each incoming [`Event`]. Each handler has optional
//! before/handle/after: all `before` run in order (any `false` stops the chain); then
//! `handle` runs until one returns Stop or Reply; then all `after` run in reverse order.

use estate_core::{Event, Handler, HandlerResponse, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse. Returns the final response.
    #[instrument(skip(self, event), fields(kind = event.kind(), chat_id = event.chat().id))]
    pub async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let user_id = event.user().id;
        info!(user_id, event_id = %event.id(), "step: handler_chain started");

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(event).await? {
                info!(user_id, handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(event).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(user_id, handler = %name, "step: handler chain stopped by handler");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(event, &final_response).await?;
        }

        info!(user_id, event_id = %event.id(), "step: handler_chain finished");
        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
