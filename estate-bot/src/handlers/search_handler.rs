//! The housing-search conversation: `/start`, free-text requests and result buttons.

use std::sync::Arc;

use async_trait::async_trait;
use estate_core::{Bot, CallbackEvent, Chat, Event, Handler, HandlerResponse, Menu, Message, Result};
use search_orchestrator::{SearchOrchestrator, SearchStatus};
use tracing::{error, info, instrument, warn};

use crate::conversation::render::{group_menu, results_menu, unit_menu};
use crate::conversation::{BackTarget, CallbackAction, PageDirection, SearchContext, SessionStore};
use crate::notifier::ChatNotifier;

pub const GREETING: &str = "Hi! Tell me what you are looking for: property type, number of \
bedrooms and your budget, plus anything else that matters (area, building, view, furnishing).";
pub const GENERIC_ERROR_MESSAGE: &str =
    "Sorry, something went wrong while processing your request. Please try again.";
pub const EXPIRED_MESSAGE: &str = "This search has expired. Send a new request to search again.";
pub const NO_SEARCH_FALLBACK: &str =
    "Could you tell me the property type, number of bedrooms and your budget?";

/// What a button press does to the menu it belongs to.
enum View {
    Show(Menu),
    /// Already at the requested page; Telegram rejects an identical edit.
    Unchanged,
}

/// Runs searches for text turns and drives the result menus for button presses.
pub struct SearchHandler {
    bot: Arc<dyn Bot>,
    orchestrator: SearchOrchestrator,
    sessions: SessionStore,
    page_size: usize,
}

impl SearchHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        orchestrator: SearchOrchestrator,
        sessions: SessionStore,
        page_size: usize,
    ) -> Self {
        Self {
            bot,
            orchestrator,
            sessions,
            page_size: page_size.max(1),
        }
    }

    async fn send(&self, chat: &Chat, text: &str) {
        if let Err(e) = self.bot.send_message(chat, text).await {
            error!(error = %e, chat_id = chat.id, "Failed to send message");
        }
    }

    /// Edits the menu the button belongs to, or sends a new one when it is not accessible.
    async fn show(&self, chat: &Chat, message_id: Option<&str>, menu: &Menu) -> Result<()> {
        match message_id {
            Some(id) => self.bot.edit_menu(chat, id, menu).await,
            None => self.bot.send_menu(chat, menu).await.map(|_| ()),
        }
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn on_message(&self, message: &Message) -> Result<HandlerResponse> {
        let chat = &message.chat;

        if message.is_command("start") {
            self.sessions.reset(chat.id).await;
            self.send(chat, GREETING).await;
            return Ok(HandlerResponse::Stop);
        }

        if message.content.trim().is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        let request = self.sessions.append_request(chat.id, &message.content).await;
        let notifier = ChatNotifier::new(self.bot.clone(), chat.clone());

        let outcome = match self.orchestrator.process_query(&request, &notifier).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, chat_id = chat.id, "Search request failed");
                self.send(chat, GENERIC_ERROR_MESSAGE).await;
                return Ok(HandlerResponse::Stop);
            }
        };

        info!(status = %outcome.status, "Search finished");

        if outcome.status == SearchStatus::NoSearch {
            let reply = if outcome.message.trim().is_empty() {
                NO_SEARCH_FALLBACK
            } else {
                outcome.message.as_str()
            };
            self.send(chat, reply).await;
            return Ok(HandlerResponse::Stop);
        }

        if !outcome.status.has_results() {
            self.send(chat, &outcome.message).await;
            self.sessions.finish_search(chat.id, None).await;
            return Ok(HandlerResponse::Stop);
        }

        let context = SearchContext::from_outcome(outcome);
        let menu = results_menu(&context, self.page_size);
        self.sessions.finish_search(chat.id, Some(context)).await;
        self.bot.send_menu(chat, &menu).await?;
        Ok(HandlerResponse::Stop)
    }

    #[instrument(skip(self, callback), fields(chat_id = callback.chat.id, data = %callback.data))]
    async fn on_callback(&self, callback: &CallbackEvent) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.answer_callback(&callback.id).await {
            warn!(error = %e, "Failed to answer callback");
        }

        let chat = &callback.chat;
        let action = match callback.data.parse::<CallbackAction>() {
            Ok(action) => action,
            Err(e) => {
                warn!(error = %e, "Unknown button token");
                self.send(chat, EXPIRED_MESSAGE).await;
                return Ok(HandlerResponse::Stop);
            }
        };

        let page_size = self.page_size;
        let units_of = |ctx: &SearchContext, key: &str| {
            ctx.group(key)
                .map(|group| group_menu(group, key, ctx.group_page(key), page_size))
        };
        let view = self
            .sessions
            .with_search(chat.id, |ctx| match action {
                CallbackAction::Paginate(direction) => {
                    if ctx.turn_page(direction == PageDirection::Next, page_size) {
                        Some(View::Show(results_menu(ctx, page_size)))
                    } else {
                        Some(View::Unchanged)
                    }
                }
                CallbackAction::PaginateGroup(key, direction) => {
                    match ctx.turn_group_page(&key, direction == PageDirection::Next, page_size) {
                        Some(true) => units_of(ctx, &key).map(View::Show),
                        Some(false) => Some(View::Unchanged),
                        None => None,
                    }
                }
                CallbackAction::GoBack(BackTarget::Groups) => {
                    Some(View::Show(results_menu(ctx, page_size)))
                }
                CallbackAction::OpenGroup(key) => {
                    ctx.group_pages.remove(&key);
                    units_of(ctx, &key).map(View::Show)
                }
                CallbackAction::GoBack(BackTarget::Group(key)) => units_of(ctx, &key).map(View::Show),
                CallbackAction::OpenItem(id) => ctx
                    .unit(id)
                    .map(|(key, record)| View::Show(unit_menu(record, key))),
            })
            .await
            .flatten();

        match view {
            Some(View::Show(menu)) => self.show(chat, callback.message_id.as_deref(), &menu).await?,
            Some(View::Unchanged) => info!("Already on the requested page"),
            None => {
                info!("Button refers to a search that is no longer held");
                self.send(chat, EXPIRED_MESSAGE).await;
            }
        }
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for SearchHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        match event {
            Event::Message(message) => self.on_message(message).await,
            Event::Callback(callback) => self.on_callback(callback).await,
        }
    }
}
