//! Conversation flow through the handler chain with a recording bot, a scripted extractor
//! and a real SQLite listing store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use criteria_extractor::{CriteriaExtractor, Extraction, ExtractorError};
use estate_bot::components::build_handler_chain;
use estate_bot::conversation::SessionStore;
use estate_bot::handlers::{EXPIRED_MESSAGE, GENERIC_ERROR_MESSAGE, GREETING};
use estate_core::{Bot, CallbackEvent, Chat, Event, Menu, Message, Result, User};
use handler_chain::HandlerChain;
use property_store::{FilterCriteria, NewUnit, SqlitePropertyStore};
use search_orchestrator::orchestrator::{MSG_NOT_FOUND, MSG_RAISING_PRICE, MSG_STILL_NOTHING};
use search_orchestrator::SearchOrchestrator;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    Text(String),
    Menu(Menu),
    Edit(String, Menu),
    Answer(String),
}

/// Bot that records everything instead of talking to Telegram.
#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingBot {
    fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn send_menu(&self, _chat: &Chat, menu: &Menu) -> Result<String> {
        self.sent.lock().unwrap().push(Sent::Menu(menu.clone()));
        Ok("100".to_string())
    }

    async fn edit_menu(&self, _chat: &Chat, message_id: &str, menu: &Menu) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Edit(message_id.to_string(), menu.clone()));
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Answer(callback_id.to_string()));
        Ok(())
    }
}

/// Asks for a budget until the request mentions "million", then searches. Records every
/// request text it receives.
#[derive(Default)]
struct BudgetExtractor {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl CriteriaExtractor for BudgetExtractor {
    async fn extract(
        &self,
        text: &str,
        _areas: &[String],
        _buildings: &[String],
    ) -> std::result::Result<Extraction, ExtractorError> {
        self.seen.lock().unwrap().push(text.to_string());
        if text.contains("broken") {
            return Err(ExtractorError::MalformedArguments("eof".to_string()));
        }
        if text.contains("million") {
            let property_type = if text.contains("penthouse") {
                "Penthouse"
            } else {
                "Apartment"
            };
            Ok(Extraction::Criteria(FilterCriteria::new(
                property_type,
                2,
                1_000_000.0,
                9_000_000.0,
            )))
        } else {
            Ok(Extraction::Clarification("What is your budget?".to_string()))
        }
    }
}

struct Harness {
    _dir: TempDir,
    bot: Arc<RecordingBot>,
    extractor: Arc<BudgetExtractor>,
    chain: HandlerChain,
}

async fn harness(page_size: usize) -> Harness {
    harness_with_extra_units(page_size, 0).await
}

/// Like [`harness`], with `extra` more units in Marina Tower priced from 7,000,000 up.
async fn harness_with_extra_units(page_size: usize, extra: usize) -> Harness {
    let dir = TempDir::new().unwrap();
    let store = SqlitePropertyStore::from_path(dir.path().join("estate.db"));
    store.migrate().await.unwrap();
    let area = store.add_area("Dubai Marina").await.unwrap();
    let tower = store.add_building("Marina Tower", Some(area)).await.unwrap();
    let vista = store.add_building("Burj Vista", Some(area)).await.unwrap();
    store
        .add_unit(&NewUnit {
            agent_name: Some("Alice".to_string()),
            agent_whatsapp: Some("+971500000001".to_string()),
            ..NewUnit::new("Apartment", "For Sale", 2, 5_000_000.0).in_building(tower, Some(area))
        })
        .await
        .unwrap();
    store
        .add_unit(&NewUnit::new("Apartment", "For Sale", 2, 6_000_000.0).in_building(vista, Some(area)))
        .await
        .unwrap();
    for i in 0..extra {
        let price = 7_000_000.0 + 100_000.0 * i as f64;
        store
            .add_unit(&NewUnit::new("Apartment", "For Sale", 2, price).in_building(tower, Some(area)))
            .await
            .unwrap();
    }

    let bot = Arc::new(RecordingBot::default());
    let extractor = Arc::new(BudgetExtractor::default());
    let orchestrator = SearchOrchestrator::new(Arc::new(store), extractor.clone());
    let chain = build_handler_chain(bot.clone(), orchestrator, SessionStore::new(), page_size);

    Harness {
        _dir: dir,
        bot,
        extractor,
        chain,
    }
}

fn chat() -> Chat {
    Chat {
        id: 555,
        chat_type: "Private".to_string(),
    }
}

fn text(content: &str) -> Event {
    Event::Message(Message {
        id: "1".to_string(),
        user: User::unknown(),
        chat: chat(),
        content: content.to_string(),
        created_at: Utc::now(),
    })
}

fn press(data: &str) -> Event {
    Event::Callback(CallbackEvent {
        id: "cb".to_string(),
        user: User::unknown(),
        chat: chat(),
        message_id: Some("100".to_string()),
        data: data.to_string(),
        created_at: Utc::now(),
    })
}

fn last_menu(sent: &[Sent]) -> Menu {
    sent.iter()
        .rev()
        .find_map(|s| match s {
            Sent::Menu(m) | Sent::Edit(_, m) => Some(m.clone()),
            _ => None,
        })
        .expect("a menu was sent")
}

fn token_for(menu: &Menu, label_prefix: &str) -> String {
    menu.buttons()
        .find(|b| b.label.starts_with(label_prefix))
        .map(|b| b.data.clone())
        .unwrap_or_else(|| panic!("no button starting with {}", label_prefix))
}

/// **Test: /start greets; request text accumulates across turns until a search runs.**
#[tokio::test]
async fn test_start_and_pending_request() {
    let h = harness(5).await;

    h.chain.handle(&text("/start")).await.unwrap();
    assert_eq!(h.bot.take(), vec![Sent::Text(GREETING.to_string())]);

    h.chain.handle(&text("2 bed apartment")).await.unwrap();
    assert_eq!(h.bot.take(), vec![Sent::Text("What is your budget?".to_string())]);

    h.chain.handle(&text("1 to 9 million")).await.unwrap();
    let sent = h.bot.take();
    let menu = last_menu(&sent);
    assert!(menu.text.starts_with("Found 2 properties"));

    let seen = h.extractor.seen.lock().unwrap().clone();
    assert_eq!(seen, vec!["2 bed apartment", "2 bed apartment\n1 to 9 million"]);
}

/// **Test: Result buttons open a building, then a unit with its agent link, then go back.**
#[tokio::test]
async fn test_browse_results() {
    let h = harness(5).await;
    h.chain.handle(&text("2 bed, 1 to 9 million")).await.unwrap();
    let list = last_menu(&h.bot.take());
    assert_eq!(list.rows.len(), 2);
    assert_eq!(list.rows[0][0].label, "Marina Tower (1)");

    h.chain.handle(&press(&token_for(&list, "Marina Tower"))).await.unwrap();
    let sent = h.bot.take();
    assert_eq!(sent[0], Sent::Answer("cb".to_string()));
    let Sent::Edit(ref message_id, ref building) = sent[1] else {
        panic!("expected an edit, got {:?}", sent[1]);
    };
    assert_eq!(message_id, "100");
    assert_eq!(building.text, "Marina Tower: 1 units");

    h.chain.handle(&press(&token_for(building, "2 bd"))).await.unwrap();
    let unit = last_menu(&h.bot.take());
    assert!(unit.text.contains("Price: 5,000,000 AED"));
    assert!(unit.text.contains("https://wa.me/971500000001?text="));

    h.chain.handle(&press(&token_for(&unit, "« Back"))).await.unwrap();
    assert_eq!(last_menu(&h.bot.take()).text, "Marina Tower: 1 units");

    h.chain.handle(&press("back:groups")).await.unwrap();
    assert_eq!(last_menu(&h.bot.take()), list);
}

/// **Test: With one building per page, next/prev move through the list.**
#[tokio::test]
async fn test_pagination() {
    let h = harness(1).await;
    h.chain.handle(&text("2 bed, 1 to 9 million")).await.unwrap();
    let first = last_menu(&h.bot.take());
    assert!(first.text.ends_with("Page 1/2"));

    h.chain.handle(&press("page:next")).await.unwrap();
    let second = last_menu(&h.bot.take());
    assert!(second.text.ends_with("Page 2/2"));
    assert_eq!(second.rows[0][0].label, "Burj Vista (1)");

    h.chain.handle(&press("page:prev")).await.unwrap();
    assert_eq!(last_menu(&h.bot.take()), first);
}

/// **Test: Pressing prev on the first page or next on the last leaves the menu alone.**
#[tokio::test]
async fn test_page_press_at_edge_does_not_edit() {
    let h = harness(1).await;
    h.chain.handle(&text("2 bed, 1 to 9 million")).await.unwrap();
    h.bot.take();

    h.chain.handle(&press("page:prev")).await.unwrap();
    assert_eq!(h.bot.take(), vec![Sent::Answer("cb".to_string())]);

    h.chain.handle(&press("page:next")).await.unwrap();
    h.bot.take();
    h.chain.handle(&press("page:next")).await.unwrap();
    assert_eq!(h.bot.take(), vec![Sent::Answer("cb".to_string())]);
}

/// **Test: A building with more units than fit on a page pages through them.**
#[tokio::test]
async fn test_building_units_are_paged() {
    let h = harness_with_extra_units(2, 3).await;
    h.chain.handle(&text("2 bed, 1 to 9 million")).await.unwrap();
    let list = last_menu(&h.bot.take());
    assert_eq!(list.rows[0][0].label, "Marina Tower (4)");

    h.chain.handle(&press(&token_for(&list, "Marina Tower"))).await.unwrap();
    let first = last_menu(&h.bot.take());
    assert_eq!(first.text, "Marina Tower: 4 units\n\nPage 1/2");
    assert_eq!(first.buttons().filter(|b| b.data.starts_with("item:")).count(), 2);
    assert!(first.buttons().all(|b| b.label != "« Prev"));

    let next = token_for(&first, "Next");
    assert!(next.starts_with("units:next:"));
    h.chain.handle(&press(&next)).await.unwrap();
    let second = last_menu(&h.bot.take());
    assert!(second.text.ends_with("Page 2/2"));
    assert!(second.buttons().all(|b| b.label != "Next »"));

    // The page is remembered when coming back from a unit.
    h.chain.handle(&press(&token_for(&second, "2 bd"))).await.unwrap();
    let unit = last_menu(&h.bot.take());
    h.chain.handle(&press(&token_for(&unit, "« Back"))).await.unwrap();
    assert_eq!(last_menu(&h.bot.take()), second);

    // Next on the last page has nothing to show.
    h.chain.handle(&press(&next)).await.unwrap();
    assert_eq!(h.bot.take(), vec![Sent::Answer("cb".to_string())]);

    h.chain.handle(&press(&token_for(&second, "« Prev"))).await.unwrap();
    assert_eq!(last_menu(&h.bot.take()), first);

    // Reopening the building from the list starts at its first page.
    h.chain.handle(&press(&next)).await.unwrap();
    h.bot.take();
    h.chain.handle(&press(&token_for(&list, "Marina Tower"))).await.unwrap();
    assert_eq!(last_menu(&h.bot.take()), first);
}

/// **Test: Buttons from a forgotten search or with unknown tokens answer "expired".**
#[tokio::test]
async fn test_stale_buttons() {
    let h = harness(5).await;
    h.chain.handle(&press("page:next")).await.unwrap();
    assert_eq!(
        h.bot.take(),
        vec![
            Sent::Answer("cb".to_string()),
            Sent::Text(EXPIRED_MESSAGE.to_string())
        ]
    );

    h.chain.handle(&text("2 bed, 1 to 9 million")).await.unwrap();
    h.bot.take();
    h.chain.handle(&press("group:0000")).await.unwrap();
    h.chain.handle(&press("garbage")).await.unwrap();
    let sent = h.bot.take();
    assert_eq!(
        sent.iter()
            .filter(|s| **s == Sent::Text(EXPIRED_MESSAGE.to_string()))
            .count(),
        2
    );

    h.chain.handle(&text("/start")).await.unwrap();
    h.bot.take();
    h.chain.handle(&press("back:groups")).await.unwrap();
    assert!(h.bot.take().contains(&Sent::Text(EXPIRED_MESSAGE.to_string())));
}

/// **Test: An extraction failure answers with a generic error.**
#[tokio::test]
async fn test_extraction_error_message() {
    let h = harness(5).await;
    h.chain.handle(&text("broken million")).await.unwrap();
    assert_eq!(h.bot.take(), vec![Sent::Text(GENERIC_ERROR_MESSAGE.to_string())]);
}

/// **Test: A miss at every step announces each fallback, then says nothing was found.**
#[tokio::test]
async fn test_not_found_announces_steps() {
    let h = harness(5).await;
    h.chain.handle(&text("2 bed penthouse, 1 to 9 million")).await.unwrap();
    assert_eq!(
        h.bot.take(),
        vec![
            Sent::Text(MSG_RAISING_PRICE.to_string()),
            Sent::Text(MSG_STILL_NOTHING.to_string()),
            Sent::Text(MSG_NOT_FOUND.to_string()),
        ]
    );

    // A browse button after a failed search has nothing to refer to.
    h.chain.handle(&press("back:groups")).await.unwrap();
    assert!(h.bot.take().contains(&Sent::Text(EXPIRED_MESSAGE.to_string())));
}
