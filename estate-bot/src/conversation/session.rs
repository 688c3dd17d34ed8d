//! Per-chat conversation state.
//!
//! A session holds the request text collected so far and, once a search has produced
//! results, the context the result buttons refer to. Sessions live in memory only.

use std::collections::HashMap;
use std::sync::Arc;

use property_store::PropertyRecord;
use search_orchestrator::{BuildingGroup, SearchOutcome, SearchStatus};
use tokio::sync::RwLock;

use super::keys::GroupKeys;
use super::pager::page_count;

/// Results of the last search in a chat, with the current page of the building list and
/// of each building's unit list.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub status: SearchStatus,
    /// Summary line shown above the building list.
    pub header: String,
    pub groups: Vec<BuildingGroup>,
    pub keys: GroupKeys,
    pub page: usize,
    /// Unit-list page per building key; absent means the first page.
    pub group_pages: HashMap<String, usize>,
}

impl SearchContext {
    pub fn from_outcome(outcome: SearchOutcome) -> Self {
        let groups = outcome.results.into_groups();
        let mut keys = GroupKeys::new();
        for group in &groups {
            keys.register(&group.building);
        }
        Self {
            status: outcome.status,
            header: outcome.message,
            groups,
            keys,
            page: 0,
            group_pages: HashMap::new(),
        }
    }

    pub fn group(&self, key: &str) -> Option<&BuildingGroup> {
        let label = self.keys.label(key)?;
        self.groups.iter().find(|g| g.building == label)
    }

    /// The unit with `id` and the key of its building.
    pub fn unit(&self, id: i64) -> Option<(&str, &PropertyRecord)> {
        self.groups.iter().find_map(|group| {
            let record = group.records.iter().find(|r| r.id == id)?;
            let key = self.keys.key(&group.building)?;
            Some((key, record))
        })
    }

    /// Moves the building list one page forward or back, staying within bounds. Returns
    /// whether the page changed.
    pub fn turn_page(&mut self, forward: bool, page_size: usize) -> bool {
        let next = step(self.page, forward, self.groups.len(), page_size);
        let changed = next != self.page;
        self.page = next;
        changed
    }

    /// Current unit-list page of the building with `key`.
    pub fn group_page(&self, key: &str) -> usize {
        self.group_pages.get(key).copied().unwrap_or(0)
    }

    /// Moves the unit list of the building with `key` one page forward or back. Returns
    /// whether the page changed, or `None` for an unknown key.
    pub fn turn_group_page(&mut self, key: &str, forward: bool, page_size: usize) -> Option<bool> {
        let units = self.group(key)?.records.len();
        let current = self.group_page(key);
        let next = step(current, forward, units, page_size);
        self.group_pages.insert(key.to_string(), next);
        Some(next != current)
    }
}

fn step(current: usize, forward: bool, len: usize, page_size: usize) -> usize {
    let last = page_count(len, page_size) - 1;
    if forward {
        (current + 1).min(last)
    } else {
        current.saturating_sub(1).min(last)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Request text collected across turns until a search runs.
    pub pending_request: String,
    pub search: Option<SearchContext>,
}

/// Sessions keyed by chat id.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<i64, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` to the chat's pending request and returns the whole request.
    pub async fn append_request(&self, chat_id: i64, text: &str) -> String {
        let mut sessions = self.inner.write().await;
        let session = sessions.entry(chat_id).or_default();
        if !session.pending_request.is_empty() {
            session.pending_request.push('\n');
        }
        session.pending_request.push_str(text.trim());
        session.pending_request.clone()
    }

    /// Stores the outcome of a completed search: the pending request is cleared and the
    /// search context is replaced (dropped when there is nothing to browse).
    pub async fn finish_search(&self, chat_id: i64, search: Option<SearchContext>) {
        let mut sessions = self.inner.write().await;
        let session = sessions.entry(chat_id).or_default();
        session.pending_request.clear();
        session.search = search;
    }

    /// Forgets everything about the chat.
    pub async fn reset(&self, chat_id: i64) {
        self.inner.write().await.remove(&chat_id);
    }

    /// Runs `f` on the chat's search context, if there is one.
    pub async fn with_search<R>(
        &self,
        chat_id: i64,
        f: impl FnOnce(&mut SearchContext) -> R,
    ) -> Option<R> {
        let mut sessions = self.inner.write().await;
        sessions
            .get_mut(&chat_id)
            .and_then(|s| s.search.as_mut())
            .map(f)
    }

    pub async fn get(&self, chat_id: i64) -> Option<Session> {
        self.inner.read().await.get(&chat_id).cloned()
    }
}
