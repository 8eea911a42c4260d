//! Global application state
//!
//! Four independent stores aggregated in [`AppState`] and provided
//! through context. All mutation happens on the UI task in response to
//! discrete events.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::types::{Movie, Session};

const STORAGE_KEY_TOKEN: &str = "cinebase_token";
const STORAGE_KEY_EMAIL: &str = "cinebase_email";
const STORAGE_KEY_NAME: &str = "cinebase_name";

/// How many movies each derived catalog slice keeps
const SLICE_LEN: usize = 10;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub auth: AuthStore,
    pub catalog: CatalogStore,
    pub genres: GenreStore,
    pub ui: UiStore,
    /// GraphQL endpoint URL
    pub endpoint: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthStore::load(),
            catalog: CatalogStore::new(),
            genres: GenreStore::new(),
            ui: UiStore::new(),
            endpoint: RwSignal::new("http://localhost:8080/graphql".to_string()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Authentication state backed by LocalStorage
#[derive(Clone, Copy)]
pub struct AuthStore {
    pub session: RwSignal<Option<Session>>,
}

impl AuthStore {
    /// Restore a persisted session; all three keys must be present
    pub fn load() -> Self {
        Self {
            session: RwSignal::new(restore_session(|key| LocalStorage::get(key).ok())),
        }
    }

    pub fn log_in(&self, session: Session) {
        persist_session(&session, |key, value| {
            let _ = LocalStorage::set(key, value);
        });
        self.session.set(Some(session));
    }

    pub fn log_out(&self) {
        erase_session(|key| LocalStorage::delete(key));
        self.session.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_some()
    }
}

// The persisted-field set lives in these three helpers so login, logout
// and restore cannot drift apart; the storage itself is injected.

fn persist_session(session: &Session, mut set: impl FnMut(&str, &str)) {
    set(STORAGE_KEY_TOKEN, &session.token);
    set(STORAGE_KEY_EMAIL, &session.email);
    set(STORAGE_KEY_NAME, &session.name);
}

fn erase_session(mut delete: impl FnMut(&str)) {
    delete(STORAGE_KEY_TOKEN);
    delete(STORAGE_KEY_EMAIL);
    delete(STORAGE_KEY_NAME);
}

fn restore_session(get: impl Fn(&str) -> Option<String>) -> Option<Session> {
    Some(Session {
        name: get(STORAGE_KEY_NAME)?,
        email: get(STORAGE_KEY_EMAIL)?,
        token: get(STORAGE_KEY_TOKEN)?,
    })
}

/// Movie catalog plus its derived slices
#[derive(Clone, Copy)]
pub struct CatalogStore {
    /// Full catalog from the last fetch
    pub all_movies: RwSignal<Vec<Movie>>,
    /// Newest releases (the endpoint returns newest first)
    pub recent: RwSignal<Vec<Movie>>,
    /// Highest user ratings
    pub top_by_users: RwSignal<Vec<Movie>>,
    /// Highest critic ratings
    pub top_by_critics: RwSignal<Vec<Movie>>,
    /// Current recommendation result
    pub picks: RwSignal<Vec<Movie>>,
    pub loading: RwSignal<bool>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            all_movies: RwSignal::new(Vec::new()),
            recent: RwSignal::new(Vec::new()),
            top_by_users: RwSignal::new(Vec::new()),
            top_by_critics: RwSignal::new(Vec::new()),
            picks: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
        }
    }

    /// Replace the catalog and every derived slice with a fresh batch
    pub fn ingest(&self, batch: Vec<Movie>) {
        self.recent.set(recent_slice(&batch));
        self.top_by_users.set(top_by_user_rating(&batch));
        self.top_by_critics.set(top_by_critic_rating(&batch));
        self.picks.set(Vec::new());
        self.all_movies.set(batch);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// First ten in catalog order
pub fn recent_slice(batch: &[Movie]) -> Vec<Movie> {
    batch.iter().take(SLICE_LEN).cloned().collect()
}

/// Ten highest by user rating, descending; ties keep catalog order
pub fn top_by_user_rating(batch: &[Movie]) -> Vec<Movie> {
    let mut sorted = batch.to_vec();
    sorted.sort_by(|a, b| {
        b.user_rating
            .partial_cmp(&a.user_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(SLICE_LEN);
    sorted
}

/// Ten highest by critic rating, descending; ties keep catalog order
pub fn top_by_critic_rating(batch: &[Movie]) -> Vec<Movie> {
    let mut sorted = batch.to_vec();
    sorted.sort_by(|a, b| b.critic_rating.cmp(&a.critic_rating));
    sorted.truncate(SLICE_LEN);
    sorted
}

/// User-selected genre tags; ordered, duplicate-free, never persisted
#[derive(Clone, Copy)]
pub struct GenreStore {
    pub selected: RwSignal<Vec<String>>,
}

impl GenreStore {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(Vec::new()),
        }
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle(&self, tag: &str) {
        self.selected.update(|sel| {
            if let Some(pos) = sel.iter().position(|g| g == tag) {
                sel.remove(pos);
            } else {
                sel.push(tag.to_string());
            }
        });
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.get().iter().any(|g| g == tag)
    }

    pub fn clear(&self) {
        self.selected.update(|sel| sel.clear());
    }
}

impl Default for GenreStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Interface-wide flags
#[derive(Clone, Copy)]
pub struct UiStore {
    /// Set while a detail modal is on screen
    pub modal_open: RwSignal<bool>,
    /// One-line error message shown by the current page
    pub error: RwSignal<Option<String>>,
}

impl UiStore {
    pub fn new() -> Self {
        Self {
            modal_open: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, user_rating: f64, critic_rating: i32) -> Movie {
        Movie {
            id: id.to_string(),
            title: format!("Movie {id}"),
            synopsis: String::new(),
            poster_url: String::new(),
            released: String::new(),
            genres: vec![],
            user_rating,
            critic_rating,
        }
    }

    #[test]
    fn recent_slice_keeps_catalog_order() {
        let batch: Vec<Movie> = (0..15).map(|i| movie(&i.to_string(), 0.0, 0)).collect();
        let recent = recent_slice(&batch);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].id, "0");
        assert_eq!(recent[9].id, "9");
    }

    #[test]
    fn top_by_user_rating_sorts_descending() {
        let batch = vec![movie("a", 6.1, 0), movie("b", 9.0, 0), movie("c", 7.5, 0)];
        let top = top_by_user_rating(&batch);
        let ids: Vec<&str> = top.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn top_by_critic_rating_breaks_ties_by_catalog_order() {
        let batch = vec![movie("a", 0.0, 80), movie("b", 0.0, 80), movie("c", 0.0, 90)];
        let top = top_by_critic_rating(&batch);
        let ids: Vec<&str> = top.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn ingest_replaces_every_derived_slice() {
        let store = CatalogStore::new();
        let first: Vec<Movie> = (0..12).map(|i| movie(&format!("x{i}"), 5.0, 50)).collect();
        store.ingest(first);
        assert_eq!(store.all_movies.get_untracked().len(), 12);
        assert_eq!(store.recent.get_untracked().len(), 10);

        let second = vec![movie("fresh", 9.9, 99)];
        store.ingest(second);
        assert_eq!(store.all_movies.get_untracked().len(), 1);
        assert_eq!(store.recent.get_untracked().len(), 1);
        assert_eq!(store.top_by_users.get_untracked()[0].id, "fresh");
        assert_eq!(store.top_by_critics.get_untracked()[0].id, "fresh");
        assert!(store.picks.get_untracked().is_empty());
    }

    #[test]
    fn logout_clears_every_persisted_session_field() {
        use std::collections::HashMap;

        let mut storage: HashMap<String, String> = HashMap::new();
        let session = Session {
            name: "Tony".to_string(),
            email: "tony@example.com".to_string(),
            token: "abc123".to_string(),
        };

        persist_session(&session, |key, value| {
            storage.insert(key.to_string(), value.to_string());
        });
        assert_eq!(storage.len(), 3);

        let restored = restore_session(|key| storage.get(key).cloned())
            .expect("all three fields were persisted");
        assert_eq!(restored.name, "Tony");
        assert_eq!(restored.email, "tony@example.com");
        assert_eq!(restored.token, "abc123");

        erase_session(|key| {
            storage.remove(key);
        });
        assert!(storage.is_empty());
        assert!(restore_session(|key| storage.get(key).cloned()).is_none());
    }

    #[test]
    fn partial_storage_restores_no_session() {
        use std::collections::HashMap;

        let mut storage: HashMap<String, String> = HashMap::new();
        storage.insert(STORAGE_KEY_TOKEN.to_string(), "abc123".to_string());
        storage.insert(STORAGE_KEY_EMAIL.to_string(), "tony@example.com".to_string());

        assert!(restore_session(|key| storage.get(key).cloned()).is_none());
    }

    #[test]
    fn genre_toggle_is_duplicate_free() {
        let store = GenreStore::new();
        store.toggle("action");
        store.toggle("comedy");
        store.toggle("action");
        assert_eq!(store.selected.get_untracked(), vec!["comedy".to_string()]);

        store.clear();
        assert!(store.selected.get_untracked().is_empty());
    }
}
