#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};
use chrono::Utc;

use tinylinker::api::handlers::{
    create_short_url_handler, delete_short_url_handler, health_check_handler,
    list_short_urls_handler, not_found_handler, redirect_handler,
};
use tinylinker::application::services::LinkService;
use tinylinker::domain::entities::{DeletedLink, NewShortLink, ShortLink};
use tinylinker::domain::repositories::{InsertResult, LinkRepository};
use tinylinker::error::AppError;
use tinylinker::state::AppState;
use tinylinker::utils::code_generator::RandomCodeGenerator;

/// In-memory record store for handler tests.
///
/// Mirrors the store-side guarantees the service relies on: the uniqueness
/// constraint on `short_code` (insert reports `CodeTaken`) and the atomic
/// click increment.
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<ShortLink>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    /// Snapshot of a record by code, for assertions.
    pub fn get_by_code(&self, code: &str) -> Option<ShortLink> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
    }

    /// Sum of all click counters.
    pub fn total_clicks(&self) -> i64 {
        self.links.lock().unwrap().iter().map(|l| l.clicks).sum()
    }

    /// Seeds a record directly, bypassing the creation flow.
    pub fn seed(&self, code: &str, url: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        self.links.lock().unwrap().push(ShortLink::new(
            id,
            url.to_string(),
            code.to_string(),
            0,
            now,
            now,
        ));
        id
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<InsertResult, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Ok(InsertResult::CodeTaken);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let link = ShortLink::new(id, new_link.long_url, new_link.short_code, 0, now, now);
        links.push(link.clone());

        Ok(InsertResult::Inserted(link))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == code)
            .cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.long_url == long_url)
            .cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        links.truncate(limit as usize);
        Ok(links)
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        let mut links = self.links.lock().unwrap();

        match links.iter_mut().find(|l| l.short_code == code) {
            Some(link) => {
                link.clicks += 1;
                link.updated_at = Utc::now();
                Ok(Some(link.long_url.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<DeletedLink>, AppError> {
        let mut links = self.links.lock().unwrap();

        match links.iter().position(|l| l.id == id) {
            Some(pos) => {
                let removed = links.remove(pos);
                Ok(Some(DeletedLink {
                    id: removed.id,
                    short_code: removed.short_code,
                }))
            }
            None => Ok(None),
        }
    }
}

/// Builds an `AppState` over a fresh in-memory store, returning the store
/// handle for direct assertions.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        Arc::new(RandomCodeGenerator),
    ));

    (AppState { link_service }, repository)
}

/// Router with all routes, minus rate limiting and static serving.
pub fn test_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/shorturl", post(create_short_url_handler))
        .route("/shortUrl", get(list_short_urls_handler))
        .route(
            "/shortUrl/{code}",
            get(redirect_handler).delete(delete_short_url_handler),
        );

    Router::new()
        .route("/health-check", get(health_check_handler))
        .nest("/api", api)
        .fallback(not_found_handler)
        .with_state(state)
}
