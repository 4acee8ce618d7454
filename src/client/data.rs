//! Data Layer
//!
//! Binds the HTTP client to a query cache under the `randomNumbers` key.
//! Mutations invalidate that key on success, so the next list read goes
//! back to the server.

use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::error::Result;
use super::query::{QueryCache, QueryKey, QueryState};
use super::RandomNumbersClient;
use crate::models::DeleteResponse;
use crate::store::Record;

/// The two screens of the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The list of records
    List,
    /// The page that generates one record and returns to the list
    NewRandom,
}

/// Cached queries and mutations over the random numbers API.
#[derive(Debug)]
pub struct DataLayer {
    api: RandomNumbersClient,
    cache: QueryCache<Vec<Record>>,
    view: RwLock<View>,
    last_error: RwLock<Option<String>>,
}

impl DataLayer {
    /// Creates a data layer on the list view. Cached list results stay fresh
    /// for `stale_time` unless a mutation invalidates them.
    pub fn new(api: RandomNumbersClient, stale_time: Duration) -> Self {
        Self {
            api,
            cache: QueryCache::new(stale_time),
            view: RwLock::new(View::List),
            last_error: RwLock::new(None),
        }
    }

    /// The underlying HTTP client.
    pub fn api(&self) -> &RandomNumbersClient {
        &self.api
    }

    /// The cached list query.
    pub async fn random_numbers(&self) -> Result<Vec<Record>> {
        let api = &self.api;
        self.cache
            .fetch(&QueryKey::random_numbers(), move || api.list_numbers())
            .await
    }

    /// Status of the list query as the list view would render it.
    pub async fn list_state(&self) -> QueryState<Vec<Record>> {
        self.cache.state(&QueryKey::random_numbers()).await
    }

    /// Returns true when the next list read will go to the server.
    pub async fn is_list_stale(&self) -> bool {
        self.cache.is_stale(&QueryKey::random_numbers()).await
    }

    /// Create mutation issued from the list view.
    pub async fn generate(&self) -> Result<Record> {
        let created = self.api.generate_random().await?;
        self.invalidate_list().await;
        Ok(created.data)
    }

    /// Create mutation issued from the new-random view.
    ///
    /// On success the list is invalidated and the view returns to
    /// `View::List`. On failure the error text is kept for inline display
    /// and the view is left alone.
    pub async fn generate_from_new_page(&self) -> Result<Record> {
        *self.last_error.write().await = None;

        match self.api.generate_random().await {
            Ok(created) => {
                self.invalidate_list().await;
                self.navigate(View::List).await;
                Ok(created.data)
            }
            Err(err) => {
                warn!("Failed to generate a new random number: {}", err);
                *self.last_error.write().await = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete mutation.
    pub async fn delete(&self, key: &str) -> Result<DeleteResponse> {
        let removed = self.api.delete_number(key).await?;
        self.invalidate_list().await;
        Ok(removed)
    }

    /// Switches to `view`.
    pub async fn navigate(&self, view: View) {
        *self.view.write().await = view;
    }

    /// The view currently shown.
    pub async fn current_view(&self) -> View {
        *self.view.read().await
    }

    /// Inline error from the last failed new-page mutation, if any.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    async fn invalidate_list(&self) {
        info!("Invalidating '{}' query", QueryKey::random_numbers());
        self.cache.invalidate(&QueryKey::random_numbers()).await;
    }
}
