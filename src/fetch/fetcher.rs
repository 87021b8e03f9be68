//! Per-lineage fetch management.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::fetch::handle::FetchHandle;
use crate::fetch::messages::FetchUpdate;
use crate::omdb::CatalogClient;

/// Owns the in-flight task for each fetch lineage.
///
/// At most one search and one detail task exist at a time. Starting a new
/// request for a lineage first cancels whatever was in flight; the cancelled
/// task never delivers a settlement.
pub struct Fetcher {
    client: Arc<dyn CatalogClient>,
    updates: UnboundedSender<FetchUpdate>,
    search_inflight: Option<FetchHandle>,
    detail_inflight: Option<FetchHandle>,
}

impl Fetcher {
    /// Creates a fetcher delivering settlements on the given channel.
    pub fn new(client: Arc<dyn CatalogClient>, updates: UnboundedSender<FetchUpdate>) -> Self {
        Self {
            client,
            updates,
            search_inflight: None,
            detail_inflight: None,
        }
    }

    /// Starts a search under the given generation, cancelling any search
    /// already in flight.
    pub fn start_search(&mut self, query: &str, generation: u64) {
        self.cancel_search();
        tracing::debug!(%query, generation, "starting search fetch");

        let client = Arc::clone(&self.client);
        let query = query.to_string();
        let updates = self.updates.clone();
        self.search_inflight = Some(FetchHandle::spawn(
            async move { client.search(&query).await },
            move |outcome| {
                let _ = updates.send(FetchUpdate::SearchSettled {
                    generation,
                    outcome,
                });
            },
        ));
    }

    /// Starts a detail fetch under the given generation, cancelling any
    /// detail fetch already in flight.
    pub fn start_detail(&mut self, id: &str, generation: u64) {
        self.cancel_detail();
        tracing::debug!(movie_id = %id, generation, "starting detail fetch");

        let client = Arc::clone(&self.client);
        let id = id.to_string();
        let updates = self.updates.clone();
        self.detail_inflight = Some(FetchHandle::spawn(
            async move { client.detail(&id).await },
            move |outcome| {
                let _ = updates.send(FetchUpdate::DetailSettled {
                    generation,
                    outcome,
                });
            },
        ));
    }

    /// Cancels the in-flight search, if any, returning its handle so callers
    /// can await full retirement.
    pub fn cancel_search(&mut self) -> Option<FetchHandle> {
        let handle = self.search_inflight.take();
        if let Some(h) = &handle {
            h.cancel();
        }
        handle
    }

    /// Cancels the in-flight detail fetch, if any.
    pub fn cancel_detail(&mut self) -> Option<FetchHandle> {
        let handle = self.detail_inflight.take();
        if let Some(h) = &handle {
            h.cancel();
        }
        handle
    }

    /// Cancels everything in flight and waits for the tasks to retire.
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.cancel_search() {
            handle.join().await;
        }
        if let Some(handle) = self.cancel_detail() {
            handle.join().await;
        }
    }
}
