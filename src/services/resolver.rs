use crate::models::CatalogTrack;
use crate::services::spotify::CatalogClient;
use futures::{stream, StreamExt};
use std::sync::Arc;
use tracing::warn;

/// Looks up candidate songs in the catalog. A failed or empty search drops
/// that candidate and never fails the batch.
pub struct CatalogResolver {
    catalog: Arc<dyn CatalogClient>,
    concurrency: usize,
}

impl CatalogResolver {
    pub fn new(catalog: Arc<dyn CatalogClient>, concurrency: usize) -> Self {
        Self {
            catalog,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn resolve_track(&self, query: &str, token: &str) -> Option<CatalogTrack> {
        match self.catalog.search_track(query, token).await {
            Ok(Some(track)) => Some(track),
            Ok(None) => {
                warn!("No Spotify match for: {}", query);
                None
            }
            Err(e) => {
                warn!("Spotify search failed for: {} ({})", query, e);
                None
            }
        }
    }

    /// Resolves every query, keeping the successes in input order
    pub async fn resolve_all(&self, queries: Vec<String>, token: &str) -> Vec<CatalogTrack> {
        let resolved: Vec<Option<CatalogTrack>> = stream::iter(queries)
            .map(|query| async move { self.resolve_track(&query, token).await })
            .buffered(self.concurrency)
            .collect()
            .await;

        resolved.into_iter().flatten().collect()
    }
}
