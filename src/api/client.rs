use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, join_all};
use tracing::warn;

use super::error::ApiError;
use super::types::{Category, Comment, CommentNode, HnItem, Story};
use crate::page::{self, LoadedPage};

const API_BASE: &str = "https://hacker-news.firebaseio.com/v0";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream data could in principle be pathologically deep; stop recursing
/// into replies past this depth. The unfetched kids stay on the comment so
/// the view can still show that replies exist.
pub const MAX_REPLY_DEPTH: usize = 8;

/// Thin client for the read-only HN JSON API.
///
/// Deliberately best-effort: no retries, no caching, no request abort. The
/// transport timeout is the only timeout policy, and callers prefer stale
/// data over surfacing a failure.
#[derive(Clone)]
pub struct HnClient {
    http: reqwest::Client,
    base_url: String,
}

impl HnClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE.to_string())
    }

    /// Point the client at a different API root. Used by tests to talk to a
    /// local mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
        }
    }

    /// Fetch the full ordered ID list for a category feed.
    pub async fn fetch_feed_ids(&self, category: Category) -> Result<Vec<u64>, ApiError> {
        let url = format!("{}/{}.json", self.base_url, category.endpoint());
        let ids: Vec<u64> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ids)
    }

    /// Fetch a single item. The API answers `null` with a 200 for deleted or
    /// missing items, which maps to [`ApiError::NotFound`].
    pub async fn fetch_item(&self, id: u64) -> Result<HnItem, ApiError> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        let item: Option<HnItem> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        item.ok_or(ApiError::NotFound(id))
    }

    /// Resolve ids to full story records with parallel fetches, preserving
    /// the input order. Individual failures and non-story items are logged
    /// and dropped; the page simply shows fewer entries.
    pub async fn fetch_stories_by_ids(&self, ids: &[u64]) -> Vec<Story> {
        let futures: Vec<_> = ids.iter().map(|&id| self.fetch_item(id)).collect();
        let results = join_all(futures).await;

        results
            .into_iter()
            .zip(ids.iter())
            .filter_map(|(result, &id)| match result {
                Ok(item) => Story::from_item(item),
                Err(e) => {
                    warn!(id, error = %e, "dropping story from page");
                    None
                }
            })
            .collect()
    }

    /// Load one page of a category feed.
    ///
    /// A feed-ID fetch failure aborts the whole page load; item-level
    /// failures only shrink the page.
    pub async fn fetch_page(
        &self,
        category: Category,
        page_number: usize,
    ) -> Result<LoadedPage, ApiError> {
        let ids = self.fetch_feed_ids(category).await?;
        let bounds = page::page_bounds(ids.len(), page_number);
        let stories = self.fetch_stories_by_ids(&ids[bounds]).await;
        Ok(LoadedPage {
            stories,
            page: page_number,
            total_pages: page::total_pages(ids.len()),
        })
    }

    /// Resolve the given child ids to comments, in order, each with its
    /// entire reply subtree.
    ///
    /// The top level of a story card is paginated (the caller passes only
    /// the revealed prefix of `kids`), but replies below it are fetched in
    /// full and unpaginated, bounded only by [`MAX_REPLY_DEPTH`].
    pub async fn fetch_comment_nodes(&self, kid_ids: &[u64]) -> Vec<CommentNode> {
        self.fetch_children(kid_ids.to_vec(), 0).await
    }

    fn fetch_children(&self, ids: Vec<u64>, depth: usize) -> BoxFuture<'_, Vec<CommentNode>> {
        async move {
            let futures: Vec<_> = ids.iter().map(|&id| self.fetch_item(id)).collect();
            let results = join_all(futures).await;

            let mut nodes = Vec::new();
            for (result, &id) in results.into_iter().zip(ids.iter()) {
                let item = match result {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(id, error = %e, "skipping comment");
                        continue;
                    }
                };
                let Some(comment) = Comment::from_item(item) else {
                    continue;
                };
                let children = if depth + 1 < MAX_REPLY_DEPTH && !comment.kids.is_empty() {
                    self.fetch_children(comment.kids.clone(), depth + 1).await
                } else {
                    Vec::new()
                };
                nodes.push(CommentNode { comment, children });
            }
            nodes
        }
        .boxed()
    }
}

impl Default for HnClient {
    fn default() -> Self {
        Self::new()
    }
}
