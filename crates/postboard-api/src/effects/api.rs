use std::sync::Arc;

use postboard_pagination::{Pagination, PaginationOptions};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{is_success, take_leading};
use crate::data::{ApiOptions, Post};
use crate::effects::delay::FlakyDelay;
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};

/// Build a [`PostsApi`] with default options.
///
/// `current_page` is 1-based. Without `rows_per_page` the paginator uses
/// [`postboard_pagination::DEFAULT_ROWS_PER_PAGE`].
pub fn use_posts_api<C: HttpClient>(
    client: C,
    current_page: watch::Receiver<usize>,
    rows_per_page: Option<watch::Receiver<usize>>,
) -> PostsApi<C> {
    PostsApi::new(client, current_page, rows_per_page)
}

struct Shared<C> {
    client:      C,
    options:     ApiOptions,
    delay:       FlakyDelay,
    posts:       watch::Sender<Vec<Post>>,
    is_error:    watch::Sender<Option<bool>>,
    is_retrying: watch::Sender<bool>,
}

/// Loads posts into observable state and exposes the current page of them.
///
/// Clones share the same state, so a clone moved into a retry task updates
/// what every other handle observes.
pub struct PostsApi<C: HttpClient> {
    shared:     Arc<Shared<C>>,
    pagination: Pagination<Post>,
}

impl<C: HttpClient> Clone for PostsApi<C> {
    fn clone(&self) -> Self {
        Self {
            shared:     Arc::clone(&self.shared),
            pagination: self.pagination.clone(),
        }
    }
}

impl<C: HttpClient> PostsApi<C> {
    pub fn new(
        client: C,
        current_page: watch::Receiver<usize>,
        rows_per_page: Option<watch::Receiver<usize>>,
    ) -> Self {
        Self::with_options(client, ApiOptions::default(), current_page, rows_per_page)
    }

    pub fn with_options(
        client: C,
        options: ApiOptions,
        current_page: watch::Receiver<usize>,
        rows_per_page: Option<watch::Receiver<usize>>,
    ) -> Self {
        let (posts, array_to_paginate) = watch::channel(Vec::new());
        let pagination = Pagination::new(PaginationOptions {
            rows_per_page,
            array_to_paginate,
            current_page,
        });

        let shared = Shared {
            client,
            delay: FlakyDelay::from_options(&options),
            options,
            posts,
            is_error: watch::Sender::new(None),
            is_retrying: watch::Sender::new(false),
        };

        Self {
            shared: Arc::new(shared),
            pagination,
        }
    }

    pub fn options(&self) -> &ApiOptions { &self.shared.options }

    /// Fetch the posts and replace the collection with the first
    /// `max_posts` of them.
    ///
    /// Never fails: any error, simulated or real, sets the error flag to
    /// `Some(true)` and leaves the collection as it was. The flag is reset to
    /// `Some(false)` when the attempt starts.
    pub async fn load_posts(&self) {
        self.shared.is_error.send_replace(Some(false));
        debug!(endpoint = %self.shared.options.endpoint, "loading posts");

        match self.fetch_posts().await {
            Ok(posts) => {
                info!(count = posts.len(), "posts loaded");
                self.shared.posts.send_replace(posts);
            }
            Err(e) => {
                warn!(error = %e, "failed to load posts");
                self.shared.is_error.send_replace(Some(true));
            }
        }
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let shared = &self.shared;
        shared.delay.wait().await?;

        let response = shared
            .client
            .get(&shared.options.endpoint)
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        if !is_success(response.status) {
            return Err(Error::HttpStatus {
                status: response.status,
            });
        }

        let posts: Vec<Post> = serde_json::from_slice(&response.body)?;
        Ok(take_leading(posts, shared.options.max_posts))
    }

    /// Raise the retrying flag now, then after `retry_delay` lower it and
    /// call [`load_posts`](Self::load_posts).
    ///
    /// Dropping the returned handle does not cancel the retry. Calling this
    /// again while a retry is pending schedules another one; the first to
    /// finish lowers the flag.
    pub fn retry_with_delay(&self) -> JoinHandle<()> {
        self.shared.is_retrying.send_replace(true);

        let delay = self.shared.options.retry_delay;
        debug!(?delay, "retry scheduled");

        let api = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            api.shared.is_retrying.send_replace(false);
            api.load_posts().await;
        })
    }

    /// Posts on the current page.
    pub fn posts(&self) -> Vec<Post> { self.pagination.paginated_array() }

    /// The whole collection, as last replaced by a successful load.
    pub fn all_posts(&self) -> Vec<Post> { self.shared.posts.borrow().clone() }

    pub fn number_of_pages(&self) -> usize { self.pagination.number_of_pages() }

    /// `None` before the first attempt, then whether the latest attempt
    /// failed.
    pub fn is_error(&self) -> Option<bool> { *self.shared.is_error.borrow() }

    pub fn is_retry_load_posts(&self) -> bool { *self.shared.is_retrying.borrow() }

    pub fn subscribe_posts(&self) -> watch::Receiver<Vec<Post>> { self.shared.posts.subscribe() }

    pub fn subscribe_error(&self) -> watch::Receiver<Option<bool>> { self.shared.is_error.subscribe() }

    pub fn subscribe_retrying(&self) -> watch::Receiver<bool> { self.shared.is_retrying.subscribe() }

    /// An independent view of the paginated posts, with its own change
    /// tracking.
    pub fn pagination(&self) -> Pagination<Post> { self.pagination.clone() }
}
