use tokio::sync::watch;

use crate::core::{page_count, page_slice};
use crate::error::Result;

/// Page size used when no `rows_per_page` channel is supplied.
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Inputs of a [`Pagination`].
///
/// # Examples
///
/// ```
/// use postboard_pagination::{Pagination, PaginationOptions};
/// use tokio::sync::watch;
///
/// let (_items_tx, items) = watch::channel((1..=12).collect::<Vec<u32>>());
/// let (_page_tx, page) = watch::channel(3);
///
/// let pagination = Pagination::new(PaginationOptions {
///     rows_per_page: None,
///     array_to_paginate: items,
///     current_page: page,
/// });
///
/// assert_eq!(pagination.paginated_array(), vec![11, 12]);
/// assert_eq!(pagination.number_of_pages(), 3);
/// ```
#[derive(Debug)]
pub struct PaginationOptions<T> {
    /// Page size. Falls back to [`DEFAULT_ROWS_PER_PAGE`] when `None`.
    pub rows_per_page:     Option<watch::Receiver<usize>>,
    /// The full collection to slice.
    pub array_to_paginate: watch::Receiver<Vec<T>>,
    /// 1-based page number.
    pub current_page:      watch::Receiver<usize>,
}

/// Derived view of the current page of an observable array.
///
/// Every accessor reads the latest value of each input, so results are
/// never stale. Clones share the inputs but track changes independently.
#[derive(Debug, Clone)]
pub struct Pagination<T> {
    rows_per_page: Option<watch::Receiver<usize>>,
    array:         watch::Receiver<Vec<T>>,
    current_page:  watch::Receiver<usize>,
}

impl<T: Clone> Pagination<T> {
    pub fn new(options: PaginationOptions<T>) -> Self {
        Self {
            rows_per_page: options.rows_per_page,
            array:         options.array_to_paginate,
            current_page:  options.current_page,
        }
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
            .as_ref()
            .map_or(DEFAULT_ROWS_PER_PAGE, |rows| *rows.borrow())
    }

    pub fn current_page(&self) -> usize { *self.current_page.borrow() }

    /// Items on the current page, in collection order.
    pub fn paginated_array(&self) -> Vec<T> {
        let page = self.current_page();
        let rows = self.rows_per_page();
        page_slice(&self.array.borrow(), page, rows).to_vec()
    }

    /// `ceil(len / rows_per_page)`, `0` for an empty collection.
    pub fn number_of_pages(&self) -> usize {
        page_count(self.array.borrow().len(), self.rows_per_page())
    }

    /// Wait until any input changes.
    ///
    /// Marks the changed input as seen, so consecutive calls wait for new
    /// writes. Fails once the owner of any input drops its sender.
    pub async fn changed(&mut self) -> Result<()> {
        match self.rows_per_page.as_mut() {
            Some(rows) => tokio::select! {
                res = self.array.changed() => res?,
                res = self.current_page.changed() => res?,
                res = rows.changed() => res?,
            },
            None => tokio::select! {
                res = self.array.changed() => res?,
                res = self.current_page.changed() => res?,
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination_of(
        items: Vec<u32>,
        page: usize,
        rows: Option<usize>,
    ) -> (
        Pagination<u32>,
        watch::Sender<Vec<u32>>,
        watch::Sender<usize>,
        Option<watch::Sender<usize>>,
    ) {
        let (items_tx, items_rx) = watch::channel(items);
        let (page_tx, page_rx) = watch::channel(page);
        let (rows_tx, rows_rx) = match rows {
            Some(rows) => {
                let (tx, rx) = watch::channel(rows);
                (Some(tx), Some(rx))
            }
            None => (None, None),
        };

        let pagination = Pagination::new(PaginationOptions {
            rows_per_page:     rows_rx,
            array_to_paginate: items_rx,
            current_page:      page_rx,
        });
        (pagination, items_tx, page_tx, rows_tx)
    }

    #[test]
    fn default_rows_per_page() {
        let (pagination, ..) = pagination_of((1..=15).collect(), 1, None);
        assert_eq!(pagination.rows_per_page(), DEFAULT_ROWS_PER_PAGE);
        assert_eq!(pagination.paginated_array(), vec![1, 2, 3, 4, 5]);
        assert_eq!(pagination.number_of_pages(), 3);
    }

    #[test]
    fn explicit_rows_per_page() {
        let (pagination, ..) = pagination_of((1..=15).collect(), 2, Some(4));
        assert_eq!(pagination.paginated_array(), vec![5, 6, 7, 8]);
        assert_eq!(pagination.number_of_pages(), 4);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let (pagination, ..) = pagination_of(Vec::new(), 1, None);
        assert!(pagination.paginated_array().is_empty());
        assert_eq!(pagination.number_of_pages(), 0);
    }

    #[test]
    fn recomputes_from_latest_inputs() {
        let (pagination, items_tx, page_tx, rows_tx) = pagination_of((1..=15).collect(), 1, Some(5));

        page_tx.send_replace(3);
        assert_eq!(pagination.paginated_array(), vec![11, 12, 13, 14, 15]);

        if let Some(tx) = &rows_tx {
            tx.send_replace(10);
        }
        assert_eq!(pagination.paginated_array(), Vec::<u32>::new());
        assert_eq!(pagination.number_of_pages(), 2);

        items_tx.send_replace((1..=30).collect());
        assert_eq!(pagination.paginated_array(), (21..=30).collect::<Vec<_>>());
        assert_eq!(pagination.number_of_pages(), 3);
    }

    #[tokio::test]
    async fn changed_wakes_on_page_switch() {
        let (mut pagination, _items_tx, page_tx, _rows_tx) = pagination_of((1..=15).collect(), 1, None);

        page_tx.send_replace(2);
        pagination.changed().await.unwrap();
        assert_eq!(pagination.paginated_array(), vec![6, 7, 8, 9, 10]);
    }

    #[tokio::test]
    async fn changed_fails_when_source_dropped() {
        let (mut pagination, items_tx, _page_tx, _rows_tx) = pagination_of(vec![1], 1, None);

        drop(items_tx);
        assert!(pagination.changed().await.is_err());
    }
}
