/// Keep the first `limit` items, preserving order.
///
/// # Examples
///
/// ```
/// use postboard_api::take_leading;
///
/// assert_eq!(take_leading(vec![1, 2, 3, 4], 2), vec![1, 2]);
/// assert_eq!(take_leading(vec![1, 2], 15), vec![1, 2]);
/// ```
pub fn take_leading<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
