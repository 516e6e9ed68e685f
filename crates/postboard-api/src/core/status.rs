/// Returns `true` if the HTTP status code is in the 2xx range.
///
/// Any other status, redirects included, fails the load.
///
/// # Examples
///
/// ```
/// use postboard_api::is_success;
///
/// assert!(is_success(200));
/// assert!(!is_success(304));
/// assert!(!is_success(500));
/// ```
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
