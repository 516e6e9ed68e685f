use serde::{Deserialize, Serialize};

/// A single post as served by the posts endpoint.
///
/// Only `id`, `title` and `body` are kept; any other field in the payload
/// (such as `userId`) is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    pub id:    i64,
    pub title: String,
    pub body:  String,
}
