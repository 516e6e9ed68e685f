#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pagination input channel closed")]
    SourceClosed(#[from] tokio::sync::watch::error::RecvError),
}

pub type Result<T> = std::result::Result<T, Error>;
