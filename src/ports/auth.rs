#[mockall::automock]
#[async_trait::async_trait]
pub trait AuthPort {
    /// Resolve a bearer token to the caller it was issued to
    async fn authenticate(&self, token: &str) -> Result<Caller, Error>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller {
    pub caller_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or unknown credentials
    #[error("not authenticated")]
    Unauthenticated,

    /// Concrete adapter errors
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
