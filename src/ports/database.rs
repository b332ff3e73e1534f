use crate::domain::{self, Membership, MembershipUpdate};

/// Storage for [`Membership`] aggregates, keyed by membership id
#[mockall::automock]
#[async_trait::async_trait]
pub trait DatabasePort {
    /// Create an empty membership under a freshly assigned id
    async fn create_membership(
        &self,
        customer_id: String,
        merchant_id: String,
    ) -> Result<Membership, Error>;
    async fn get_membership(&self, membership_id: &str) -> Result<Membership, Error>;
    /// Apply `update` to the stored membership and return the updated state
    ///
    /// Updates to the same membership are applied one at a time. A rejected update leaves the
    /// stored membership unchanged.
    async fn update_membership(
        &self,
        membership_id: &str,
        update: MembershipUpdate,
    ) -> Result<Membership, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No membership is stored under this id
    #[error("membership {0} does not exist")]
    MembershipNotFound(String),

    /// The membership refused the update
    #[error("update rejected: {0}")]
    Rejected(#[from] domain::Error),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as connectivity, configuration, or permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
