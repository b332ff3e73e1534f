use crate::{
    domain::{Membership, MembershipUpdate},
    ports::database::{DatabasePort, Error},
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};
use uuid::Uuid;

/// In-memory membership store
///
/// Each membership sits behind its own lock: updates to one membership are serialized, while
/// different memberships can be updated concurrently.
#[derive(Clone, Debug, Default)]
pub struct MemoryDatabase {
    memberships: Arc<RwLock<HashMap<String, Arc<Mutex<Membership>>>>>,
}

impl MemoryDatabase {
    fn entry(&self, membership_id: &str) -> Result<Arc<Mutex<Membership>>, Error> {
        self.memberships
            .read()?
            .get(membership_id)
            .cloned()
            .ok_or_else(|| Error::MembershipNotFound(membership_id.to_string()))
    }
}

#[async_trait::async_trait]
impl DatabasePort for MemoryDatabase {
    async fn create_membership(
        &self,
        customer_id: String,
        merchant_id: String,
    ) -> Result<Membership, Error> {
        let membership = Membership::new(Uuid::new_v4().to_string(), customer_id, merchant_id);
        self.memberships.write()?.insert(
            membership.membership_id().to_string(),
            Arc::new(Mutex::new(membership.clone())),
        );

        Ok(membership)
    }

    async fn get_membership(&self, membership_id: &str) -> Result<Membership, Error> {
        let entry = self.entry(membership_id)?;
        let membership = entry.lock()?.clone();

        Ok(membership)
    }

    async fn update_membership(
        &self,
        membership_id: &str,
        update: MembershipUpdate,
    ) -> Result<Membership, Error> {
        let entry = self.entry(membership_id)?;
        let mut membership = entry.lock()?;
        membership.apply(&update)?;

        Ok(membership.clone())
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the lock guard internally, which is not send. Thus we erase the error
/// and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}
