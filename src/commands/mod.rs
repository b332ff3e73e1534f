use std::{future::Future, pin::Pin, sync::Arc};

pub mod create_membership;
pub mod earn_points;
pub mod expire_points;
pub mod get_membership;
pub mod redeem_points;

pub type ServiceFuture<T> = Pin<Box<dyn Future<Output = Result<T, Error>> + Send>>;

/// Entry point for every operation on memberships
///
/// Each operation is a separate `tower::Service` implementation. All of them authenticate the
/// caller before touching the store.
pub struct DomainLogic<D, A> {
    database: Arc<D>,
    auth: Arc<A>,
}

impl<D, A> DomainLogic<D, A> {
    pub fn new(database: Arc<D>, auth: Arc<A>) -> Self {
        Self { database, auth }
    }
}

impl<D, A> Clone for DomainLogic<D, A> {
    fn clone(&self) -> Self {
        Self {
            database: self.database.clone(),
            auth: self.auth.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("database port error: {0}")]
    Database(#[from] crate::ports::database::Error),
    #[error("auth port error: {0}")]
    Auth(#[from] crate::ports::auth::Error),
}

/// How a caller-facing layer should report an [`Error`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request cannot be satisfied as sent, e.g. not enough points
    BadRequest,
    NotFound,
    Unauthenticated,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use crate::ports::{auth, database};

        match self {
            Error::Database(database::Error::Rejected(_)) => ErrorKind::BadRequest,
            Error::Database(database::Error::MembershipNotFound(_)) => ErrorKind::NotFound,
            Error::Auth(auth::Error::Unauthenticated) => ErrorKind::Unauthenticated,
            Error::Database(database::Error::Adapter(_)) | Error::Auth(auth::Error::Adapter(_)) => {
                ErrorKind::Internal
            }
        }
    }
}
