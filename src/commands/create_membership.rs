use std::task::{Context, Poll};

use crate::ports::{auth::AuthPort, database::DatabasePort};
use tower::Service;
use tracing::Instrument;

use super::{DomainLogic, Error, ServiceFuture};

pub struct CreateMembershipRequest {
    pub token: String,
    pub customer_id: String,
    pub merchant_id: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CreateMembershipResponse {
    pub membership_id: String,
}

impl<D, A> Service<CreateMembershipRequest> for DomainLogic<D, A>
where
    D: DatabasePort + Send + Sync + 'static,
    A: AuthPort + Send + Sync + 'static,
{
    type Response = CreateMembershipResponse;
    type Error = Error;
    type Future = ServiceFuture<Self::Response>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: CreateMembershipRequest) -> Self::Future {
        let database = self.database.clone();
        let auth = self.auth.clone();
        let span = tracing::info_span!(
            "create_membership",
            customer_id = %req.customer_id,
            merchant_id = %req.merchant_id
        );
        Box::pin(
            async move {
                let caller = auth.authenticate(&req.token).await?;
                let membership = database
                    .create_membership(req.customer_id, req.merchant_id)
                    .await?;

                tracing::info!(
                    caller = %caller.caller_id,
                    membership_id = %membership.membership_id(),
                    "membership created"
                );
                Ok(CreateMembershipResponse {
                    membership_id: membership.membership_id().to_string(),
                })
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::database::memory::MemoryDatabase,
        commands::fixtures::authenticated,
        domain::{Membership, Tier},
        ports::{
            auth::{self, MockAuthPort},
            database::MockDatabasePort,
        },
    };
    use speculoos::prelude::*;
    use std::sync::Arc;
    use tower::{BoxError, ServiceExt};

    fn request(token: &str) -> CreateMembershipRequest {
        CreateMembershipRequest {
            token: token.to_string(),
            customer_id: "CUST-1".to_string(),
            merchant_id: "MERCH-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_call() -> Result<(), BoxError> {
        // GIVEN an authenticated caller and an empty database
        let database = Arc::new(MemoryDatabase::default());
        let domain = DomainLogic::new(database.clone(), Arc::new(authenticated()));

        // WHEN creating a membership
        let res = domain.clone().oneshot(request("pos-token")).await?;

        // THEN it is stored with an empty balance
        let stored = database.get_membership(&res.membership_id).await?;
        assert_that!(stored.customer_id()).is_equal_to("CUST-1");
        assert_that!(stored.merchant_id()).is_equal_to("MERCH-1");
        assert_that!(stored.points_available()).is_equal_to(0);
        assert_that!(stored.current_tier()).is_equal_to(Tier::Entry);

        Ok(())
    }

    #[tokio::test]
    async fn test_passes_ids_to_database() -> Result<(), BoxError> {
        let mut database = MockDatabasePort::new();
        database
            .expect_create_membership()
            .times(1)
            .withf(|customer_id, merchant_id| customer_id == "CUST-1" && merchant_id == "MERCH-1")
            .returning(|customer_id, merchant_id| {
                Ok(Membership::new("M-1", customer_id, merchant_id))
            });
        let domain = DomainLogic::new(Arc::new(database), Arc::new(authenticated()));

        let res = domain.clone().oneshot(request("pos-token")).await;

        assert_that!(res).is_ok().is_equal_to(CreateMembershipResponse {
            membership_id: "M-1".to_string(),
        });
        Arc::into_inner(domain.database).unwrap().checkpoint();

        Ok(())
    }

    #[tokio::test]
    async fn test_unauthenticated() -> Result<(), BoxError> {
        // GIVEN an auth port that rejects the token and a database that must not be called
        let mut auth_port = MockAuthPort::new();
        auth_port
            .expect_authenticate()
            .times(1)
            .returning(|_| Err(auth::Error::Unauthenticated));
        let mut database = MockDatabasePort::new();
        database.expect_create_membership().never();
        let domain = DomainLogic::new(Arc::new(database), Arc::new(auth_port));

        let res = domain.clone().oneshot(request("bad")).await;

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::Auth(auth::Error::Unauthenticated)));
        Arc::into_inner(domain.database).unwrap().checkpoint();

        Ok(())
    }
}
