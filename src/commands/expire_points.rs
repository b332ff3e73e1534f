use std::task::{Context, Poll};

use crate::{
    domain::MembershipUpdate,
    ports::{auth::AuthPort, database::DatabasePort},
};
use tower::Service;
use tracing::Instrument;

use super::{DomainLogic, Error, ServiceFuture};

/// Remove points that are no longer valid, e.g. from a scheduled expiry job
pub struct ExpirePointsRequest {
    pub token: String,
    pub membership_id: String,
    pub amount: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ExpirePointsResponse {
    pub membership_id: String,
    pub points_available: u64,
}

impl<D, A> Service<ExpirePointsRequest> for DomainLogic<D, A>
where
    D: DatabasePort + Send + Sync + 'static,
    A: AuthPort + Send + Sync + 'static,
{
    type Response = ExpirePointsResponse;
    type Error = Error;
    type Future = ServiceFuture<Self::Response>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ExpirePointsRequest) -> Self::Future {
        let database = self.database.clone();
        let auth = self.auth.clone();
        let span = tracing::info_span!(
            "expire_points",
            membership_id = %req.membership_id,
            amount = req.amount
        );
        Box::pin(
            async move {
                auth.authenticate(&req.token).await?;

                let update = MembershipUpdate::Expire { amount: req.amount };
                let membership = database
                    .update_membership(&req.membership_id, update)
                    .await?;

                tracing::info!(
                    points_available = membership.points_available(),
                    "points expired"
                );
                Ok(ExpirePointsResponse {
                    membership_id: req.membership_id,
                    points_available: membership.points_available(),
                })
            }
            .instrument(span),
        )
    }
}
