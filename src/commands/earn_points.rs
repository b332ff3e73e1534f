use std::task::{Context, Poll};

use crate::{
    domain::{EarningRule, MembershipUpdate, Tier, Transaction},
    ports::{auth::AuthPort, database::DatabasePort},
};
use tower::Service;
use tracing::Instrument;

use super::{DomainLogic, Error, ServiceFuture};

pub struct EarnPointsRequest {
    pub token: String,
    pub membership_id: String,
    pub transaction: Transaction,
    pub rule: EarningRule,
}

#[derive(Debug, PartialEq, Eq)]
pub struct EarnPointsResponse {
    pub membership_id: String,
    /// Balance after earning
    pub points_available: u64,
    pub tier: Tier,
}

impl<D, A> Service<EarnPointsRequest> for DomainLogic<D, A>
where
    D: DatabasePort + Send + Sync + 'static,
    A: AuthPort + Send + Sync + 'static,
{
    type Response = EarnPointsResponse;
    type Error = Error;
    type Future = ServiceFuture<Self::Response>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: EarnPointsRequest) -> Self::Future {
        let database = self.database.clone();
        let auth = self.auth.clone();
        let span = tracing::info_span!(
            "earn_points",
            membership_id = %req.membership_id,
            transaction_id = %req.transaction.transaction_id
        );
        Box::pin(
            async move {
                auth.authenticate(&req.token).await?;

                let update = MembershipUpdate::Earn {
                    transaction: req.transaction,
                    rule: req.rule,
                };
                let membership = database
                    .update_membership(&req.membership_id, update)
                    .await?;

                tracing::info!(
                    points_available = membership.points_available(),
                    tier = membership.current_tier().name(),
                    "points earned"
                );
                Ok(EarnPointsResponse {
                    membership_id: req.membership_id,
                    points_available: membership.points_available(),
                    tier: membership.current_tier(),
                })
            }
            .instrument(span),
        )
    }
}
