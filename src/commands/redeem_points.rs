use std::task::{Context, Poll};

use crate::{
    domain::{MembershipUpdate, RewardRequest},
    ports::{auth::AuthPort, database::DatabasePort},
};
use tower::Service;
use tracing::Instrument;

use super::{DomainLogic, Error, ServiceFuture};

pub struct RedeemPointsRequest {
    pub token: String,
    pub membership_id: String,
    pub reward: RewardRequest,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RedeemPointsResponse {
    pub membership_id: String,
    /// Balance left after the redemption
    pub points_available: u64,
}

impl<D, A> Service<RedeemPointsRequest> for DomainLogic<D, A>
where
    D: DatabasePort + Send + Sync + 'static,
    A: AuthPort + Send + Sync + 'static,
{
    type Response = RedeemPointsResponse;
    type Error = Error;
    type Future = ServiceFuture<Self::Response>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: RedeemPointsRequest) -> Self::Future {
        let database = self.database.clone();
        let auth = self.auth.clone();
        let span = tracing::info_span!(
            "redeem_points",
            membership_id = %req.membership_id,
            reward_id = %req.reward.reward_id,
            point_cost = req.reward.point_cost
        );
        Box::pin(
            async move {
                auth.authenticate(&req.token).await?;

                let membership = database
                    .update_membership(&req.membership_id, MembershipUpdate::Redeem(req.reward))
                    .await
                    .map_err(|err| {
                        tracing::warn!(error = %err, "redemption failed");
                        err
                    })?;

                tracing::info!(
                    points_available = membership.points_available(),
                    "points redeemed"
                );
                Ok(RedeemPointsResponse {
                    membership_id: req.membership_id,
                    points_available: membership.points_available(),
                })
            }
            .instrument(span),
        )
    }
}
