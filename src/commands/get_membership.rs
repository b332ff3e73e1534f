use std::task::{Context, Poll};

use crate::{
    domain::Membership,
    ports::{auth::AuthPort, database::DatabasePort},
};
use tower::Service;
use tracing::Instrument;

use super::{DomainLogic, Error, ServiceFuture};

pub struct GetMembershipRequest {
    pub token: String,
    pub membership_id: String,
}

impl<D, A> Service<GetMembershipRequest> for DomainLogic<D, A>
where
    D: DatabasePort + Send + Sync + 'static,
    A: AuthPort + Send + Sync + 'static,
{
    type Response = Membership;
    type Error = Error;
    type Future = ServiceFuture<Self::Response>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: GetMembershipRequest) -> Self::Future {
        let database = self.database.clone();
        let auth = self.auth.clone();
        let span = tracing::info_span!("get_membership", membership_id = %req.membership_id);
        Box::pin(
            async move {
                auth.authenticate(&req.token).await?;
                Ok(database.get_membership(&req.membership_id).await?)
            }
            .instrument(span),
        )
    }
}
