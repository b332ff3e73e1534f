use crate::{
    config::{ApiClient, AuthConfig},
    ports::auth::{AuthPort, Caller, Error},
};
use subtle::ConstantTimeEq;

/// Accepts the bearer tokens of the clients listed in the configuration
#[derive(Clone, Debug, Default)]
pub struct StaticTokenAuth {
    clients: Vec<ApiClient>,
}

impl StaticTokenAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            clients: config.clients.clone(),
        }
    }
}

#[async_trait::async_trait]
impl AuthPort for StaticTokenAuth {
    async fn authenticate(&self, token: &str) -> Result<Caller, Error> {
        if token.is_empty() {
            return Err(Error::Unauthenticated);
        }

        // Compare against every client so timing does not reveal which one matched
        let matched = self.clients.iter().fold(None, |matched, client| {
            let equal: bool = client.token.as_bytes().ct_eq(token.as_bytes()).into();
            matched.or(equal.then_some(client))
        });

        matched
            .map(|client| Caller {
                caller_id: client.name.clone(),
            })
            .ok_or(Error::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use speculoos::prelude::*;

    #[fixture]
    fn auth() -> StaticTokenAuth {
        StaticTokenAuth::new(&AuthConfig {
            clients: vec![
                ApiClient {
                    name: "pos".to_string(),
                    token: "pos-token".to_string(),
                },
                ApiClient {
                    name: "support".to_string(),
                    token: "support-token".to_string(),
                },
            ],
        })
    }

    #[rstest]
    #[case("pos-token", "pos")]
    #[case("support-token", "support")]
    #[tokio::test]
    async fn test_known_token(
        auth: StaticTokenAuth,
        #[case] token: &str,
        #[case] caller_id: &str,
    ) {
        let res = auth.authenticate(token).await;

        assert_that!(res).is_ok().is_equal_to(Caller {
            caller_id: caller_id.to_string(),
        });
    }

    #[rstest]
    #[case("")]
    #[case("pos")]
    #[case("pos-token-2")]
    #[case("POS-TOKEN")]
    #[tokio::test]
    async fn test_rejected_token(auth: StaticTokenAuth, #[case] token: &str) {
        let res = auth.authenticate(token).await;

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::Unauthenticated));
    }
}
