//! # Load Test Scenarios
//!
//! Goose scenarios describing the two kinds of simulated user:
//!
//! - **`AssetTaggingUser`** ([`single`]): creates single assets and reads the
//!   dashboard, trial status and asset list
//! - **`AssetBulkUser`** ([`bulk`]): posts batches of 5 to 10 assets
//!
//! Goose owns all scheduling: it spawns the users, runs the on-start login
//! once per user, then repeatedly picks a weighted transaction and sleeps for
//! the scenario's think-time. Everything a user needs between transactions
//! (its [`AuthSession`], its random generator and a skip counter) lives in
//! goose session data as a [`UserState`], so users share nothing mutable.
//!
//! ## Transaction flow
//!
//! ```text
//! guard on session ──▶ build payload ──▶ one request ──▶ decode ──▶ log
//!       │ (not authenticated)
//!       └──▶ count skip, no request
//! ```

pub mod bulk;
pub mod single;

use std::sync::Arc;

use goose::goose::GooseResponse;
use goose::metrics::GooseRequestMetric;
use goose::prelude::*;
use goose::GooseScheduler;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::LoadTestConfig;
use crate::factory::AssetFactory;
use crate::logging::redact_token;
use crate::outcome::{decode, ApiError};
use crate::session::AuthSession;

/// Endpoint paths on the asset service.
pub mod paths {
    pub const LOGIN: &str = "/api/login";
    pub const ADD_ASSET: &str = "/addAsset";
    pub const DASHBOARD_STATS: &str = "/api/dashboard/stats";
    pub const TRIAL_STATUS: &str = "/api/trial/status";
    pub const ASSETS: &str = "/api/assets";
    pub const ASSETS_MULTIPLE: &str = "/api/assets/multiple";
}

/// Which user profiles a run registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Profile {
    /// Only `AssetTaggingUser`
    Single,
    /// Only `AssetBulkUser`
    Bulk,
    /// Both, users split by profile weight
    Mixed,
}

/// Per-user state carried between transactions.
#[derive(Debug)]
pub struct UserState {
    pub session: AuthSession,
    pub factory: AssetFactory<StdRng>,
    /// Transactions that did nothing because the session is not authenticated
    pub skipped: u64,
}

impl UserState {
    pub fn new(factory: AssetFactory<StdRng>) -> Self {
        Self {
            session: AuthSession::new(),
            factory,
            skipped: 0,
        }
    }
}

/// Register the scenarios selected by `profile` on `attack`.
pub fn register(
    attack: GooseAttack,
    profile: Profile,
    config: &Arc<LoadTestConfig>,
) -> Result<GooseAttack, GooseError> {
    // Shuffle each user's weighted transaction list instead of walking it in
    // declaration order.
    let attack = attack.set_scheduler(GooseScheduler::Random);
    let attack = match profile {
        Profile::Single => attack.register_scenario(single::scenario(config)?),
        Profile::Bulk => attack.register_scenario(bulk::scenario(config)?),
        Profile::Mixed => attack
            .register_scenario(single::scenario(config)?)
            .register_scenario(bulk::scenario(config)?),
    };
    Ok(attack)
}

/// On-start login transaction shared by both profiles.
pub fn login_transaction(config: &Arc<LoadTestConfig>) -> Transaction {
    let config = Arc::clone(config);
    let closure: TransactionFunction = Arc::new(move |user| {
        let config = Arc::clone(&config);
        Box::pin(async move { login(user, &config).await })
    });
    Transaction::new(closure)
        .set_name("POST /api/login")
        .set_on_start()
}

/// On-stop transaction logging how many tasks a user skipped.
pub fn skip_report_transaction() -> Transaction {
    transaction!(report_skips).set_on_stop()
}

/// Log in and install this user's [`UserState`].
///
/// The state is installed whatever the outcome, so a failed login leaves a
/// disabled session behind and every later transaction skips.
pub async fn login(user: &mut GooseUser, config: &LoadTestConfig) -> TransactionResult {
    let index = user.weighted_users_index;
    let mut state = UserState::new(AssetFactory::with_optional_seed(
        config.user_seed(index),
    ));

    let goose = match user.post_json(paths::LOGIN, &config.credentials).await {
        Ok(goose) => goose,
        Err(error) => {
            if let Err(reason) = state.session.fail(ApiError::Transport(error.to_string())) {
                warn!(user = index, error = %reason, "login failed, user disabled for this run");
            }
            user.set_session_data(state);
            return Err(error);
        }
    };
    let (mut request, response) = read_response(goose).await;
    let outcome = match response {
        Ok((status, body)) => state.session.complete_login(status, &body),
        Err(error) => state.session.fail(error),
    };
    user.set_session_data(state);

    match outcome {
        Ok(()) => {
            let token = user
                .get_session_data::<UserState>()
                .and_then(|s| s.session.token())
                .map(redact_token)
                .unwrap_or_default();
            info!(user = index, token = %token, "login successful");
            Ok(())
        }
        Err(error) => {
            warn!(user = index, error = %error, "login failed, user disabled for this run");
            user.set_failure(
                &format!("login: {error}"),
                &mut request,
                None,
                error.body(),
            )
        }
    }
}

async fn report_skips(user: &mut GooseUser) -> TransactionResult {
    let index = user.weighted_users_index;
    if let Some(state) = user.get_session_data::<UserState>() {
        if state.skipped > 0 {
            info!(user = index, skipped = state.skipped, "user skipped unauthenticated tasks");
        }
    }
    Ok(())
}

/// Guard a transaction on the session and build its payload.
///
/// Returns the `Authorization` header value and the payload, or `None` (after
/// counting a skip) when the user holds no token.
pub(crate) fn prepare<T>(
    user: &mut GooseUser,
    action: &str,
    build: impl FnOnce(&mut UserState) -> T,
) -> Option<(String, T)> {
    let index = user.weighted_users_index;
    let state = user.get_session_data_mut::<UserState>()?;
    match state.session.authorization_header() {
        Some(auth) => {
            let payload = build(state);
            Some((auth, payload))
        }
        None => {
            state.skipped += 1;
            debug!(user = index, action, "no authentication token, skipping");
            None
        }
    }
}

/// Issue one request carrying the bearer header and an optional JSON body.
pub(crate) async fn send_authorized<B: Serialize>(
    user: &mut GooseUser,
    method: GooseMethod,
    path: &str,
    auth: &str,
    body: Option<&B>,
) -> Result<GooseResponse, Box<TransactionError>> {
    let mut request_builder = user
        .get_request_builder(&method, path)?
        .header("Authorization", auth);
    if let Some(body) = body {
        request_builder = request_builder.json(body);
    }
    let goose_request = GooseRequest::builder()
        .method(method)
        .path(path)
        .set_request_builder(request_builder)
        .build();
    user.request(goose_request).await
}

/// Split a goose response into its metric and `(status, body)`.
pub(crate) async fn read_response(
    goose: GooseResponse,
) -> (GooseRequestMetric, Result<(u16, String), ApiError>) {
    let GooseResponse { request, response } = goose;
    let result = match response {
        Ok(response) => {
            let status = response.status().as_u16();
            response
                .text()
                .await
                .map(|body| (status, body))
                .map_err(|e| ApiError::Transport(e.to_string()))
        }
        Err(e) => Err(ApiError::Transport(e.to_string())),
    };
    (request, result)
}

/// Decode a response, or flag the request as failed and log why.
///
/// `Ok(None)` means success without a `data` payload.
pub(crate) async fn settle<T: DeserializeOwned>(
    user: &mut GooseUser,
    action: &str,
    goose: GooseResponse,
) -> Result<Option<T>, Box<TransactionError>> {
    let (mut request, response) = read_response(goose).await;
    match response.and_then(|(status, body)| decode::<T>(status, &body)) {
        Ok(data) => Ok(data),
        Err(error) => {
            warn!(
                user = user.weighted_users_index,
                action,
                error = %error,
                "request failed"
            );
            if let Some(body) = error.body() {
                debug!(action, body, "failed response body");
            }
            user.set_failure(&format!("{action}: {error}"), &mut request, None, error.body())
                .map(|()| None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;
    use goose::config::GooseConfiguration;
    use url::Url;

    fn user_for(base_url: &str) -> GooseUser {
        GooseUser::single(Url::parse(base_url).unwrap(), &GooseConfiguration::default()).unwrap()
    }

    async fn assert_login_disables(mut user: GooseUser) {
        let config = LoadTestConfig::default();
        assert!(login(&mut user, &config).await.is_err());

        let state = user.get_session_data::<UserState>().unwrap();
        assert!(matches!(state.session.state(), SessionState::Disabled { .. }));

        assert!(prepare(&mut user, "create asset", |state| state.factory.generate()).is_none());
        assert!(prepare(&mut user, "bulk create", |_| ()).is_none());
        assert_eq!(user.get_session_data::<UserState>().unwrap().skipped, 2);
    }

    #[tokio::test]
    async fn test_login_request_that_cannot_be_built_disables_user() {
        // No path can be joined onto a cannot-be-a-base URL.
        assert_login_disables(user_for("mailto:ops@example.com")).await;
    }

    #[tokio::test]
    async fn test_login_connection_refused_disables_user() {
        assert_login_disables(user_for("http://127.0.0.1:1")).await;
    }

    #[test]
    fn test_prepare_without_state_is_none() {
        let mut user = user_for("http://127.0.0.1:1");
        assert!(prepare(&mut user, "dashboard stats", |_| ()).is_none());
    }
}
