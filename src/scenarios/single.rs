//! `AssetTaggingUser`: single-asset-heavy profile.
//!
//! | Transaction               | Weight | Request                      |
//! |---------------------------|--------|------------------------------|
//! | [`create_asset`]          | 3      | `POST /addAsset`             |
//! | [`get_dashboard_stats`]   | 1      | `GET /api/dashboard/stats`   |
//! | [`get_trial_status`]      | 1      | `GET /api/trial/status`      |
//! | [`get_assets_list`]       | 1      | `GET /api/assets`            |
//!
//! Think-time defaults to a uniform 1 to 3 seconds.

use std::sync::Arc;

use goose::prelude::*;
use tracing::info;

use super::{login_transaction, paths, prepare, send_authorized, settle, skip_report_transaction};
use crate::config::LoadTestConfig;
use crate::models::{AssetList, DashboardStats, TrialStatus};

pub const SCENARIO_NAME: &str = "AssetTaggingUser";

pub fn scenario(config: &Arc<LoadTestConfig>) -> Result<Scenario, GooseError> {
    let profile = &config.single;
    let weights = &profile.transactions;
    Ok(scenario!(SCENARIO_NAME)
        .set_weight(profile.weight)?
        .set_wait_time(profile.think_time.min(), profile.think_time.max())?
        .register_transaction(login_transaction(config))
        .register_transaction(
            transaction!(create_asset)
                .set_name("POST /addAsset")
                .set_weight(weights.create_asset)?,
        )
        .register_transaction(
            transaction!(get_dashboard_stats)
                .set_name("GET /api/dashboard/stats")
                .set_weight(weights.dashboard_stats)?,
        )
        .register_transaction(
            transaction!(get_trial_status)
                .set_name("GET /api/trial/status")
                .set_weight(weights.trial_status)?,
        )
        .register_transaction(
            transaction!(get_assets_list)
                .set_name("GET /api/assets")
                .set_weight(weights.list_assets)?,
        )
        .register_transaction(skip_report_transaction()))
}

/// Create one randomized asset.
pub async fn create_asset(user: &mut GooseUser) -> TransactionResult {
    let Some((auth, asset)) = prepare(user, "create asset", |state| state.factory.generate())
    else {
        return Ok(());
    };
    let goose = send_authorized(user, GooseMethod::Post, paths::ADD_ASSET, &auth, Some(&asset))
        .await?;
    settle::<serde_json::Value>(user, "create asset", goose).await?;
    info!(asset_name = %asset.asset_name, "asset created");
    Ok(())
}

pub async fn get_dashboard_stats(user: &mut GooseUser) -> TransactionResult {
    let Some((auth, ())) = prepare(user, "dashboard stats", |_| ()) else {
        return Ok(());
    };
    let goose = send_authorized::<()>(user, GooseMethod::Get, paths::DASHBOARD_STATS, &auth, None)
        .await?;
    let stats = settle::<DashboardStats>(user, "dashboard stats", goose)
        .await?
        .unwrap_or_default();
    info!(total_assets = stats.total_assets, "dashboard stats");
    Ok(())
}

pub async fn get_trial_status(user: &mut GooseUser) -> TransactionResult {
    let Some((auth, ())) = prepare(user, "trial status", |_| ()) else {
        return Ok(());
    };
    let goose = send_authorized::<()>(user, GooseMethod::Get, paths::TRIAL_STATUS, &auth, None)
        .await?;
    let trial = settle::<TrialStatus>(user, "trial status", goose)
        .await?
        .unwrap_or_default();
    info!(
        days_remaining = trial.days_remaining,
        expired = trial.is_expired,
        "trial status"
    );
    Ok(())
}

pub async fn get_assets_list(user: &mut GooseUser) -> TransactionResult {
    let Some((auth, ())) = prepare(user, "assets list", |_| ()) else {
        return Ok(());
    };
    let goose = send_authorized::<()>(user, GooseMethod::Get, paths::ASSETS, &auth, None).await?;
    let assets = settle::<AssetList>(user, "assets list", goose)
        .await?
        .unwrap_or_default();
    info!(count = assets.len(), "assets list");
    Ok(())
}
