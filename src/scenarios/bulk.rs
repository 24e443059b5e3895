//! `AssetBulkUser`: bulk-import profile.
//!
//! A single transaction, [`create_multiple_assets`], posting 5 to 10 records
//! drawn from the reduced bulk tables to `POST /api/assets/multiple`.
//! Think-time defaults to a uniform 0.5 to 1.5 seconds.

use std::sync::Arc;

use goose::prelude::*;
use tracing::info;

use super::{login_transaction, paths, prepare, send_authorized, settle, skip_report_transaction};
use crate::config::LoadTestConfig;

pub const SCENARIO_NAME: &str = "AssetBulkUser";

pub fn scenario(config: &Arc<LoadTestConfig>) -> Result<Scenario, GooseError> {
    let profile = &config.bulk;
    Ok(scenario!(SCENARIO_NAME)
        .set_weight(profile.weight)?
        .set_wait_time(profile.think_time.min(), profile.think_time.max())?
        .register_transaction(login_transaction(config))
        .register_transaction(
            transaction!(create_multiple_assets).set_name("POST /api/assets/multiple"),
        )
        .register_transaction(skip_report_transaction()))
}

/// Post one randomized batch.
pub async fn create_multiple_assets(user: &mut GooseUser) -> TransactionResult {
    let Some((auth, batch)) = prepare(user, "bulk create", |state| {
        state.factory.generate_bulk_batch()
    }) else {
        return Ok(());
    };
    let goose = send_authorized(
        user,
        GooseMethod::Post,
        paths::ASSETS_MULTIPLE,
        &auth,
        Some(&batch),
    )
    .await?;
    settle::<serde_json::Value>(user, "bulk create", goose).await?;
    info!(count = batch.len(), "bulk assets created");
    Ok(())
}
