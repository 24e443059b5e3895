//! # asset-loadtest
//!
//! Load generator for an asset tagging service, built on [goose].
//!
//! ## Overview
//!
//! Simulated users log in once, then loop over weighted API calls with a
//! random think-time between them. Two user profiles exist:
//!
//! - **Single asset users** create one asset at a time and read the dashboard
//!   statistics, trial status and asset list
//! - **Bulk users** submit batches of 5 to 10 assets in one request
//!
//! Every payload is synthesized by [`factory::AssetFactory`] from the fixed
//! vocabularies in [`catalog`]. A seeded run is reproducible per user.
//!
//! ## Architecture
//!
//! - **[`models`]** - Wire types: credentials, asset records and response envelopes
//! - **[`catalog`]** - Value tables the factory draws from
//! - **[`factory`]** - Random asset and bulk batch generation
//! - **[`outcome`]** - HTTP status and envelope classification into [`outcome::ApiError`]
//! - **[`session`]** - Per-user authentication state machine
//! - **[`scenarios`]** - Goose scenarios and transactions for both profiles
//! - **[`config`]** - YAML and environment configuration
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - `run` and `sample` commands
//!
//! ```mermaid
//! sequenceDiagram
//!     participant G as Goose
//!     participant U as GooseUser
//!     participant S as Asset service
//!
//!     G->>U: spawn (on_start)
//!     U->>S: POST /api/login
//!     S-->>U: token
//!     loop until run time expires
//!         G->>U: pick weighted transaction
//!         U->>S: request with Bearer token
//!         S-->>U: envelope
//!         U->>U: think-time
//!     end
//!     G->>U: on_stop (report skips)
//! ```
//!
//! ## Quick start
//!
//! ```bash
//! asset-loadtest run --host http://localhost:8080 -u 20 -r 2 -t 120 --profile mixed
//! asset-loadtest sample --profile single -n 3 --seed 42
//! ```
//!
//! [goose]: https://docs.rs/goose

pub mod catalog;
pub mod cli;
pub mod config;
pub mod factory;
pub mod logging;
pub mod models;
pub mod outcome;
pub mod scenarios;
pub mod session;
