//! # Random Asset Factory
//!
//! Builds randomized [`AssetRecord`]s from the tables in [`crate::catalog`].
//!
//! The factory owns its random generator instead of reaching for a
//! process-wide one, so a run started with a seed produces the same sequence
//! of payloads every time:
//!
//! ```rust
//! use asset_loadtest::factory::AssetFactory;
//!
//! let mut a = AssetFactory::seeded(7);
//! let mut b = AssetFactory::seeded(7);
//! assert_eq!(a.generate(), b.generate());
//! ```
//!
//! ## Derived fields
//!
//! | Field            | Rule                                                   |
//! |------------------|--------------------------------------------------------|
//! | `assetName`      | `"{type} - {manufacturer} - {institution[..10]}"`      |
//! | `serialNumber`   | `manufacturer[..3]` + integer in `100000..=999999`     |
//! | `modelNumber`    | `manufacturer[..3]` + `-` + integer in `1000..=9999`   |
//! | `functionalArea` | `"{department} Department"`                            |
//! | `purchaseDate`   | today minus `0..=730` days                             |
//! | `purchasePrice`  | integer in `10000..=500000`                            |
//!
//! Uniqueness is not guaranteed; colliding serial numbers are acceptable for
//! load generation.

use std::ops::RangeInclusive;

use chrono::{Days, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog;
use crate::models::{AssetRecord, BulkAssetBatch};

pub const SERIAL_RANGE: RangeInclusive<u32> = 100_000..=999_999;
pub const MODEL_RANGE: RangeInclusive<u32> = 1_000..=9_999;
pub const PURCHASE_WINDOW_DAYS: u64 = 730;
pub const PRICE_RANGE: RangeInclusive<u32> = 10_000..=500_000;
pub const BULK_PRICE_RANGE: RangeInclusive<u32> = 50_000..=200_000;
pub const BULK_SIZE_RANGE: RangeInclusive<usize> = 5..=10;

/// ISO calendar date format used for `purchaseDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Random asset generator driven by an explicit RNG.
#[derive(Debug, Clone)]
pub struct AssetFactory<R> {
    rng: R,
}

impl AssetFactory<StdRng> {
    /// Deterministic factory for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Factory seeded from the operating system's entropy source.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> AssetFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one asset dated relative to the local calendar date.
    pub fn generate(&mut self) -> AssetRecord {
        self.generate_on(today())
    }

    /// Generate one asset with `purchaseDate` counted back from `today`.
    pub fn generate_on(&mut self, today: NaiveDate) -> AssetRecord {
        let institution = pick(&mut self.rng, &catalog::INSTITUTIONS);
        let department = pick(&mut self.rng, &catalog::DEPARTMENTS);
        let asset_type = pick(&mut self.rng, &catalog::ASSET_TYPES);
        let manufacturer = pick(&mut self.rng, &catalog::MANUFACTURERS);
        let location = pick(&mut self.rng, &catalog::LOCATIONS);

        let prefix = prefix(manufacturer, 3);
        let serial_number = format!("{prefix}{}", self.rng.random_range(SERIAL_RANGE));
        let model_number = format!("{prefix}-{}", self.rng.random_range(MODEL_RANGE));

        let days_ago = self.rng.random_range(0..=PURCHASE_WINDOW_DAYS);
        let purchase_date = today
            .checked_sub_days(Days::new(days_ago))
            .unwrap_or(today)
            .format(DATE_FORMAT)
            .to_string();
        let purchase_price = self.rng.random_range(PRICE_RANGE);
        let status = pick(&mut self.rng, &catalog::STATUSES);

        AssetRecord {
            asset_name: format!(
                "{asset_type} - {manufacturer} - {}",
                prefix_owned(institution, 10)
            ),
            asset_type: asset_type.to_string(),
            institution_name: institution.to_string(),
            department: department.to_string(),
            functional_area: format!("{department} Department"),
            manufacturer: manufacturer.to_string(),
            model_number,
            serial_number,
            location: location.to_string(),
            status: status.to_string(),
            purchase_date,
            purchase_price,
        }
    }

    /// Generate a bulk-import batch dated today.
    pub fn generate_bulk_batch(&mut self) -> BulkAssetBatch {
        self.generate_bulk_batch_on(today())
    }

    /// Generate a batch of 5 to 10 records drawn from the reduced bulk tables.
    pub fn generate_bulk_batch_on(&mut self, today: NaiveDate) -> BulkAssetBatch {
        let count = self.rng.random_range(BULK_SIZE_RANGE);
        let purchase_date = today.format(DATE_FORMAT).to_string();

        let assets = (1..=count)
            .map(|index| {
                // name and type are drawn independently
                let named_type = pick(&mut self.rng, &catalog::bulk::ASSET_TYPES);
                AssetRecord {
                    asset_name: format!("Bulk Asset {index} - {named_type}"),
                    asset_type: pick(&mut self.rng, &catalog::bulk::ASSET_TYPES).to_string(),
                    institution_name: pick(&mut self.rng, &catalog::bulk::INSTITUTIONS)
                        .to_string(),
                    department: pick(&mut self.rng, &catalog::bulk::DEPARTMENTS).to_string(),
                    functional_area: catalog::bulk::FUNCTIONAL_AREA.to_string(),
                    manufacturer: pick(&mut self.rng, &catalog::bulk::MANUFACTURERS).to_string(),
                    model_number: format!(
                        "{}{}",
                        catalog::bulk::MODEL_PREFIX,
                        self.rng.random_range(MODEL_RANGE)
                    ),
                    serial_number: format!(
                        "{}{}",
                        catalog::bulk::SERIAL_PREFIX,
                        self.rng.random_range(SERIAL_RANGE)
                    ),
                    location: catalog::bulk::LOCATION.to_string(),
                    status: catalog::bulk::STATUS.to_string(),
                    purchase_date: purchase_date.clone(),
                    purchase_price: self.rng.random_range(BULK_PRICE_RANGE),
                }
            })
            .collect();

        BulkAssetBatch { assets }
    }
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn pick<R: Rng, const N: usize>(rng: &mut R, table: &[&'static str; N]) -> &'static str {
    table[rng.random_range(0..N)]
}

/// First `n` characters of `s` (the whole string when shorter).
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn prefix_owned(s: &str, n: usize) -> String {
    prefix(s, n).to_string()
}
