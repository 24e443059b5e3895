//! # Wire Models
//!
//! Request payloads sent to the asset service and the typed envelopes its
//! responses are decoded into.
//!
//! Every response from the service shares one shape:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... }, "error": "..." }
//! ```
//!
//! [`ApiEnvelope`] models that shape with every key optional, so a body that
//! omits `data` or `error` still decodes and the caller decides what a missing
//! key means.

use serde::{Deserialize, Serialize};

/// Login credentials posted to `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub const DEFAULT_USERNAME: &'static str = "Terminal Reality Admin";
    pub const DEFAULT_PASSWORD: &'static str = "H@rri50n";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USERNAME, Self::DEFAULT_PASSWORD)
    }
}

/// One randomized asset, serialized with the camelCase keys `/addAsset` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub asset_name: String,
    pub asset_type: String,
    pub institution_name: String,
    pub department: String,
    pub functional_area: String,
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub location: String,
    pub status: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub purchase_date: String,
    pub purchase_price: u32,
}

/// Body of `POST /api/assets/multiple`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAssetBatch {
    pub assets: Vec<AssetRecord>,
}

impl BulkAssetBatch {
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Generic response envelope returned by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of a successful login.
///
/// The token is normally nested under `data`, but the service also returns it
/// as a top-level key; both are accepted and `data.token` wins.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<LoginData>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LoginEnvelope {
    /// First non-empty token, `data.token` before the top-level key.
    pub fn token(&self) -> Option<&str> {
        let non_empty = |t: &&str| !t.is_empty();
        self.data
            .as_ref()
            .and_then(|d| d.token.as_deref())
            .filter(non_empty)
            .or_else(|| self.token.as_deref().filter(non_empty))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
}

/// `data` of `GET /api/dashboard/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_assets: u64,
    #[serde(default)]
    pub active_assets: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_value: f64,
}

/// `data` of `GET /api/trial/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrialStatus {
    #[serde(default)]
    pub days_remaining: i64,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub subscription_plan: Option<String>,
}

/// `data` of `GET /api/assets`. Only the count matters to the load test, so
/// the elements are kept as raw JSON.
pub type AssetList = Vec<serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_record_uses_camel_case_keys() {
        let record = AssetRecord {
            asset_name: "LAPTOP - DELL - KENYATTA U".into(),
            asset_type: "LAPTOP".into(),
            institution_name: "KENYATTA UNIVERSITY".into(),
            department: "ICT".into(),
            functional_area: "ICT Department".into(),
            manufacturer: "DELL".into(),
            model_number: "DEL-1234".into(),
            serial_number: "DEL123456".into(),
            location: "LIBRARY".into(),
            status: "Active".into(),
            purchase_date: "2025-01-31".into(),
            purchase_price: 42_000,
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "assetName",
            "assetType",
            "institutionName",
            "department",
            "functionalArea",
            "manufacturer",
            "modelNumber",
            "serialNumber",
            "location",
            "status",
            "purchaseDate",
            "purchasePrice",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 12);
        assert_eq!(value["purchasePrice"], 42_000);
    }

    #[test]
    fn test_envelope_defaults_missing_keys() {
        let env: ApiEnvelope<DashboardStats> = serde_json::from_str("{}").unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert!(env.error.is_none());

        let env: ApiEnvelope<DashboardStats> =
            serde_json::from_str(r#"{"success":true,"data":{}}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap().total_assets, 0);
    }

    #[test]
    fn test_login_token_lookup() {
        let nested: LoginEnvelope =
            serde_json::from_str(r#"{"success":true,"data":{"token":"abc"}}"#).unwrap();
        assert_eq!(nested.token(), Some("abc"));

        let top_level: LoginEnvelope =
            serde_json::from_str(r#"{"success":true,"token":"xyz"}"#).unwrap();
        assert_eq!(top_level.token(), Some("xyz"));

        let both: LoginEnvelope =
            serde_json::from_str(r#"{"success":true,"token":"xyz","data":{"token":"abc"}}"#)
                .unwrap();
        assert_eq!(both.token(), Some("abc"));

        let empty: LoginEnvelope =
            serde_json::from_str(r#"{"success":true,"data":{"token":""}}"#).unwrap();
        assert_eq!(empty.token(), None);
    }

    #[test]
    fn test_empty_nested_token_falls_back_to_top_level() {
        let env: LoginEnvelope =
            serde_json::from_str(r#"{"success":true,"token":"xyz","data":{"token":""}}"#)
                .unwrap();
        assert_eq!(env.token(), Some("xyz"));

        let env: LoginEnvelope =
            serde_json::from_str(r#"{"success":true,"token":"","data":{}}"#).unwrap();
        assert_eq!(env.token(), None);
    }

    #[test]
    fn test_trial_status_partial_body() {
        let env: ApiEnvelope<TrialStatus> =
            serde_json::from_str(r#"{"success":true,"data":{"days_remaining":12}}"#).unwrap();
        let status = env.data.unwrap();
        assert_eq!(status.days_remaining, 12);
        assert!(!status.is_expired);
    }
}
