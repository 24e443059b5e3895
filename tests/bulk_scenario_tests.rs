//! Bulk users post batches of 5 to 10 assets, accepting a top-level token.

mod common;

use asset_loadtest::models::BulkAssetBatch;
use asset_loadtest::scenarios::Profile;
use common::attack::{fast_config, run};
use common::mock_service::MockService;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_bulk_profile_posts_batches() {
    let service = MockService::start(r#"{"success":true,"token":"flat-token"}"#);

    run(&service.base_url, Profile::Bulk, 2, fast_config()).await;

    let requests = service.requests();
    let logins = requests.iter().filter(|r| r.path == "/api/login").count();
    assert_eq!(logins, 2, "one login per user");

    let batches: Vec<_> = requests
        .iter()
        .filter(|r| r.path == "/api/assets/multiple")
        .collect();
    assert!(!batches.is_empty());
    assert!(requests
        .iter()
        .filter(|r| r.path != "/api/login")
        .all(|r| r.path == "/api/assets/multiple"));

    for request in batches {
        assert_eq!(request.method, "POST");
        assert_eq!(request.authorization.as_deref(), Some("Bearer flat-token"));
        let batch: BulkAssetBatch = serde_json::from_str(&request.body).unwrap();
        assert!((5..=10).contains(&batch.len()));
        for asset in &batch.assets {
            assert_eq!(asset.location, "BULK IMPORT");
            assert_eq!(asset.status, "Active");
            assert_eq!(asset.functional_area, "Bulk Import");
            assert!(asset.model_number.starts_with("BULK-"));
        }
    }
}
