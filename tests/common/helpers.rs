// Test helper functions

use repogate::core::config::Config;
use repogate::core::gateway::GatewayService;
use repogate::core::marker::PathMarker;
use tempfile::TempDir;

use super::fixtures::TestRepo;

/// Gateway over the local filesystem index with default settings
#[allow(dead_code)]
pub fn create_test_gateway() -> GatewayService {
    GatewayService::from_config(&Config::default())
}

/// Gateway already bound to `repo`
#[allow(dead_code)]
pub fn bound_gateway(repo: &TestRepo) -> GatewayService {
    let gateway = create_test_gateway();
    gateway.init(repo.path_str()).unwrap();
    gateway
}

/// Marker backed by a file in a fresh temporary state directory
///
/// Ignores `REPOGATE_REPO_PATH` so tests are independent of the
/// environment they run in.
#[allow(dead_code)]
pub fn create_test_marker() -> (PathMarker, TempDir) {
    let state = TempDir::new().unwrap();
    let marker = PathMarker::new(state.path().join("repo_path"));
    (marker, state)
}
