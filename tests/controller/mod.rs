
use cardmarket::server::{model::app::AppState, service::cleaner::NameCleaner};
use cardmarket_test_utils::TestSetup;

/// Builds an [`AppState`] over the test database; the cleaner points at the
/// mock server and carries no key unless a test configures one.
fn app_state(test: &TestSetup) -> AppState {
    AppState {
        db: test.state.db.clone(),
        cleaner: NameCleaner::new(&test.server.url(), None, "gpt-4.1-nano"),
    }
}
