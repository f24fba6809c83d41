#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use shortlink::application::services::MappingService;
use shortlink::domain::clock::ManualClock;
use shortlink::domain::repositories::MappingRepository;
use shortlink::infrastructure::persistence::InMemoryMappingRepository;
use shortlink::infrastructure::qr::PngQrRenderer;
use shortlink::state::AppState;

pub const BASE_URL: &str = "https://sho.rt";

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

/// Test fixture around an in-memory store and a hand-driven clock.
pub struct TestContext {
    pub state: AppState,
    pub repository: Arc<InMemoryMappingRepository>,
    pub clock: ManualClock,
}

pub fn create_test_context() -> TestContext {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let clock = ManualClock::new(fixed_now());

    let state = create_test_state(repository.clone(), clock.clone());

    TestContext {
        state,
        repository,
        clock,
    }
}

pub fn create_test_state(repository: Arc<dyn MappingRepository>, clock: ManualClock) -> AppState {
    let service = MappingService::new(repository, Arc::new(clock));

    AppState::new(
        Arc::new(service),
        Arc::new(PngQrRenderer::new()),
        BASE_URL,
    )
}

/// Creates a mapping through the service, bypassing HTTP.
pub async fn create_test_mapping(
    state: &AppState,
    url: &str,
    expires_in: shortlink::domain::expiration::ExpirationOption,
    alias: Option<&str>,
) -> shortlink::domain::entities::Mapping {
    state
        .mapping_service
        .create(url, expires_in, alias)
        .await
        .unwrap()
}
