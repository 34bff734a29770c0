use crate::simplify::SimplifyService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub simplifier: SimplifyService,
}
