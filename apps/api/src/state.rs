use std::sync::Arc;

use crate::outreach::composer::OutreachComposer;
use crate::scoring::fit_scoring::FitScorer;
use crate::search::finder::ProfileFinder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the search cache; one instance per process.
    pub finder: Arc<ProfileFinder>,
    /// Pluggable fit scorer. Default: HeuristicFitScorer. Swap via SCORER_BACKEND.
    pub fit_scorer: Arc<dyn FitScorer>,
    pub composer: OutreachComposer,
}
