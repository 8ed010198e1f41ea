// Sourcing pipeline: Finder → Scorer → Composer → rank, and its HTTP handler.

pub mod handlers;
pub mod pipeline;
