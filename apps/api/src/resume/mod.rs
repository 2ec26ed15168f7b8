//! Resume input handling: normalization, readiness checks and the generation endpoints.

pub mod handlers;
pub mod normalize;
pub mod readiness;
