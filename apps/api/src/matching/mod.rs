// Matching engine: keyword-set overlap and semantic text analysis.
// The matchers are pure synchronous functions; the engine trait and the
// route handlers wrap them for the service surface.

pub mod engine;
pub mod handlers;
pub mod keyword;
pub mod semantic;
pub mod stem;
pub mod tokenize;
