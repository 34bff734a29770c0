// Text simplification: prompt assembly, one schema-constrained provider call,
// and the HTTP handler that fronts it.
// All provider calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod service;

pub use service::SimplifyService;
