//! CaptionBot Application Orchestration Layer
//!
//! This crate contains the use cases, session bookkeeping and the router
//! that connects transport events to them.

pub mod deps;
pub mod messages;
pub mod router;
pub mod sessions;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use deps::AppDeps;
pub use router::EventRouter;
