//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate build assets" or "update from snapshot".

pub mod asset_service;
pub mod resolver;

pub use asset_service::{AssetService, GenerateReport, RenderReport, UpdateRequest};
