//! Application layer for stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AssetService, destination resolution)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Defaulting and substitution rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AssetService, GenerateReport, RenderReport, UpdateRequest};

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, CodecError, Filesystem, SnapshotCodec, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
