//! Infrastructure adapters for stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! template trees bundled into the binary.

pub mod clock;
pub mod codec;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use codec::YamlSnapshotCodec;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SubstitutionRenderer;
pub use template_store::{EmbeddedTemplateStore, InMemoryTemplateStore};
