//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stencil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Read-only template bundles
//!   - `TemplateRenderer`: Template rendering
//!   - `SnapshotCodec`: Config snapshot (de)serialization
//!   - `Clock`: Current calendar year
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Clock, CodecError, Filesystem, SnapshotCodec, TemplateRenderer, TemplateStore};
