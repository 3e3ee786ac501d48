//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the stencil
//! build-asset generator, following hexagonal (ports and adapters) architecture.
//!
//! Build assets come from two template trees:
//!
//! - **foundation**: rendered once by `generate`, then owned by the user.
//! - **evolving**: rendered by `generate` and re-rendered by every `update`
//!   from the config snapshot stored next to it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (AssetService, resolver)           │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Filesystem, Render, Codec, Clock)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (EmbeddedTemplateStore, LocalFilesystem)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ParameterSet, ConfigSnapshot, Template)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stencil_core::prelude::*;
//!
//! let service = AssetService::new(store, renderer, codec, filesystem);
//!
//! // 1. Generate both trees
//! let raw = RawParameters { name: "My App".into(), ..Default::default() };
//! let report = service.generate(&raw, ResolveEnv::host(2030))?;
//!
//! // 2. Later: re-render the evolving tree from the stored snapshot
//! service.update(&UpdateRequest {
//!     directory: "build".into(),
//!     config_name: DEFAULT_CONFIG_FILE.into(),
//! })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AssetService, GenerateReport, RenderReport, UpdateRequest,
        ports::{Clock, CodecError, Filesystem, SnapshotCodec, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ConfigSnapshot, DEFAULT_CONFIG_FILE, DEFAULT_UPDATE_DIR, ParameterSet, Platform,
        ProjectStructure, RawParameters, RelativePath, RenderContext, ResolveEnv, TreeId,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
