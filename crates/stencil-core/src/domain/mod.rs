// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for stencil.
//!
//! This module contains pure logic with no I/O. Filesystem access, template
//! bundles, serialization and rendering are reached through ports (traits)
//! defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, clock or environment reads
//! - **Immutable values**: a resolved `ParameterSet` never changes
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::{Permissions, RelativePath, TEMPLATE_SUFFIX},
    parameters::{
        DEFAULT_GENERATE_DIR, DEFAULT_PRODUCT_COMPANY, DEFAULT_PRODUCT_COPYRIGHT,
        DEFAULT_PRODUCT_DESCRIPTION, DEFAULT_PRODUCT_NAME, DEFAULT_PRODUCT_VERSION,
        IDENTIFIER_PREFIX, ParameterSet, Platform, RawParameters, ResolveEnv, normalize_name,
    },
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    snapshot::{ConfigSnapshot, DEFAULT_CONFIG_FILE, DEFAULT_UPDATE_DIR},
    template::{
        RenderContext, TemplateContent, TemplateEntry, TemplateTree, TreeId, variables,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
