pub mod common;
pub mod parameters;
pub mod project_structure;
pub mod snapshot;
pub mod template;

pub use crate::domain::DomainError;
pub use parameters::{ParameterSet, RawParameters};
pub use project_structure::ProjectStructure;
pub use snapshot::ConfigSnapshot;
pub use template::{RenderContext, TemplateTree, TreeId};
