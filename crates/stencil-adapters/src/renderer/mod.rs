//! Template renderers.

mod substitution;

pub use substitution::SubstitutionRenderer;
