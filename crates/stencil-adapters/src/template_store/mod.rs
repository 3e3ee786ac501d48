//! Template bundle stores.

mod embedded;
mod memory;

pub use embedded::EmbeddedTemplateStore;
pub use memory::InMemoryTemplateStore;
