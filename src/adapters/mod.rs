pub mod assets;
pub mod filesystem;
pub mod parent_context;

pub use assets::{EmbeddedServiceCatalog, EmbeddedTemplates, default_label_table};
pub use filesystem::FilesystemStore;
pub use parent_context::{RecordingParentContext, StandaloneParentContext};
