//! Assets embedded into the binary at build time.

mod label_table_embedded;
mod service_catalog_embedded;
mod template_engine;

pub use label_table_embedded::default_label_table;
pub use service_catalog_embedded::EmbeddedServiceCatalog;
pub use template_engine::{EmbeddedTemplates, README_TEMPLATE, SERVICE_SOURCE_TEMPLATE};
