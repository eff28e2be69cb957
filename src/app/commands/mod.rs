pub mod generate;
pub mod remap;
pub mod services;
