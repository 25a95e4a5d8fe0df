pub mod builder;
pub mod file_processing;
pub mod minifier;
