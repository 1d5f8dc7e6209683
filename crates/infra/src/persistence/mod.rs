// crates/infra/src/persistence/mod.rs
pub mod file_reader;
pub mod file_writer;

pub use file_reader::FileReader;
pub use file_writer::{FileWriter, OutputWriter};
