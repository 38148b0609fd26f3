pub mod entry;
pub mod error;
pub mod options;
pub mod path;
