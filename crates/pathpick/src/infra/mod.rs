pub mod expand;
pub mod fs;
