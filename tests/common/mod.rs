pub mod fixtures;
pub mod utils;
