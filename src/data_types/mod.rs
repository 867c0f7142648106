pub mod config;
pub mod data;
pub mod series;

pub use config::*;
pub use data::*;
pub use series::*;
