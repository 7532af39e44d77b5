pub mod components;
pub mod config;
pub mod error;
pub mod params;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
