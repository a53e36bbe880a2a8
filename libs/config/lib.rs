mod config;
mod load_config;

pub use config::{Config, ServerConfig, StoreProfileConfig};
pub use load_config::load;
