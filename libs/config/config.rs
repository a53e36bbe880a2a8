use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreProfileConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the http server binds to (default: "127.0.0.1:3000")
    pub listen_address: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreProfileConfig {
    /// Type of store (e.g. json)
    pub store_type: String,

    // Rest of the store config as a flexible structure
    #[serde(flatten)]
    pub details: toml::Value,
}

impl Config {
    /// Configuration used when no config file is present: json documents at
    /// the default location, loopback listener.
    pub fn default_config() -> Self {
        Config {
            server: ServerConfig {
                listen_address: None,
            },
            store: StoreProfileConfig {
                store_type: "json".to_owned(),
                details: toml::Value::Table(toml::map::Map::new()),
            },
        }
    }
}

impl ServerConfig {
    /// Return the configured listen address or the loopback default
    pub fn get_listen_address(&self) -> String {
        self.listen_address
            .clone()
            .unwrap_or("127.0.0.1:3000".to_owned())
    }
}
