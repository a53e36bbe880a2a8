use std::str::FromStr;

use itrack_config::Config;
use itrack_storage::{
    store::{in_memory::InMemoryStoreConfig, json_dir::JsonDirStoreConfig},
    BuiltinStoreType, StoreBox, StoreConfig,
};

use crate::Tracker;

/// Build a ready-to-use [`Tracker`] from the loaded configuration: resolve
/// the configured store type, hand the remaining `[store]` keys to that
/// backend's config and initialize the backend.
pub async fn load(config: &Config) -> eyre::Result<Tracker> {
    let store_type = BuiltinStoreType::from_str(&config.store.store_type)
        .map_err(|_| eyre::eyre!("unknown store type '{}'", config.store.store_type))?;

    let store = match store_type {
        BuiltinStoreType::Json => build_store::<JsonDirStoreConfig>(config)?,
        BuiltinStoreType::InMemory => build_store::<InMemoryStoreConfig>(config)?,
    };

    let tracker = Tracker::new(store);
    tracker.initialize().await?;

    Ok(tracker)
}

fn build_store<SC: StoreConfig>(config: &Config) -> eyre::Result<StoreBox> {
    let store_config: SC = config.store.details.clone().try_into()?;
    store_config.try_into_store()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(toml_str: &str) -> Config {
        toml::from_str(toml_str).unwrap()
    }

    #[tokio::test]
    async fn loads_the_in_memory_store() {
        let config = config_from(
            r#"
            [server]

            [store]
            store_type = "memory"
            "#,
        );

        assert!(load(&config).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_an_unknown_store_type() {
        let config = config_from(
            r#"
            [server]

            [store]
            store_type = "carrier-pigeon"
            "#,
        );

        assert!(load(&config).await.is_err());
    }
}
