use serde::de::DeserializeOwned;

use crate::store::{Store, StoreBox};

pub trait StoreConfig: DeserializeOwned + Default {
    type Store: Store;

    fn try_into_store(self) -> eyre::Result<StoreBox>;
}
