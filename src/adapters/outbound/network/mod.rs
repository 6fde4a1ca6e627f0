/// Network adapters for the ClearlyDefined service
mod caching_clearlydefined_client;
mod clearlydefined_client;

pub use caching_clearlydefined_client::CachingContentDataRepository;
pub use clearlydefined_client::{
    ClearlyDefinedRepository, ClientConfig, DEFAULT_BASE_URL, DEFAULT_BATCH_SIZE,
    DEFAULT_TIMEOUT_SECONDS,
};
