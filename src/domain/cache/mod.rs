//! Cache domain - Generic caching abstraction layer

mod key;
mod repository;

pub use key::{headlines_key, search_key};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
