//! News infrastructure - upstream provider client

mod http_client;
mod newsdata;

pub use http_client::{HttpClient, HttpClientTrait};
pub use newsdata::NewsDataProvider;
