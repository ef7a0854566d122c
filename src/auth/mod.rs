pub mod cache;
pub mod graph_client;
pub mod token;

pub use cache::{CacheState, ClientCache};
pub use graph_client::GraphClient;
