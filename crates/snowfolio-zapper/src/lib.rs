pub mod client;
pub mod error;
pub mod loader;
pub mod traits;
pub mod types;

pub use client::ZapperClient;
pub use error::ProtocolError;
pub use loader::{ProtocolLoader, ProtocolSpec};
pub use traits::BalanceSource;
pub use types::{AddressBalances, BalancesResponse, Product, RawAsset};
