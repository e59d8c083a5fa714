pub mod flatten;
pub mod service;
pub mod types;
pub mod valuation;

pub use flatten::{flatten_asset, flatten_assets};
pub use service::AccountInfoService;
pub use types::{AccountSummary, CanonicalAsset, HistoryEntry, ProtocolPosition};
pub use valuation::{build_summary, net_worth};
