use thiserror::Error;

/// Typed outcome of a protocol balance lookup.
///
/// Network-level failures are a returned variant like everything else:
/// the loader never logs-and-drops an error past its boundary.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Expected absence: the wallet holds none of the tracked positions.
    #[error("{0}")]
    NotFound(String),

    /// The provider rejected the request; carries the upstream status code.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The provider could not be reached at all.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProtocolError {
    pub fn not_found(product_label: &str) -> Self {
        Self::NotFound(format!("Account does not hold {product_label} assets"))
    }

    pub fn upstream(status: u16) -> Self {
        Self::Upstream {
            status,
            message: "Address must be a valid avalanche address".to_string(),
        }
    }
}
