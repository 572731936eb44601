//! Error type for target URL validation.

use thiserror::Error;

/// Why a user-supplied database URL was rejected.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("no URL given")]
    Empty,

    #[error("cannot parse {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {0:?} (expected https or http)")]
    UnsupportedScheme(String),

    #[error("no host in {0:?}")]
    MissingHost(String),
}
