//! Configuration-time errors. The simulation tick itself never fails.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("maze layout has no rows")]
    EmptyLayout,
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
