use std::path::PathBuf;

/// Errors raised while loading config, levels and editor key-values
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    #[error("couldn't read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid RON in {}: {source}", path.display())]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("key-value `{key}` has invalid value {value:?}: {reason}")]
    InvalidKeyValue {
        key: String,
        value: String,
        reason: &'static str,
    },

    #[error("no entity class named `{0}`")]
    UnknownClass(String),

    #[error("couldn't encode light update: {0}")]
    Encode(#[from] ron::Error),
}

pub type Result<T, E = PropsError> = std::result::Result<T, E>;

/// Reads a RON file from disk into `T`
pub(crate) fn load_ron<T: serde::de::DeserializeOwned>(path: impl Into<PathBuf>) -> Result<T> {
    let path = path.into();
    let text = std::fs::read_to_string(&path).map_err(|source| PropsError::Io {
        path: path.clone(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| PropsError::Ron { path, source })
}
