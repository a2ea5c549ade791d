use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot create output {path}: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error: {0}")]
    Image(String),

    #[error("record identifier {0:?} cannot be used as a file name")]
    InvalidIdentifier(String),

    #[error("invalid activity record: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }
}
