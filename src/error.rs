use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("no saved path at index {index} ({count} saved)")]
    SavedPathIndex { index: usize, count: usize },

    #[error("no scan path given; pass a PATH or --saved <N>")]
    MissingScanPath,

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("data file is corrupt: {path}: {source}")]
    CorruptData {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrganizerError>;
