#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),

    /// The referenced table is absent; reported before any network call.
    #[error("The table '{0}' does not exist.")]
    SchemaNotFound(String),

    /// The upstream generation call failed. Single attempt, never retried.
    #[error("Error fetching AI-generated content: {message}")]
    Transport {
        /// HTTP status code, when the upstream responded at all.
        status: Option<u16>,
        message: String,
    },

    /// Schema probing against the local database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Directory creation or file write failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err.to_string())
    }
}
