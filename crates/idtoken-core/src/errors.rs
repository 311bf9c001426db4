use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SignInError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("invalid command-line arguments")]
    InvalidArguments,
    #[error("authentication failed ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
