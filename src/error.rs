use snafu::Snafu;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Which attribute a metadata lookup was after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    MimeType,
    LastModified,
    FileSize,
    Visibility,
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetadataKind::MimeType => "mime_type",
            MetadataKind::LastModified => "last_modified",
            MetadataKind::FileSize => "file_size",
            MetadataKind::Visibility => "visibility",
        };
        f.write_str(name)
    }
}

/// Step of a move at which it failed.
///
/// A move is a copy followed by a delete of the source. A failure at
/// [`MoveStage::Delete`] means the copy already landed, so both the source and
/// the destination exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStage {
    Copy,
    Delete,
}

impl fmt::Display for MoveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStage::Copy => f.write_str("copy"),
            MoveStage::Delete => f.write_str("delete"),
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Environment variable {key} is required but not found"))]
    MissingEnvVar { key: String },

    #[snafu(display("Configuration option '{key}' is required but not found"))]
    MissingConfig { key: String },

    #[snafu(display("Unsupported storage driver: {provider}"))]
    UnsupportedProvider { provider: String },

    #[snafu(display("Authentication failed: {message}"))]
    AuthenticationFailed { message: String },

    #[snafu(display("File not found: {path}"))]
    FileNotFound { path: String },

    #[snafu(display("Upload to '{path}' failed: {source}"))]
    UploadFailed { path: String, source: Box<Error> },

    #[snafu(display("{feature} is not supported by Selectel cloud storage"))]
    Unsupported { feature: String },

    #[snafu(display("Unable to read file from location '{path}': {source}"))]
    ReadFailed { path: String, source: Box<Error> },

    #[snafu(display("Unable to write file at location '{path}': {source}"))]
    WriteFailed { path: String, source: Box<Error> },

    #[snafu(display("Unable to copy file from '{src_path}' to '{dest_path}': {source}"))]
    CopyFailed {
        src_path: String,
        dest_path: String,
        source: Box<Error>,
    },

    #[snafu(display(
        "Unable to move file from '{src_path}' to '{dest_path}' ({stage} step failed): {source}"
    ))]
    MoveFailed {
        src_path: String,
        dest_path: String,
        stage: MoveStage,
        source: Box<Error>,
    },

    #[snafu(display("Unable to delete file located at '{path}': {source}"))]
    DeleteFailed { path: String, source: Box<Error> },

    #[snafu(display("Unable to delete directory located at '{path}': {source}"))]
    DeleteDirectoryFailed { path: String, source: Box<Error> },

    #[snafu(display("Unable to create directory at location '{path}': {source}"))]
    DirectoryCreationFailed { path: String, source: Box<Error> },

    #[snafu(display("Unable to check existence for '{path}': {source}"))]
    ExistenceCheckFailed { path: String, source: Box<Error> },

    #[snafu(display("Unable to retrieve the {kind} for file at location '{path}': {source}"))]
    MetadataRetrievalFailed {
        path: String,
        kind: MetadataKind,
        source: Box<Error>,
    },

    #[snafu(display("Unable to set visibility '{visibility}' for file at location '{path}': {source}"))]
    SetVisibilityFailed {
        path: String,
        visibility: String,
        source: Box<Error>,
    },

    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    #[snafu(display("OpenDAL error: {source}"))]
    OpenDal { source: opendal::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl Error {
    /// Whether the remote object was missing, looking through wrapped causes.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::FileNotFound { .. } => true,
            Error::OpenDal { source } => source.kind() == opendal::ErrorKind::NotFound,
            Error::UploadFailed { source, .. }
            | Error::ReadFailed { source, .. }
            | Error::WriteFailed { source, .. }
            | Error::CopyFailed { source, .. }
            | Error::MoveFailed { source, .. }
            | Error::DeleteFailed { source, .. }
            | Error::DeleteDirectoryFailed { source, .. }
            | Error::DirectoryCreationFailed { source, .. }
            | Error::ExistenceCheckFailed { source, .. }
            | Error::MetadataRetrievalFailed { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// The step a failed move stopped at, if this is a move failure.
    pub fn move_stage(&self) -> Option<MoveStage> {
        match self {
            Error::MoveFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl From<opendal::Error> for Error {
    fn from(error: opendal::Error) -> Self {
        Error::OpenDal { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Http { source: error }
    }
}
