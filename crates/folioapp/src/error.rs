use thiserror::Error;

/// Structural problems found while validating a tree at the load boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTreeError {
    #[error("Folder with an empty id (name: \"{0}\")")]
    EmptyFolderId(String),

    #[error("Document with an empty id (title: \"{0}\")")]
    EmptyDocumentId(String),

    #[error("Duplicate folder id: {0}")]
    DuplicateFolderId(String),

    #[error("Duplicate document id: {0}")]
    DuplicateDocumentId(String),

    #[error("Folder {0} is contained in itself")]
    FolderCycle(String),
}

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Invalid tree: {0}")]
    InvalidTree(#[from] InvalidTreeError),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Folder \"{name}\" is not empty")]
    FolderNotEmpty { id: String, name: String },

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
