use std::fmt;

// === TreeError ===

/// Errors related to link tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// A path or node ID did not resolve.
    NotFound(String),
    /// The targeted node is not a folder.
    InvalidParent(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::NotFound(what) => write!(f, "Node not found: {}", what),
            TreeError::InvalidParent(id) => write!(f, "Not a folder: {}", id),
        }
    }
}

impl std::error::Error for TreeError {}

// === VaultError ===

/// Errors related to the flat on-disk link vault.
#[derive(Debug)]
pub enum VaultError {
    /// The named vault folder does not exist.
    FolderNotFound(String),
    /// A folder or link with the same name already exists; the existing
    /// entry is preserved and the write skipped.
    DuplicateName(String),
    /// A file system operation failed.
    Io(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::FolderNotFound(name) => write!(f, "Vault folder not found: {}", name),
            VaultError::DuplicateName(name) => write!(f, "Name already exists: {}", name),
            VaultError::Io(msg) => write!(f, "Vault I/O error: {}", msg),
        }
    }
}

impl std::error::Error for VaultError {}

// === LaunchError ===

/// Errors related to handing a URL to the browser.
#[derive(Debug, Clone)]
pub enum LaunchError {
    /// The browser could not be launched for a URL.
    Failed(String),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Failed(msg) => write!(f, "Browser launch failed: {}", msg),
        }
    }
}

impl std::error::Error for LaunchError {}

// === SessionError ===

/// Errors related to session export and restore.
#[derive(Debug)]
pub enum SessionError {
    /// Failed to serialize or deserialize session data.
    SerializationError(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::SerializationError(msg) => {
                write!(f, "Session serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SessionError {}
