//! Link Vault for Multilink.
//!
//! The flat persisted variant: one directory per folder under a hidden base
//! directory, one `<link name>.txt` file per link whose entire contents is
//! the raw URL string. Independent of the in-memory tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::types::errors::VaultError;

/// Default base directory for the vault, relative to the working directory.
pub const DEFAULT_BASE_DIR: &str = ".multilink_data";

/// Trait defining the flat vault interface.
pub trait LinkVaultTrait {
    fn create_folder(&self, name: &str) -> Result<(), VaultError>;
    /// Writes a link file into a folder. An existing link with the same name
    /// is preserved and the write skipped.
    fn add_link(&self, folder: &str, name: &str, url: &str) -> Result<(), VaultError>;
    /// Links of a folder as name → URL, sorted by name.
    fn read_links(&self, folder: &str) -> Result<BTreeMap<String, String>, VaultError>;
    /// Folder names, sorted.
    fn list_folders(&self) -> Result<Vec<String>, VaultError>;
    /// Deletes a folder and all links inside it.
    fn delete_folder(&self, name: &str) -> Result<(), VaultError>;
}

/// Flat link store over plain directories and text files.
pub struct LinkVault {
    base_dir: PathBuf,
}

impl LinkVault {
    /// Creates a vault rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| VaultError::Io(e.to_string()))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    fn folder_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

impl LinkVaultTrait for LinkVault {
    fn create_folder(&self, name: &str) -> Result<(), VaultError> {
        let path = self.folder_path(name);
        if path.exists() {
            return Err(VaultError::DuplicateName(name.to_string()));
        }
        fs::create_dir_all(&path).map_err(|e| VaultError::Io(e.to_string()))
    }

    fn add_link(&self, folder: &str, name: &str, url: &str) -> Result<(), VaultError> {
        let folder_path = self.folder_path(folder);
        if !folder_path.exists() {
            return Err(VaultError::FolderNotFound(folder.to_string()));
        }
        let link_path = folder_path.join(format!("{}.txt", name.trim()));
        if link_path.exists() {
            return Err(VaultError::DuplicateName(name.trim().to_string()));
        }
        fs::write(&link_path, url.trim()).map_err(|e| VaultError::Io(e.to_string()))
    }

    fn read_links(&self, folder: &str) -> Result<BTreeMap<String, String>, VaultError> {
        let folder_path = self.folder_path(folder);
        if !folder_path.exists() {
            return Err(VaultError::FolderNotFound(folder.to_string()));
        }
        let entries = fs::read_dir(&folder_path).map_err(|e| VaultError::Io(e.to_string()))?;

        let mut links = BTreeMap::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|ext| ext == "txt") != Some(true) {
                continue;
            }
            let name = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().to_string(),
                None => continue,
            };
            // Unreadable link files are skipped rather than failing the read
            if let Ok(url) = fs::read_to_string(&path) {
                links.insert(name, url.trim().to_string());
            }
        }
        Ok(links)
    }

    fn list_folders(&self) -> Result<Vec<String>, VaultError> {
        let entries = fs::read_dir(&self.base_dir).map_err(|e| VaultError::Io(e.to_string()))?;
        let mut folders: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        folders.sort();
        Ok(folders)
    }

    fn delete_folder(&self, name: &str) -> Result<(), VaultError> {
        let path = self.folder_path(name);
        if !path.exists() {
            return Err(VaultError::FolderNotFound(name.to_string()));
        }
        fs::remove_dir_all(&path).map_err(|e| VaultError::Io(e.to_string()))
    }
}
