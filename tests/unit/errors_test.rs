use multilink::types::errors::*;

// === TreeError Tests ===

#[test]
fn tree_error_not_found_display() {
    let err = TreeError::NotFound("node-123".to_string());
    assert_eq!(err.to_string(), "Node not found: node-123");
}

#[test]
fn tree_error_invalid_parent_display() {
    let err = TreeError::InvalidParent("link-456".to_string());
    assert_eq!(err.to_string(), "Not a folder: link-456");
}

#[test]
fn tree_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TreeError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === VaultError Tests ===

#[test]
fn vault_error_display_variants() {
    assert_eq!(
        VaultError::FolderNotFound("Work".to_string()).to_string(),
        "Vault folder not found: Work"
    );
    assert_eq!(
        VaultError::DuplicateName("Docs".to_string()).to_string(),
        "Name already exists: Docs"
    );
    assert_eq!(
        VaultError::Io("permission denied".to_string()).to_string(),
        "Vault I/O error: permission denied"
    );
}

// === LaunchError Tests ===

#[test]
fn launch_error_display() {
    let err = LaunchError::Failed("no handler registered".to_string());
    assert_eq!(err.to_string(), "Browser launch failed: no handler registered");
}

#[test]
fn launch_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(LaunchError::Failed("boom".to_string()));
    assert!(err.source().is_none());
}

// === SessionError Tests ===

#[test]
fn session_error_display() {
    let err = SessionError::SerializationError("unexpected EOF".to_string());
    assert_eq!(err.to_string(), "Session serialization error: unexpected EOF");
}
