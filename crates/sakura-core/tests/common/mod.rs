use sakura_core::{Invitations, InvitationsBuilder, SqliteStore};
use tempfile::TempDir;

/// Helper function to open an invitation store in a fresh temporary directory
pub fn create_test_invitations() -> (TempDir, Invitations<SqliteStore>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let invitations = InvitationsBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to open invitation store");
    (temp_dir, invitations)
}

/// Helper function returning an ID generator that hands out `ids` in order
#[allow(dead_code)]
pub fn scripted_ids(ids: &[&str]) -> impl FnMut() -> String {
    let mut remaining: Vec<String> = ids.iter().rev().map(|id| id.to_string()).collect();
    move || remaining.pop().expect("scripted IDs exhausted")
}
