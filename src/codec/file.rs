//! Export and import of contact files on disk.
//!
//! Each operation either completes or fails as a whole when the file cannot be
//! opened, read or written. Within a readable file, lines are accepted or skipped
//! individually by [`decode`].

use super::line::{decode, encode, DecodeSummary};
use crate::error::{AppError, Result};
use crate::store::ContactStore;
use std::path::Path;
use tracing::{error, info, warn};

/// Writes every contact in `store` to `path`, replacing the file. Returns how many were written.
///
/// # Errors
///
/// Returns `AppError::IoUnavailable` if the file cannot be created or written.
pub async fn export_to_file(store: &ContactStore, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let lines = encode(store);

    let mut contents = String::new();
    for line in &lines {
        contents.push_str(line);
        contents.push('\n');
    }

    tokio::fs::write(path, contents).await.map_err(|e| {
        error!("Failed to export contacts to {}: {}", path.display(), e);
        AppError::unavailable(path, e)
    })?;

    info!("Exported {} contact(s) to {}", lines.len(), path.display());
    Ok(lines.len())
}

/// Reads `path` and merges its contacts into `store`.
///
/// # Errors
///
/// Returns `AppError::IoUnavailable` if the file cannot be read as UTF-8 text.
/// Malformed lines are not errors; they are counted in the returned summary.
pub async fn import_from_file(
    store: &mut ContactStore,
    path: impl AsRef<Path>,
) -> Result<DecodeSummary> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to import contacts from {}: {}", path.display(), e);
        AppError::unavailable(path, e)
    })?;

    let summary = decode(contents.lines(), store);

    if summary.skipped > 0 {
        warn!(
            "Skipped {} malformed line(s) while importing {}",
            summary.skipped,
            path.display()
        );
    }
    info!(
        "Imported {} contact(s) from {}",
        summary.accepted,
        path.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use tempfile::tempdir;

    fn sample_store() -> ContactStore {
        let mut store = ContactStore::new();
        store
            .add("Jane Doe", "5551234567", "jane@x.com", "vip")
            .unwrap();
        store
            .add("John Roe", "4440000000", "john@x.com", "")
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_export_writes_one_terminated_line_per_contact() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.txt");

        let written = export_to_file(&sample_store(), &path).await?;
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(
            contents,
            "4440000000 | John Roe | 4440000000 | john@x.com | \n\
             5551234567 | Jane Doe | 5551234567 | jane@x.com | vip\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_export_then_import_round_trips() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.txt");
        let store = sample_store();

        export_to_file(&store, &path).await?;

        let mut restored = ContactStore::new();
        let summary = import_from_file(&mut restored, &path).await?;
        assert_eq!(summary, DecodeSummary { accepted: 2, skipped: 0 });
        assert_eq!(restored, store);
        Ok(())
    }

    #[tokio::test]
    async fn test_import_counts_malformed_lines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.txt");
        std::fs::write(
            &path,
            "5551234567 | Jane Doe | 5551234567 | jane@x.com | vip\r\n\
             only | three | parts\n",
        )?;

        let mut store = ContactStore::new();
        let summary = import_from_file(&mut store, &path).await?;
        assert_eq!(summary, DecodeSummary { accepted: 1, skipped: 1 });
        assert_eq!(store.get("5551234567").unwrap().additional_info, "vip");
        Ok(())
    }

    #[tokio::test]
    async fn test_import_missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let mut store = sample_store();
        let result = import_from_file(&mut store, &path).await;

        assert!(matches!(result, Err(AppError::IoUnavailable { .. })));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_export_to_directory_is_unavailable() {
        let dir = tempdir().unwrap();
        let result = export_to_file(&sample_store(), dir.path()).await;
        assert!(matches!(result, Err(AppError::IoUnavailable { .. })));
    }
}
