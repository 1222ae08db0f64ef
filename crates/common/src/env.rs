//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database pool is built.

use tracing::{info, warn};

/// Make sure the parent directory of a file-backed SQLite database exists.
///
/// Postgres URLs and in-memory SQLite are left alone.
pub async fn ensure_sqlite_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else { return Ok(()) };
    let Some(parent) = std::path::Path::new(path).parent() else { return Ok(()) };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    if tokio::fs::metadata(parent).await.is_err() {
        warn!(dir = %parent.display(), "sqlite data directory missing; creating it");
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    info!(path, "using sqlite database file");
    Ok(())
}

/// Extract the file path of a `sqlite:` URL, `None` for other backends and `:memory:`.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::sqlite_file_path;

    #[test]
    fn sqlite_path_extraction() {
        assert_eq!(sqlite_file_path("sqlite://data/autos.db?mode=rwc"), Some("data/autos.db"));
        assert_eq!(sqlite_file_path("sqlite:autos.db"), Some("autos.db"));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/autos"), None);
    }

    #[tokio::test]
    async fn memory_and_postgres_urls_are_noops() {
        super::ensure_sqlite_dir("sqlite::memory:").await.unwrap();
        super::ensure_sqlite_dir("postgres://localhost/autos").await.unwrap();
    }
}
