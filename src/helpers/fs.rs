//! File System Utilities
//!
//! Platform directories for preferences and log files.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};

const LEGACY_DIR: &str = ".storefront-admin";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "storefront", "storefront-admin").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the configuration directory
///
/// - **Linux**: `~/.config/storefront-admin/`
/// - **macOS**: `~/Library/Application Support/com.storefront.storefront-admin/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\storefront\storefront-admin\config\`
///
/// Files left in `~/.storefront-admin` by older builds are moved over once.
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = ensure_dir(dirs.config_dir())?;

    if let Some(home) = home_dir() {
        let legacy = home.join(LEGACY_DIR);
        if legacy.is_dir() {
            match copy_dir_files(&legacy, &config_dir) {
                Ok(()) => {
                    let _ = fs::remove_dir_all(&legacy);
                    tracing::info!(from = %legacy.display(), "Migrated legacy config directory");
                }
                Err(e) => tracing::warn!(error = %e, "Legacy config migration failed"),
            }
        }
    }

    Ok(config_dir)
}

/// Get or create the data directory (log files)
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.data_dir())
}

/// Copy plain files from `src` into `dst`, skipping sub-directories
fn copy_dir_files(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        fs::copy(entry.path(), dst.join(entry.file_name()))?;
    }
    Ok(())
}

pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_dir_files_skips_directories() {
        let base = std::env::temp_dir().join(format!("sfa-fs-{}", uuid::Uuid::new_v4()));
        let src = base.join("src");
        let dst = base.join("dst");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("storefront-admin.toml"), "locale = \"en\"").unwrap();

        copy_dir_files(&src, &dst).unwrap();

        assert!(dst.join("storefront-admin.toml").exists());
        assert!(!dst.join("nested").exists());
        let _ = fs::remove_dir_all(&base);
    }
}
