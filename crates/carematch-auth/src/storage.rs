//! Private files in the per-user carematch directory.

use std::io;
use std::path::{Path, PathBuf};

/// `<config_dir>/carematch`, shared by the session and the CLI config.
pub fn default_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("carematch"))
}

/// Write `contents` to `dir/file_name` and return the path. Readers see
/// either the old file or the new one, never a partial write. The file is
/// mode 0600 on Unix.
pub fn write_private(dir: &Path, file_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(file_name);
    let tmp_path = dir.join(format!("{file_name}.tmp"));
    std::fs::write(&tmp_path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;
    Ok(path)
}
