pub mod default;
pub mod hosts;

use std::path::PathBuf;

use anyhow::Result;

/// Name of the per-user directory under the home directory
pub const USER_DIR_NAME: &str = ".pingboard";

/// Get the per-user config directory, creating it if needed.
pub fn get_user_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))?;
    let dir = home.join(USER_DIR_NAME);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Get the path of a file in the per-user config directory.
pub fn get_user_file_path(file_name: &str) -> Result<PathBuf> {
    Ok(get_user_dir()?.join(file_name))
}
