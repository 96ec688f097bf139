use crate::core::error::GitDecoratorError;
use std::path::PathBuf;

/// Directory holding `config.json`.
///
/// `XDG_CONFIG_HOME` wins on every platform so tests and users can redirect it.
pub fn get_config_directory() -> Result<PathBuf, GitDecoratorError> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => match std::env::consts::OS {
            "linux" | "freebsd" | "netbsd" | "openbsd" => dirs::home_dir()
                .map(|home| home.join(".config"))
                .ok_or(GitDecoratorError::ConfigDirectoryNotFound)?,
            _ => dirs::config_dir().ok_or(GitDecoratorError::ConfigDirectoryNotFound)?,
        },
    };

    Ok(base.join("git-decorator"))
}
