use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "";
const ORGANIZATION: &str = "";
const APPLICATION: &str = "startpage";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// The user's section layout, `startpage.toml` under the platform config dir.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("startpage.toml"))
}

/// Debug log destination, truncated on every launch.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("startpage.log"))
}
