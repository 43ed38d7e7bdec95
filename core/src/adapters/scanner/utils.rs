use std::path::PathBuf;

/// Finds the first existing path in the given list.
pub fn find_executable(paths: &[&str]) -> Option<PathBuf> {
    for path in paths {
        let path_buf = PathBuf::from(path);
        if path_buf.exists() {
            return Some(path_buf);
        }
    }
    None
}

/// Finds `name` in one of the directories listed in `PATH`.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
