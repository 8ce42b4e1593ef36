//! Path utilities: expand ~ in user-supplied store and export paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/x.json"), PathBuf::from("/tmp/x.json"));
        assert_eq!(expand_tilde("rel.json"), PathBuf::from("rel.json"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x.json"), home.join("x.json"));
        }
    }
}
