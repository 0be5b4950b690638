//! Path normalization

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// `~user` forms and paths without a tilde are returned unchanged, as is
/// everything when no home directory is known.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest.trim_start_matches(&['/', '\\'][..])),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::expand_home;
    use std::path::PathBuf;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_home("conf/app.json"), PathBuf::from("conf/app.json"));
        assert_eq!(expand_home("/etc/app.json"), PathBuf::from("/etc/app.json"));
        assert_eq!(expand_home("~other/app.json"), PathBuf::from("~other/app.json"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/app.json"), home.join("app.json"));
        assert_eq!(expand_home("~/conf/app.json"), home.join("conf").join("app.json"));
    }
}
