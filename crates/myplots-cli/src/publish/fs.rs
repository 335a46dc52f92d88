use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy directory contents into `dst`, overwriting existing
/// files. `.git` directories are skipped. Returns the number of files copied.
pub fn copy_directory(src: &Path, dst: &Path) -> io::Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
    {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(src).map_err(io::Error::other)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(path, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove a directory tree if it exists. Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_dir_all(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_copy_overwrites_and_skips_git() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        fs::create_dir_all(src.path().join("css")).unwrap();
        fs::create_dir_all(src.path().join(".git")).unwrap();
        fs::write(src.path().join("index.html"), "new").unwrap();
        fs::write(src.path().join("css/site.css"), "body {}").unwrap();
        fs::write(src.path().join(".git/HEAD"), "ref").unwrap();

        fs::write(dst.path().join("index.html"), "old").unwrap();
        fs::write(dst.path().join("keep.txt"), "kept").unwrap();

        let copied = copy_directory(src.path(), dst.path()).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.path().join("index.html")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.path().join("css/site.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dst.path().join("keep.txt")).unwrap(), "kept");
        assert!(!dst.path().join(".git").exists());
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dst = tempfile::tempdir().unwrap();
        assert!(copy_directory(&dst.path().join("missing"), dst.path()).is_err());
    }

    #[test]
    fn test_remove_dir_if_exists() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("_build");
        fs::create_dir_all(build.join("html")).unwrap();

        assert!(remove_dir_if_exists(&build).unwrap());
        assert!(!build.exists());
        assert!(!remove_dir_if_exists(&build).unwrap());
    }
}
