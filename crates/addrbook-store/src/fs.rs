use crate::error::Result;
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};

/// Hidden sibling used while a file is being rewritten.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}

/// Writes `contents` to a temporary sibling and renames it over `path`.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let tmp = temp_path(path);
    if let Err(err) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{temp_path, write_atomic};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[test]
    fn temp_path_is_hidden_sibling() {
        assert_eq!(
            temp_path(Path::new("dir/contacts.json")),
            PathBuf::from("dir/.contacts.json.tmp")
        );
    }

    #[test]
    fn write_atomic_replaces_contents() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("book.json");

        write_atomic(&path, b"first").expect("first write");
        write_atomic(&path, b"second").expect("second write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "second");
        assert!(!temp_path(&path).exists());
    }
}
