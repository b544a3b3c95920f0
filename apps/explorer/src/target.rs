//! Resources that can be revealed in a file manager

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, Result};
use crate::utils::paths::{expand_tilde, make_absolute, parent_folder, to_os_string};

/// A folder to open, or a file to select inside its folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorableTarget {
    Folder(PathBuf),
    File(PathBuf),
}

impl ExplorableTarget {
    /// Build a target from a filesystem path
    ///
    /// Expands a leading `~`, resolves relative paths against the current
    /// directory and inspects the path's metadata: regular files become
    /// [`ExplorableTarget::File`], everything else that exists becomes
    /// [`ExplorableTarget::Folder`]. A resolved file always has a parent.
    pub fn from_path(path: &str) -> Result<Self> {
        let path = make_absolute(&expand_tilde(path))?;
        let metadata = fs::metadata(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExplorerError::not_found(to_os_string(&path)),
            _ => ExplorerError::Io(e),
        })?;

        if metadata.is_file() {
            Ok(Self::File(path))
        } else {
            Ok(Self::Folder(path))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Folder(path) | Self::File(path) => path,
        }
    }

    /// The `(folder, file)` pair the launcher works with
    ///
    /// A file is revealed by opening its parent folder with the file selected.
    /// A file with no usable parent yields no folder, which the launcher
    /// treats as nothing to do.
    pub fn slots(&self) -> (Option<String>, Option<String>) {
        match self {
            Self::Folder(path) => (Some(to_os_string(path)), None),
            Self::File(path) => (
                parent_folder(path).map(to_os_string),
                Some(to_os_string(path)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_folder_slots() {
        let target = ExplorableTarget::Folder(PathBuf::from("/home/u"));
        assert_eq!(target.slots(), (Some("/home/u".to_string()), None));
    }

    #[test]
    fn test_file_slots_use_parent_folder() {
        let target = ExplorableTarget::File(PathBuf::from("/home/u/a.txt"));
        assert_eq!(
            target.slots(),
            (Some("/home/u".to_string()), Some("/home/u/a.txt".to_string()))
        );
    }

    #[test]
    fn test_from_path_bare_file_name_uses_cwd() {
        let cwd = env::current_dir().unwrap();
        let name = format!("explorer_target_bare_{}.txt", std::process::id());
        let file = cwd.join(&name);
        fs::write(&file, "hello").unwrap();

        let target = ExplorableTarget::from_path(&name);
        let _ = fs::remove_file(&file);

        let target = target.unwrap();
        assert_eq!(target, ExplorableTarget::File(file.clone()));
        assert_eq!(
            target.slots(),
            (Some(to_os_string(&cwd)), Some(to_os_string(&file)))
        );
    }

    #[test]
    fn test_from_path_relative_nested_file() {
        let cwd = env::current_dir().unwrap();
        let dir_name = format!("explorer_target_rel_{}", std::process::id());
        let dir = cwd.join(&dir_name);
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("a.txt");
        fs::write(&file, "hello").unwrap();

        let target = ExplorableTarget::from_path(&format!("{}/a.txt", dir_name));
        let _ = fs::remove_dir_all(&dir);

        let (folder, selected) = target.unwrap().slots();
        assert_eq!(folder, Some(to_os_string(&dir)));
        assert_eq!(selected, Some(to_os_string(&file)));
    }

    #[test]
    fn test_from_path_detects_kind() {
        let dir = env::temp_dir().join(format!("explorer_target_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("a.txt");
        fs::write(&file, "hello").unwrap();

        let dir_target = ExplorableTarget::from_path(&to_os_string(&dir)).unwrap();
        assert_eq!(dir_target, ExplorableTarget::Folder(dir.clone()));

        let file_target = ExplorableTarget::from_path(&to_os_string(&file)).unwrap();
        assert_eq!(file_target, ExplorableTarget::File(file.clone()));
        assert_eq!(file_target.path(), file.as_path());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_from_path_missing() {
        let result = ExplorableTarget::from_path("/this/path/should/not/exist/12345");
        assert!(matches!(result, Err(ExplorerError::NotFound(_))));
    }
}
