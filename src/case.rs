use crate::CaseError;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// The name of the input file a case directory must contain.
///
/// This is also the single argument given to the solver.
pub const INPUT_FILE_NAME: &str = "input.dat";

/// The name of the file receiving the solver output.
pub const LOG_FILE_NAME: &str = "log.txt";

/// A checked case directory.
///
/// Building a [`CaseDirectory`] guarantees that the directory existed and contained a regular [`INPUT_FILE_NAME`] file at that time.
/// The path is kept in its canonical form, so relative paths and trailing separators lead to the same case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDirectory {
    path: PathBuf,
}

impl CaseDirectory {
    /// Checks a case directory given by the user.
    ///
    /// Relative paths are resolved against the current working directory.
    /// An error is returned if the path is not an existing directory ([`CaseError::DirectoryNotFound`])
    /// or if it lacks the input file ([`CaseError::InputFileMissing`]).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use case_runner::CaseDirectory;
    /// let case = CaseDirectory::open("cases/case1/").unwrap();
    /// assert!(case.path().is_absolute());
    /// ```
    pub fn open<P>(path: P) -> Result<Self, CaseError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let canonical = match fs::canonicalize(path) {
            Ok(p) if p.is_dir() => p,
            _ => return Err(CaseError::DirectoryNotFound(path.to_path_buf())),
        };
        let input_file = canonical.join(INPUT_FILE_NAME);
        if !input_file.is_file() {
            return Err(CaseError::InputFileMissing(input_file));
        }
        Ok(CaseDirectory { path: canonical })
    }

    /// Returns the canonical path of the case directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path of the input file.
    pub fn input_file(&self) -> PathBuf {
        self.path.join(INPUT_FILE_NAME)
    }

    /// Returns the path of the log file.
    pub fn log_file(&self) -> PathBuf {
        self.path.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    fn case_with_input() -> TempDir {
        let dir = TempDir::new().unwrap();
        dir.child(INPUT_FILE_NAME).write_str("1 2 3\n").unwrap();
        dir
    }

    #[test]
    fn test_open_ok() {
        let dir = case_with_input();
        let case = CaseDirectory::open(dir.path()).unwrap();
        assert_eq!(fs::canonicalize(dir.path()).unwrap(), case.path());
        assert_eq!(case.path().join("input.dat"), case.input_file());
        assert_eq!(case.path().join("log.txt"), case.log_file());
    }

    #[test]
    fn test_open_trailing_separator() {
        let dir = case_with_input();
        let with_slash = format!("{}/", dir.path().display());
        assert_eq!(
            CaseDirectory::open(dir.path()).unwrap(),
            CaseDirectory::open(with_slash).unwrap()
        );
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        match CaseDirectory::open(&missing) {
            Err(CaseError::DirectoryNotFound(p)) => assert_eq!(missing, p),
            r => panic!("unexpected result {:?}", r), // kcov-ignore
        }
    }

    #[test]
    fn test_open_file_instead_of_directory() {
        let dir = case_with_input();
        let file = dir.child(INPUT_FILE_NAME);
        assert!(matches!(
            CaseDirectory::open(file.path()),
            Err(CaseError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_open_empty_path() {
        assert!(matches!(
            CaseDirectory::open(""),
            Err(CaseError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_open_missing_input() {
        let dir = TempDir::new().unwrap();
        match CaseDirectory::open(dir.path()) {
            Err(CaseError::InputFileMissing(p)) => assert!(p.ends_with(INPUT_FILE_NAME)),
            r => panic!("unexpected result {:?}", r), // kcov-ignore
        }
    }

    #[test]
    fn test_open_input_is_a_directory() {
        let dir = TempDir::new().unwrap();
        dir.child(INPUT_FILE_NAME).create_dir_all().unwrap();
        assert!(matches!(
            CaseDirectory::open(dir.path()),
            Err(CaseError::InputFileMissing(_))
        ));
    }
}
