use crate::CaseError;
use std::{
    ffi::OsString,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

/// The environment variable that may hold the path to the solver.
pub const SOLVER_ENV_VAR: &str = "CASE_RUNNER_SOLVER";

/// The location of the default solver, relative to the user's home directory.
pub const DEFAULT_SOLVER_SUBPATH: &str = "solver/bin/solver";

/// Where the path of a [`SolverBinary`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverOrigin {
    /// Given on the command line.
    CommandLine,
    /// Read from the [`SOLVER_ENV_VAR`] environment variable.
    Environment,
    /// Derived from the home directory and [`DEFAULT_SOLVER_SUBPATH`].
    Default,
}

impl Display for SolverOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverOrigin::CommandLine => write!(f, "command line"),
            SolverOrigin::Environment => write!(f, "environment variable {}", SOLVER_ENV_VAR),
            SolverOrigin::Default => write!(f, "default location"),
        }
    }
}

/// An external solver known to exist and to be executable.
///
/// The solver is opaque: nothing is known about its input or output formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverBinary {
    path: PathBuf,
    origin: SolverOrigin,
}

impl SolverBinary {
    /// Locates the solver and checks it can be executed.
    ///
    /// The path given as parameter takes precedence, then the one set in the [`SOLVER_ENV_VAR`] environment variable (if not empty).
    /// When none of them is set, the default solver located at [`DEFAULT_SOLVER_SUBPATH`] in the home directory is used.
    ///
    /// Whatever its origin, the solver must be an existing regular file with execution permission,
    /// or [`CaseError::SolverBinaryUnavailable`] is returned.
    pub fn locate(cli_path: Option<&Path>) -> Result<Self, CaseError> {
        locate_with(cli_path, std::env::var_os(SOLVER_ENV_VAR), dirs::home_dir())
    }

    /// Checks the solver located at the given path.
    pub fn new<P>(path: P, origin: SolverOrigin) -> Result<Self, CaseError>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let unavailable = |reason: String| CaseError::SolverBinaryUnavailable {
            path: path.clone(),
            reason,
        };
        let metadata = fs::metadata(&path).map_err(|e| unavailable(e.to_string()))?;
        if !metadata.is_file() {
            return Err(unavailable("not a regular file".to_string()));
        }
        if !is_executable(&path) {
            return Err(unavailable("not executable".to_string()));
        }
        // the solver runs from the case directory, so a relative path would no longer point to it
        let absolute = std::path::absolute(&path).map_err(|e| unavailable(e.to_string()))?;
        Ok(SolverBinary {
            path: absolute,
            origin,
        })
    }

    /// Returns the absolute path of the solver.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns where the solver path came from.
    pub fn origin(&self) -> SolverOrigin {
        self.origin
    }
}

fn locate_with(
    cli_path: Option<&Path>,
    env_path: Option<OsString>,
    home_dir: Option<PathBuf>,
) -> Result<SolverBinary, CaseError> {
    if let Some(p) = cli_path {
        return SolverBinary::new(p, SolverOrigin::CommandLine);
    }
    if let Some(p) = env_path.filter(|p| !p.is_empty()) {
        return SolverBinary::new(p, SolverOrigin::Environment);
    }
    match home_dir {
        Some(home) => SolverBinary::new(home.join(DEFAULT_SOLVER_SUBPATH), SolverOrigin::Default),
        None => Err(CaseError::SolverBinaryUnavailable {
            path: Path::new("~").join(DEFAULT_SOLVER_SUBPATH),
            reason: "cannot determine the home directory".to_string(),
        }),
    }
}

// asks the system whether the current user may execute the file, as `test -x` does
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};
    access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    fn write_solver(dir: &TempDir, rel_path: &str, mode: u32) -> PathBuf {
        let child = dir.child(rel_path);
        child.write_str("#!/bin/sh\necho solver\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(child.path(), fs::Permissions::from_mode(mode)).unwrap();
        }
        #[cfg(not(unix))]
        let _ = mode;
        child.path().to_path_buf()
    }

    #[test]
    fn test_new_ok() {
        let dir = TempDir::new().unwrap();
        let path = write_solver(&dir, "solver", 0o755);
        let solver = SolverBinary::new(&path, SolverOrigin::CommandLine).unwrap();
        assert_eq!(path, solver.path());
        assert_eq!(SolverOrigin::CommandLine, solver.origin());
    }

    #[test]
    fn test_new_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solver");
        match SolverBinary::new(&path, SolverOrigin::CommandLine) {
            Err(CaseError::SolverBinaryUnavailable { path: p, .. }) => assert_eq!(path, p),
            r => panic!("unexpected result {:?}", r), // kcov-ignore
        }
    }

    #[test]
    fn test_new_directory() {
        let dir = TempDir::new().unwrap();
        match SolverBinary::new(dir.path(), SolverOrigin::CommandLine) {
            Err(CaseError::SolverBinaryUnavailable { reason, .. }) => {
                assert_eq!("not a regular file", reason)
            }
            r => panic!("unexpected result {:?}", r), // kcov-ignore
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_not_executable() {
        let dir = TempDir::new().unwrap();
        let path = write_solver(&dir, "solver", 0o644);
        match SolverBinary::new(&path, SolverOrigin::CommandLine) {
            Err(CaseError::SolverBinaryUnavailable { reason, .. }) => {
                assert_eq!("not executable", reason)
            }
            r => panic!("unexpected result {:?}", r), // kcov-ignore
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable_agrees_with_shell_test() {
        let dir = TempDir::new().unwrap();
        for (name, mode) in [("owner", 0o700), ("others", 0o011), ("none", 0o644)] {
            let path = write_solver(&dir, name, mode);
            let shell_says = std::process::Command::new("/bin/sh")
                .arg("-c")
                .arg("test -x \"$0\"")
                .arg(&path)
                .status()
                .unwrap()
                .success();
            assert_eq!(shell_says, is_executable(&path), "mode {:o}", mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_executable_by_others_only() {
        let dir = TempDir::new().unwrap();
        let path = write_solver(&dir, "solver", 0o011);
        let result = SolverBinary::new(&path, SolverOrigin::CommandLine);
        assert_eq!(is_executable(&path), result.is_ok());
        if let Err(CaseError::SolverBinaryUnavailable { reason, .. }) = result {
            assert_eq!("not executable", reason);
        }
    }

    #[test]
    fn test_locate_precedence() {
        let dir = TempDir::new().unwrap();
        let cli = write_solver(&dir, "cli_solver", 0o755);
        let env = write_solver(&dir, "env_solver", 0o755);
        dir.child("home/solver/bin").create_dir_all().unwrap();
        let default = write_solver(&dir, "home/solver/bin/solver", 0o755);
        let home = Some(dir.path().join("home"));
        let solver =
            locate_with(Some(cli.as_path()), Some(env.clone().into()), home.clone()).unwrap();
        assert_eq!(SolverOrigin::CommandLine, solver.origin());
        assert_eq!(cli, solver.path());
        let solver = locate_with(None, Some(env.clone().into()), home.clone()).unwrap();
        assert_eq!(SolverOrigin::Environment, solver.origin());
        assert_eq!(env, solver.path());
        let solver = locate_with(None, Some(OsString::new()), home).unwrap();
        assert_eq!(SolverOrigin::Default, solver.origin());
        assert_eq!(default, solver.path());
    }

    #[test]
    fn test_locate_no_home() {
        match locate_with(None, None, None) {
            Err(CaseError::SolverBinaryUnavailable { path, .. }) => {
                assert!(path.ends_with(DEFAULT_SOLVER_SUBPATH))
            }
            r => panic!("unexpected result {:?}", r), // kcov-ignore
        }
    }

    #[test]
    fn test_locate_default_missing() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            locate_with(None, None, Some(dir.path().to_path_buf())),
            Err(CaseError::SolverBinaryUnavailable { .. })
        ));
    }
}
