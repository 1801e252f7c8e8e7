use std::path::PathBuf;
use thiserror::Error;

/// The reasons for which a case cannot be run.
///
/// Each variant is a precondition checked before the solver is launched.
/// When one of them is returned, nothing has been written into the case directory.
#[derive(Debug, Error)]
pub enum CaseError {
    /// No case directory was given on the command line (or an empty one was).
    #[error("Usage: {program} <case_directory>")]
    MissingArgument {
        /// The invocation to display in the usage message.
        program: String,
    },

    /// The case directory path does not refer to an existing directory.
    #[error("case directory {0:?} does not exist or is not a directory")]
    DirectoryNotFound(PathBuf),

    /// The case directory does not contain the input file.
    #[error("input file {0:?} not found")]
    InputFileMissing(PathBuf),

    /// The solver binary is missing or cannot be executed.
    #[error("solver binary {path:?} is unavailable: {reason}")]
    SolverBinaryUnavailable {
        /// The path at which the solver was expected.
        path: PathBuf,
        /// Why the solver cannot be used.
        reason: String,
    },
}
