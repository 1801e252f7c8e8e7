//! Case runner: checks a solver case directory and runs an external solver inside it.
//!
//! A case is a directory holding an `input.dat` file.
//! Running a case launches the solver binary with `input.dat` as its only argument and the case directory as its working directory,
//! while both its output streams are captured into `log.txt` in the same directory.
//!
//! ```no_run
//! # use case_runner::{CaseDirectory, SolverBinary};
//! let case = CaseDirectory::open("/tmp/case1").unwrap();
//! let solver = SolverBinary::locate(None).unwrap();
//! let run = case_runner::run_case(&case, &solver).unwrap();
//! println!("solver output written to {}", run.log_file().display());
//! ```

#![warn(missing_docs)]

mod case;
pub use case::CaseDirectory;
pub use case::INPUT_FILE_NAME;
pub use case::LOG_FILE_NAME;

mod error;
pub use error::CaseError;

mod runner;
pub use runner::run_case;
pub use runner::SolverOutcome;
pub use runner::SolverRun;

mod solver;
pub use solver::SolverBinary;
pub use solver::SolverOrigin;
pub use solver::DEFAULT_SOLVER_SUBPATH;
pub use solver::SOLVER_ENV_VAR;
