use crate::{CaseDirectory, SolverBinary, INPUT_FILE_NAME};
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
    time::{Duration, Instant},
};

/// How the solver invocation ended.
#[derive(Debug)]
pub enum SolverOutcome {
    /// The solver ran and exited with the given status.
    Exited(ExitStatus),
    /// The system refused to start the solver; the message was written into the log file.
    LaunchFailed(String),
}

impl SolverOutcome {
    /// Returns `true` iff the solver ran and exited successfully.
    pub fn success(&self) -> bool {
        matches!(self, SolverOutcome::Exited(s) if s.success())
    }
}

/// The result of a solver run on a case.
///
/// A [`SolverRun`] is returned whatever the outcome of the solver is:
/// its failures are only reported, both in the log file and through [`SolverRun::outcome`].
#[derive(Debug)]
pub struct SolverRun {
    outcome: SolverOutcome,
    log_file: PathBuf,
    elapsed: Duration,
}

impl SolverRun {
    /// Returns how the solver invocation ended.
    pub fn outcome(&self) -> &SolverOutcome {
        &self.outcome
    }

    /// Returns the path of the file that captured the solver output.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Returns the time spent waiting for the solver.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Runs the solver on a case.
///
/// The solver is launched with [`INPUT_FILE_NAME`] as its only argument, from the case directory.
/// Its standard output and error streams share the same handle on the log file, which is truncated beforehand,
/// so the log keeps the bytes in the order the solver produced them.
/// This function blocks until the solver exits.
///
/// An error is returned only if the log file cannot be set up.
/// The exit status of the solver, or the reason it could not be started, is part of the returned [`SolverRun`].
pub fn run_case(case: &CaseDirectory, solver: &SolverBinary) -> Result<SolverRun> {
    let log_file = case.log_file();
    let stdout_log = File::create(&log_file)
        .with_context(|| format!("while creating log file {:?}", log_file))?;
    let stderr_log = stdout_log
        .try_clone()
        .context("while duplicating the log file handle")?;
    let mut launch_log = stdout_log
        .try_clone()
        .context("while duplicating the log file handle")?;
    let start_time = Instant::now();
    let status = Command::new(solver.path())
        .arg(INPUT_FILE_NAME)
        .current_dir(case.path())
        .stdout(Stdio::from(stdout_log))
        .stderr(Stdio::from(stderr_log))
        .status();
    let outcome = match status {
        Ok(s) => SolverOutcome::Exited(s),
        Err(e) => {
            let message = format!("{}: {}", solver.path().display(), e);
            writeln!(launch_log, "{}", message)
                .with_context(|| format!("while writing to log file {:?}", log_file))?;
            SolverOutcome::LaunchFailed(message)
        }
    };
    Ok(SolverRun {
        outcome,
        log_file,
        elapsed: start_time.elapsed(),
    })
}
