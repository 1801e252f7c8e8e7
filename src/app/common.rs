use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, RunCommand,
};
use anyhow::Result;
use case_runner::{CaseDirectory, CaseError, SolverBinary};
use clap::{Arg, ArgMatches};
use log::info;
use std::path::Path;

pub(crate) fn create_app_helper(run_usage: &'static str) -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Runs an external solver on a case directory, capturing its output in log.txt.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new(run_usage)),
        Box::new(RunCommand::new(run_usage)),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_CASE_DIR: &str = "CASE_DIR";

pub(crate) fn case_dir_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_CASE_DIR)
        .index(1)
        .multiple(false)
        .help("the case directory, which must contain an input.dat file")
        .required(false)
}

pub(crate) const ARG_SOLVER: &str = "SOLVER";

pub(crate) fn solver_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_SOLVER)
        .long("solver")
        .takes_value(true)
        .empty_values(false)
        .multiple(false)
        .help("the solver to run (defaults to $CASE_RUNNER_SOLVER, then ~/solver/bin/solver)")
        .required(false)
}

/// Checks the case directory given on the command line.
///
/// A missing or empty argument is reported with the usage of the run command.
pub(crate) fn open_case_dir(arg_matches: &ArgMatches<'_>, usage: &str) -> Result<CaseDirectory> {
    let path = arg_matches
        .value_of_os(ARG_CASE_DIR)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CaseError::MissingArgument {
            program: usage.to_string(),
        })?;
    let case = CaseDirectory::open(path)?;
    info!("case directory is {:?}", case.path());
    Ok(case)
}

pub(crate) fn locate_solver(arg_matches: &ArgMatches<'_>) -> Result<SolverBinary> {
    let solver = SolverBinary::locate(arg_matches.value_of_os(ARG_SOLVER).map(Path::new))?;
    info!(
        "using solver {:?} (from {})",
        solver.path(),
        solver.origin()
    );
    Ok(solver)
}
