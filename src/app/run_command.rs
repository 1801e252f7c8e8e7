use super::{cli_manager, command::Command, common};
use anyhow::Result;
use case_runner::SolverOutcome;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{info, warn};

const CMD_NAME: &str = "run";

/// Runs the solver on a case directory.
///
/// The command succeeds as soon as the solver was invoked, whatever its exit status;
/// the solver's own failures are only visible in the log file and in the warnings of this command.
pub(crate) struct RunCommand<'a> {
    usage: &'a str,
}

impl<'a> RunCommand<'a> {
    pub(crate) fn new(usage: &'a str) -> Self {
        RunCommand { usage }
    }
}

impl<'a> Command<'a> for RunCommand<'a> {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Runs the solver on a case directory, writing its output to log.txt")
            .setting(AppSettings::DisableVersion)
            .arg(common::case_dir_arg())
            .arg(common::solver_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let case = common::open_case_dir(arg_matches, self.usage)?;
        let solver = common::locate_solver(arg_matches)?;
        info!("running solver in {:?}", case.path());
        let run = case_runner::run_case(&case, &solver)?;
        match run.outcome() {
            SolverOutcome::Exited(status) if status.success() => {
                info!("solver exited successfully after {:?}", run.elapsed())
            }
            SolverOutcome::Exited(status) => {
                warn!("solver exited with {} after {:?}", status, run.elapsed())
            }
            SolverOutcome::LaunchFailed(message) => {
                warn!("solver could not be launched: {}", message)
            }
        }
        info!("done; solver output written to {:?}", run.log_file());
        Ok(())
    }
}
