use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "check";

/// Checks a case can be run, without running it.
pub(crate) struct CheckCommand<'a> {
    usage: &'a str,
}

impl<'a> CheckCommand<'a> {
    pub(crate) fn new(usage: &'a str) -> Self {
        CheckCommand { usage }
    }
}

impl<'a> Command<'a> for CheckCommand<'a> {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks a case directory and the solver, without running the solver")
            .setting(AppSettings::DisableVersion)
            .arg(common::case_dir_arg())
            .arg(common::solver_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let case = common::open_case_dir(arg_matches, self.usage)?;
        info!("input file {:?} found", case.input_file());
        common::locate_solver(arg_matches)?;
        info!("the case is ready to run");
        Ok(())
    }
}
