use anyhow::Result;
use clap::{App, ArgMatches};

/// A subcommand of the application.
///
/// Each command declares its own CLI arguments through a clap subcommand,
/// and is executed with the matches clap produced for it.
/// Command names must be unique.
pub(crate) trait Command<'a> {
    /// Returns the name of the command, as typed on the command line.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command.
    ///
    /// Returning `Ok(())` makes the application exit with a success status code;
    /// any error makes it exit with status 1 after the error chain was logged.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
