use std::ffi::OsString;

mod app;

const USAGE: &str = "run_case";

fn main() {
    let app = app::common::create_app_helper(USAGE);
    app.launch_app_with_args(translate_args_os_params());
}

/// Turns `run_case <case_directory>` into `run_case run <case_directory>`.
fn translate_args_os_params() -> Vec<OsString> {
    let mut real_args = std::env::args_os();
    let program = real_args.next().unwrap_or_else(|| USAGE.into());
    std::iter::once(program)
        .chain(std::iter::once("run".into()))
        .chain(real_args)
        .collect()
}
