mod app;

fn main() {
    let app = app::common::create_app_helper("case_runner run");
    app.launch_app_with_args(std::env::args_os());
}
