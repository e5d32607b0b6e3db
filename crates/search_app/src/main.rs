use std::process::ExitCode;

fn main() -> ExitCode {
    match search_app::run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("search_app: {err}");
            ExitCode::FAILURE
        }
    }
}
