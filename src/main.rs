use std::process::ExitCode;

use convert_img::action::cli::process_args;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_usage() => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
