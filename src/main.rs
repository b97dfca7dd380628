use std::process::ExitCode;

use marquee::core::output;

fn main() -> ExitCode {
    match marquee::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
