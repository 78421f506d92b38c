use std::env;
use std::process::ExitCode;

use samplerate_check::{SampleRateChecker, DEFAULT_INPUT_PATH};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let path = match args.as_slice() {
        [] => DEFAULT_INPUT_PATH,
        [path] => path.as_str(),
        _ => {
            eprintln!("usage: samplerate-check [PATH]  (default: {})", DEFAULT_INPUT_PATH);
            return ExitCode::from(2);
        }
    };

    match SampleRateChecker::default().run(path) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
