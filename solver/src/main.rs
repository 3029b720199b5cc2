use std::io::{BufWriter, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Answer each power network in a batch with its minimum bottleneck risk and the cheapest route cost under it.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Batch file to read; standard input when omitted or `-`.
    input: Option<PathBuf>,
}

fn read_input(path: Option<PathBuf>) -> std::io::Result<String> {
    let mut input = String::new();
    match path {
        Some(path) if path.as_os_str() != "-" => {
            input = std::fs::read_to_string(path)?;
        }
        _ => {
            std::io::stdin().lock().read_to_string(&mut input)?;
        }
    }
    Ok(input)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let input = match read_input(args.input) {
        Ok(input) => input,
        Err(error) => {
            log::error!("failed to read input: {error}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let result = stable_power::batch::run(&input, &mut output);
    // lines for cases answered before a failure still go out
    drop(output);

    match result {
        Ok(cases) => {
            log::debug!("answered {cases} cases");
            ExitCode::SUCCESS
        }
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
