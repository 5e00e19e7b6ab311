use std::{env, io, process::ExitCode};

use kpl_scanner::{driver::driver::scan_file, init_tracing};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let Some(file_path) = args.get(1) else {
        eprintln!("scanner: no input file.");
        return ExitCode::FAILURE;
    };

    let stdout = io::stdout();
    let stderr = io::stderr();

    match scan_file(file_path, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Can't read input file!");
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
