use std::io;
use std::process::ExitCode;

use env_logger::{
    Env,
    Target
};
use log::error;

use pitrapezoid::configuration::DEFAULT_TOTAL_INTERVALS;
use pitrapezoid::session::run_session;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("off"))
        .target(Target::Stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match run_session(DEFAULT_TOTAL_INTERVALS, &mut input, &mut out, &mut err) {
        Ok(code) => ExitCode::from(code),
        Err(session_error) => {
            error!("{:?}", session_error);
            eprintln!("{}", session_error);
            ExitCode::FAILURE
        }
    }
}
