use std::io::{
    self,
    BufRead,
    Write
};

use log::debug;
use thiserror::Error;

use crate::configuration::Configuration;
use crate::parallel::coordinator::calculate_pi;
use crate::parallel::coordinatorerror::CoordinatorError;
use crate::report::PiReport;

pub const PROMPT: &str = "Podaj liczbe watkow (1-50): ";
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error)
}

/// Reads a thread count the way a formatted integer extraction does: leading
/// whitespace is skipped, an optional sign and the leading digits are taken,
/// and anything else is ignored. No digits gives 0; overflow saturates.
pub fn parse_thread_count(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let sign_len = match trimmed.chars().next() {
        Some('+') | Some('-') => 1,
        _ => 0
    };
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return 0;
    }
    let number = &trimmed[..sign_len + digits_len];
    number.parse::<i64>().unwrap_or(if number.starts_with('-') { i64::MIN } else { i64::MAX })
}

// Blank lines are skipped like any other whitespace; end of input reads as 0.
fn read_thread_count<R>(input: &mut R) -> io::Result<i64>
    where R: BufRead {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(0);
        }
        if !line.trim().is_empty() {
            return Ok(parse_thread_count(&line));
        }
    }
}

/// One interactive run: prompt, read, validate, integrate, report.
///
/// Returns the process exit status. A thread count outside 1-50 writes the
/// range message to `err` and yields [`EXIT_FAILURE`].
pub fn run_session<R, W, E>(total_intervals: u64,
                            input: &mut R,
                            out: &mut W,
                            err: &mut E) -> Result<u8, SessionError>
    where R: BufRead, W: Write, E: Write {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let raw = read_thread_count(input)?;
    let config = match Configuration::from_thread_count(total_intervals, raw) {
        Ok(config) => config,
        Err(error) => {
            debug!("rejected thread count {}: {:?}", raw, error);
            writeln!(err, "{}", error)?;
            err.flush()?;
            return Ok(EXIT_FAILURE);
        }
    };

    let estimate = calculate_pi(config.total_intervals(), config.num_threads())?;
    write!(out, "{}", PiReport::new(&estimate))?;
    out.flush()?;
    Ok(EXIT_SUCCESS)
}
