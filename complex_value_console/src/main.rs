#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
//! Interactive console for complex number arithmetic
//!
//! Prompts for two complex numbers component by component, prints the
//! result of the four arithmetic operators, then parses one number from
//! its canonical `"a + bi"` form. Each read is raced against a 7-second
//! timeout by a background reader thread; a timed-out prompt is asked
//! again.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use complex_value::ComplexValue;

/// How long a single prompt waits for a line of input
const READ_TIMEOUT: Duration = Duration::from_secs(7);

/// Outcome of a single timed read
enum ReadOutcome {
    Line(String),
    TimedOut,
    Eof,
}

/// Background stdin reader feeding lines through a channel, so a prompt
/// can give up after [`READ_TIMEOUT`] without blocking the program.
struct LineReader {
    lines: Receiver<String>,
}

impl LineReader {
    fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }

    fn read_line(&self, timeout: Duration) -> ReadOutcome {
        match self.lines.recv_timeout(timeout) {
            Ok(line) => ReadOutcome::Line(line),
            Err(RecvTimeoutError::Timeout) => ReadOutcome::TimedOut,
            Err(RecvTimeoutError::Disconnected) => ReadOutcome::Eof,
        }
    }
}

fn flush_stdout() {
    let _ = io::stdout().flush();
}

/// Prompt until a valid number arrives. `None` means stdin closed.
fn read_f64(reader: &LineReader, prompt: &str) -> Option<f64> {
    loop {
        println!("{}", prompt);
        flush_stdout();
        match reader.read_line(READ_TIMEOUT) {
            ReadOutcome::Line(line) => match line.trim().parse::<f64>() {
                Ok(value) => return Some(value),
                Err(_) => println!("Invalid input. Please enter a number."),
            },
            ReadOutcome::TimedOut => println!("Input timed out. Please try again."),
            ReadOutcome::Eof => return None,
        }
    }
}

/// Read one complex number component by component
fn read_complex(reader: &LineReader, ordinal: &str) -> Option<ComplexValue> {
    let real = read_f64(
        reader,
        &format!("Enter the real part of the {} complex number:", ordinal),
    )?;
    let imaginary = read_f64(
        reader,
        &format!("Enter the imaginary part of the {} complex number:", ordinal),
    )?;
    Some(ComplexValue::from_rectangular(real, imaginary))
}

fn main() {
    let reader = LineReader::spawn();

    let Some(a) = read_complex(&reader, "first") else {
        return;
    };
    let Some(b) = read_complex(&reader, "second") else {
        return;
    };

    println!("Sum: {}", a + b);
    println!("Difference: {}", a - b);
    println!("Product: {}", a * b);
    println!("Quotient: {}", a / b);

    println!("Enter a complex number in the format 'a + bi':");
    flush_stdout();
    match reader.read_line(READ_TIMEOUT) {
        ReadOutcome::Line(line) => match ComplexValue::parse(&line) {
            Ok(parsed) => println!("Parsed: {}", parsed),
            Err(err) => println!("Error: {}", err),
        },
        ReadOutcome::TimedOut => println!("Input timed out."),
        ReadOutcome::Eof => {}
    }
}
