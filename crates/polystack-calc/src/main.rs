//! Stack-machine polynomial calculator.
//!
//! Reads instructions and polynomial literals from standard input, one
//! per line, and writes results to standard output. Diagnostics go to
//! standard error as `ERROR <line> <reason>`; a bad line is reported
//! and skipped, it never stops the run.

use std::io::{self, BufRead, Write};

use polystack_calc::{parse_line, run, PolyStack};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut stack = PolyStack::new();

    for (idx, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let result = parse_line(&line).and_then(|inst| match inst {
            Some(inst) => run(&mut stack, inst),
            None => Ok(None),
        });
        match result {
            Ok(Some(text)) => writeln!(out, "{text}")?,
            Ok(None) => {}
            Err(err) => {
                out.flush()?;
                eprintln!("ERROR {lineno} {err}");
            }
        }
    }
    out.flush()
}
