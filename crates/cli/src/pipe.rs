//! Command execution over arguments and stdin.

use std::io::{self, BufRead, Write};

use consolemock_executor::{Command, Executor};

use crate::format::{format_invalid, format_result, OutputMode};

/// Decode and run one JSON command, returning the formatted line and
/// whether it succeeded.
pub fn run_line(executor: &mut Executor, line: &str, mode: OutputMode) -> (String, bool) {
    match serde_json::from_str::<Command>(line) {
        Ok(cmd) => {
            let result = executor.execute(cmd);
            let ok = result.is_ok();
            (format_result(&result, mode), ok)
        }
        Err(e) => (format_invalid(&e.to_string(), mode), false),
    }
}

/// Run each argument as a command.
pub fn run_args<'a>(
    executor: &mut Executor,
    commands: impl IntoIterator<Item = &'a String>,
    mode: OutputMode,
) -> i32 {
    let mut exit_code = 0;
    for line in commands {
        let (formatted, ok) = run_line(executor, line, mode);
        println!("{}", formatted);
        if !ok {
            exit_code = 1;
        }
    }
    exit_code
}

/// Read commands from stdin, one per line.
pub fn run_pipe(executor: &mut Executor, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_lines(executor, stdin.lock(), &mut stdout.lock(), mode)
}

/// Run one command per input line, writing one result line each.
///
/// Blank lines and lines starting with `#` are skipped. A line that is not
/// valid UTF-8 yields an `InvalidCommand` result and reading continues; a
/// read or write failure stops the run. Either way the exit code is 1.
pub fn run_lines<B: BufRead, W: Write>(
    executor: &mut Executor,
    mut input: B,
    out: &mut W,
    mode: OutputMode,
) -> i32 {
    let mut exit_code = 0;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(e) => {
                eprintln!("(error) reading input: {}", e);
                return 1;
            }
        }

        let (formatted, ok) = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                run_line(executor, trimmed, mode)
            }
            Err(e) => {
                eprintln!("(error) line {} is not valid UTF-8", line_no);
                (
                    format_invalid(&format!("line {} is not valid UTF-8: {}", line_no, e), mode),
                    false,
                )
            }
        };

        if let Err(e) = writeln!(out, "{}", formatted) {
            eprintln!("(error) writing output: {}", e);
            return 1;
        }
        if !ok {
            exit_code = 1;
        }
    }

    exit_code
}
