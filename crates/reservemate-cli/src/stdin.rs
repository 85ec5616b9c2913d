// crates/reservemate-cli/src/stdin.rs - Line-oriented STDIN handling
//
// The shell and `exec` both read from stdin one line at a time. Prompts are
// only printed when stdin is a terminal so piped sessions produce clean
// output.

use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Write};

/// Read one line, showing `prompt` on a terminal
///
/// Returns `None` at end of input. The trailing newline is stripped.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    if io::stdin().is_terminal() {
        print!("{prompt}");
        io::stdout().flush()?;
    }

    let mut buffer = String::new();
    let read = io::stdin().lock().read_line(&mut buffer)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask a yes/no question; end of input counts as "no"
pub fn read_confirmation(prompt: &str) -> Result<bool> {
    Ok(read_line(prompt)?.is_some_and(|answer| is_yes(&answer)))
}

/// `y` or `yes`, any case
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
