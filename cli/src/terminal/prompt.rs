use std::io::{self, BufRead, Write};

use colored::*;

use crate::terminal::print;

/// Prints a prompt label and reads one trimmed line from stdin.
/// `None` means stdin reached EOF.
pub fn read_line(label: &str) -> anyhow::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{} ", format!("{label}:").bright_green().bold())?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Asks a yes/no question until an answer parses. EOF counts as no.
pub fn confirm(label: &str) -> anyhow::Result<bool> {
    loop {
        let Some(answer) = read_line(&format!("{label} (yes/no)"))? else {
            return Ok(false);
        };

        match answer.to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" | "" => return Ok(false),
            _ => print::print_status("Please answer 'yes' or 'no'."),
        }
    }
}
