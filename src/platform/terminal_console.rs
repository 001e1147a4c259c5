use crate::interface::console::Console;
use crate::model::relative_path::RelativePath;
use std::io::{self, BufRead, Write};

/// Progress lines on stdout, replace prompts answered on stdin.
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn entering_directory(&self, path: &RelativePath) {
        println!("Entering directory {path}");
    }

    fn uploading(&self, filename: &str) {
        println!("Uploading {filename}");
    }

    fn confirm_replace(&self, filename: &str) -> bool {
        print!("Replace {filename}? [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}

/// Anything starting with `y` or `Y` confirms; the default is no.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|first| first.eq_ignore_ascii_case(&'y'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Yes\n"));
        assert!(is_affirmative("  yep"));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
    }
}
