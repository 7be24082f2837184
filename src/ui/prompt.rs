//! Yes/no confirmation

use crate::registry::Context;
use std::io;

/// Answer parsed from a line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Empty,
    Invalid,
}

/// Classify one line of input, ignoring case and surrounding whitespace
pub fn parse_answer(line: &str) -> Answer {
    match line.trim().to_uppercase().as_str() {
        "Y" | "YES" => Answer::Yes,
        "N" | "NO" => Answer::No,
        "" => Answer::Empty,
        _ => Answer::Invalid,
    }
}

/// Ask `prompt` until the user answers yes or no.
///
/// Returns `true` straight away when the context assumes yes. End of input
/// counts as no.
pub fn confirm(ctx: &mut Context<'_>, prompt: &str) -> io::Result<bool> {
    if ctx.assume_yes {
        return Ok(true);
    }

    let mut line = String::new();
    loop {
        write!(ctx.out, "{} (Y/N): ", prompt)?;
        ctx.out.flush()?;

        line.clear();
        if ctx.input.read_line(&mut line)? == 0 {
            writeln!(ctx.out)?;
            return Ok(false);
        }

        match parse_answer(&line) {
            Answer::Yes => return Ok(true),
            Answer::No => return Ok(false),
            Answer::Empty => writeln!(ctx.out, "Please enter 'Y' or 'N'.")?,
            Answer::Invalid => writeln!(ctx.out, "Invalid input. Please enter 'Y' or 'N'.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Command;
    use std::io::Cursor;

    fn ask(input: &str, assume_yes: bool) -> (bool, String) {
        let root = Command::new("root", "");
        let mut out: Vec<u8> = Vec::new();
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let answer = {
            let mut ctx = Context::new(&root, &mut out, &mut input).with_assume_yes(assume_yes);
            confirm(&mut ctx, "Proceed").unwrap()
        };
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Answer::Yes);
        assert_eq!(parse_answer(" Yes "), Answer::Yes);
        assert_eq!(parse_answer("no"), Answer::No);
        assert_eq!(parse_answer("\n"), Answer::Empty);
        assert_eq!(parse_answer("maybe"), Answer::Invalid);
    }

    #[test]
    fn test_confirm_yes() {
        let (answer, out) = ask("y\n", false);
        assert!(answer);
        assert_eq!(out, "Proceed (Y/N): ");
    }

    #[test]
    fn test_confirm_reprompts() {
        let (answer, out) = ask("\nmaybe\nN\n", false);
        assert!(!answer);
        assert_eq!(out.matches("Proceed (Y/N): ").count(), 3);
        assert!(out.contains("Please enter 'Y' or 'N'."));
        assert!(out.contains("Invalid input. Please enter 'Y' or 'N'."));
    }

    #[test]
    fn test_confirm_end_of_input_is_no() {
        let (answer, _) = ask("", false);
        assert!(!answer);
    }

    #[test]
    fn test_confirm_assume_yes_skips_prompt() {
        let (answer, out) = ask("", true);
        assert!(answer);
        assert!(out.is_empty());
    }
}
