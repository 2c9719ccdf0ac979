use crate::error::Result;
use dialoguer::{Confirm, Input, Password, Select};
use std::io::{BufRead, Write};

/// The prompts the ATM screens need from a terminal.
///
/// Every prompt returns `None` when the customer walks away: end of input on
/// a piped stream, or escape on an interactive menu.
pub trait Terminal {
    fn input(&mut self, prompt: &str) -> Result<Option<String>>;
    /// Like `input`, without echoing what is typed where that is possible.
    fn secret(&mut self, prompt: &str) -> Result<Option<String>>;
    /// Returns the zero-based index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>>;
    /// Shows a titled message box.
    fn show(&mut self, title: &str, message: &str) -> Result<()>;
}

fn notice(title: &str, message: &str) -> String {
    if message.contains('\n') {
        format!("[{title}]\n{message}")
    } else {
        format!("[{title}] {message}")
    }
}

/// Interactive terminal backed by `dialoguer`, used when stdin is a TTY.
#[derive(Debug, Default)]
pub struct DialoguerTerminal;

impl DialoguerTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for DialoguerTerminal {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }

    fn secret(&mut self, prompt: &str) -> Result<Option<String>> {
        let value = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(Some(value))
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact_opt()?)
    }

    fn show(&mut self, title: &str, message: &str) -> Result<()> {
        println!("{}", notice(title, message));
        Ok(())
    }
}

/// Line-oriented terminal over any reader/writer pair.
///
/// Used for piped stdin and in tests. Menus are numbered from 1 and answered
/// by number; an empty answer or `q` leaves the menu.
pub struct LineTerminal<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn input(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }

    fn secret(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        writeln!(self.output, "{prompt}:")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}) {item}", i + 1)?;
        }

        loop {
            let Some(answer) = self.read_line("Choice")? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    items.len()
                )?,
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.read_line(&format!("{prompt} [y/n]"))? else {
                return Ok(None);
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn show(&mut self, title: &str, message: &str) -> Result<()> {
        writeln!(self.output, "{}", notice(title, message))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_strips_line_ending() {
        let mut out = Vec::new();
        let mut terminal = LineTerminal::new("A1\r\n1234\n".as_bytes(), &mut out);

        assert_eq!(terminal.input("Account").unwrap(), Some("A1".to_string()));
        assert_eq!(terminal.secret("PIN").unwrap(), Some("1234".to_string()));
        assert_eq!(terminal.input("Again").unwrap(), None);
    }

    #[test]
    fn test_select_retries_until_valid() {
        let mut out = Vec::new();
        let items = vec!["50 TL".to_string(), "Custom Amount".to_string()];
        let mut terminal = LineTerminal::new("7\nabc\n2\n".as_bytes(), &mut out);

        assert_eq!(terminal.select("Pick", &items).unwrap(), Some(1));
        drop(terminal);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  1) 50 TL"));
        assert!(text.contains("  2) Custom Amount"));
        assert_eq!(text.matches("Please enter a number between 1 and 2.").count(), 2);
    }

    #[test]
    fn test_select_can_be_left() {
        let items = vec!["50 TL".to_string()];

        let mut out = Vec::new();
        let mut terminal = LineTerminal::new("q\n".as_bytes(), &mut out);
        assert_eq!(terminal.select("Pick", &items).unwrap(), None);

        let mut out = Vec::new();
        let mut terminal = LineTerminal::new("".as_bytes(), &mut out);
        assert_eq!(terminal.select("Pick", &items).unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut out = Vec::new();
        let mut terminal = LineTerminal::new("maybe\nY\nno\n".as_bytes(), &mut out);

        assert_eq!(terminal.confirm("Again?").unwrap(), Some(true));
        assert_eq!(terminal.confirm("Again?").unwrap(), Some(false));
        assert_eq!(terminal.confirm("Again?").unwrap(), None);
    }

    #[test]
    fn test_show() {
        let mut out = Vec::new();
        let mut terminal = LineTerminal::new("".as_bytes(), &mut out);
        terminal.show("Login Failed", "Incorrect PIN.").unwrap();
        terminal.show("Receipt", "line one\nline two").unwrap();
        drop(terminal);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Login Failed] Incorrect PIN.\n[Receipt]\nline one\nline two\n"
        );
    }
}
