//! The interactive prompt loop.
//!
//! Reads one line at a time, dispatches it through [`commands`], and prints
//! the reply. The loop owns no state beyond the borrowed book; loading and
//! saving happen around this call, in `main`.

pub mod commands;

use crate::book::AddressBook;
use commands::Command;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the prompt loop until an exit command or end of input.
pub fn run(
    book: &mut AddressBook,
    page_size: usize,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", commands::PROMPT)?;
        output.flush()?;

        // end of input behaves like an exit command
        let Some(line) = lines.next() else {
            writeln!(output, "/// Good bye!")?;
            return Ok(());
        };
        let line = line?;

        let (command, args) = commands::parse(&line);
        debug!(?command, "dispatching");
        let reply = commands::execute(command, &args, book, page_size);
        writeln!(output, "{reply}")?;

        if command == Command::Exit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(book: &mut AddressBook, script: &str) -> String {
        let mut output = Vec::new();
        run(book, 5, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_adds_and_exits() {
        let mut book = AddressBook::new();
        let transcript = session(&mut book, "add Ada 5551234567\nexit\n");

        assert!(transcript.contains("/// Contact Ada: 5551234567 added successfully"));
        assert!(transcript.ends_with("/// Good bye!\n"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_session_stops_at_exit() {
        let mut book = AddressBook::new();
        let transcript = session(&mut book, "q\nadd Ada 5551234567\n");

        assert!(transcript.contains("/// Good bye!"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_session_handles_end_of_input() {
        let mut book = AddressBook::new();
        let transcript = session(&mut book, "hello\n");

        assert!(transcript.contains("/// How can I help you?"));
        assert!(transcript.ends_with("/// Good bye!\n"));
    }

    #[test]
    fn test_session_reports_unknown_command() {
        let mut book = AddressBook::new();
        let transcript = session(&mut book, "frobnicate\nexit\n");

        assert!(transcript.contains("/// Invalid command."));
    }
}
