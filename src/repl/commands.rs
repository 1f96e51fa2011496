//! Command parsing and handlers for the interactive prompt.
//!
//! The dispatcher owns everything textual: tokenizing input lines, mapping
//! the leading token to a command, re-validating argument counts, and
//! rendering engine results and errors as one-line `///` replies. Engine
//! operations are never trusted to have pre-validated arguments; every
//! handler checks its own.

use crate::book::{AddOutcome, AddressBook};
use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate, Weekday};

/// Prompt printed before each input line.
pub const PROMPT: &str = "/// ---> ";

/// Days covered by the birthdays digest.
const BIRTHDAY_HORIZON_DAYS: i64 = 7;

const INVALID_COMMAND: &str = "/// Invalid command. Type \"help\" to show all commands.";

const HELP_INFO: &str = r#"/// Commands:
/// "add [name] [phone] [birthday]" - Add a contact to the address book. Birthday is optional.
/// "changephone [name] [old_phone] [new_phone]" or "cp [name] [old_phone] [new_phone]" - Change the phone number for a contact.
/// "changebirthdate [name] [new_date]" or "cb [name] [new_date]" - Change the birthdate for a contact.
/// "showcontacts all" or "sc all" - Show all contacts.
/// "showcontacts [page_number]" or "sc [page_number]" - Show contacts page by page. Enter 'all' to show all contacts at once.
/// "find [search_text]" - Search for contacts by name or phone number.
/// "birthdays" or "bd" - Show birthdays for the next week.
/// "exit", "bye", "good bye", "close", "quit", "q" - Turn off the assistant."#;

/// A recognized command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    ChangePhone,
    ChangeBirthday,
    ShowContacts,
    Find,
    Birthdays,
    Exit,
    Unknown,
}

/// Split an input line into its command and argument tokens.
///
/// Matching on the leading token is case-insensitive; arguments are
/// passed through untouched. `good bye` is the one two-word exit form.
pub fn parse(line: &str) -> (Command, Vec<&str>) {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return (Command::Unknown, Vec::new());
    };
    let args: Vec<&str> = tokens.collect();

    let command = match head.to_lowercase().as_str() {
        "hello" | "hi" => Command::Hello,
        "help" => Command::Help,
        "add" | "+" | "plus" => Command::Add,
        "changephone" | "cp" => Command::ChangePhone,
        "changebirthdate" | "cb" => Command::ChangeBirthday,
        "showcontacts" | "sc" => Command::ShowContacts,
        "find" => Command::Find,
        "birthdays" | "bd" => Command::Birthdays,
        "bye" | "exit" | "break" | "close" | "quit" | "q" => Command::Exit,
        "good" if args.first().map(|a| a.eq_ignore_ascii_case("bye")) == Some(true) => {
            Command::Exit
        }
        _ => Command::Unknown,
    };

    (command, args)
}

/// Run a command against the book, producing the reply text.
pub fn execute(command: Command, args: &[&str], book: &mut AddressBook, page_size: usize) -> String {
    execute_at(command, args, book, page_size, Local::now().date_naive())
}

/// [`execute`] with an explicit anchor date for day counts.
pub fn execute_at(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    page_size: usize,
    today: NaiveDate,
) -> String {
    match command {
        Command::Hello => "/// How can I help you?".to_string(),
        Command::Help => HELP_INFO.to_string(),
        Command::Add => add(book, args),
        Command::ChangePhone => change_phone(book, args),
        Command::ChangeBirthday => change_birthday(book, args),
        Command::ShowContacts => show_contacts(book, args, page_size, today),
        Command::Find => find(book, args, today),
        Command::Birthdays => birthdays(book, today),
        Command::Exit => "/// Good bye!".to_string(),
        Command::Unknown => INVALID_COMMAND.to_string(),
    }
}

fn reject(err: ValidationError) -> String {
    format!("/// {err}")
}

fn add(book: &mut AddressBook, args: &[&str]) -> String {
    if args.len() < 2 {
        return "/// Invalid command. Please provide name and phone.".to_string();
    }

    let name = match Name::new(args[0]) {
        Ok(name) => name,
        Err(err) => return reject(err),
    };
    let phone = match Phone::new(args[1]) {
        Ok(phone) => phone,
        Err(err) => return reject(err),
    };
    let birthday = match args.get(2) {
        Some(text) => match Birthday::parse(text) {
            Ok(birthday) => Some(birthday),
            Err(err) => return reject(err),
        },
        None => None,
    };

    let rendered_name = name.as_str().to_string();
    let rendered_phone = phone.as_str().to_string();

    match book.add_record(name, phone, birthday) {
        AddOutcome::Created => {
            format!("/// Contact {rendered_name}: {rendered_phone} added successfully")
        }
        AddOutcome::Updated => {
            format!("/// Contact {rendered_name}: {rendered_phone} updated successfully")
        }
    }
}

fn change_phone(book: &mut AddressBook, args: &[&str]) -> String {
    if args.len() < 3 {
        return "/// Invalid command. Please provide name, old phone, and new phone.".to_string();
    }

    let name = args[0];
    let old = match Phone::new(args[1]) {
        Ok(phone) => phone,
        Err(err) => return reject(err),
    };
    let new = match Phone::new(args[2]) {
        Ok(phone) => phone,
        Err(err) => return reject(err),
    };

    match book.change_phone(name, &old, &new) {
        Ok(()) => format!("/// Phone number changed from {old} to {new} for contact {name}"),
        Err(err) => format!("/// {err}"),
    }
}

fn change_birthday(book: &mut AddressBook, args: &[&str]) -> String {
    if args.len() < 2 {
        return "/// Invalid command. Please provide name and new birthdate (in the format 'dd.mm.yyyy')."
            .to_string();
    }

    let name = args[0];
    let birthday = match Birthday::parse(args[1]) {
        Ok(birthday) => birthday,
        Err(err) => return reject(err),
    };

    match book.set_birthday(name, birthday) {
        Ok(()) => format!("/// Birthdate changed to {birthday} for contact {name}"),
        Err(err) => format!("/// {err}"),
    }
}

fn show_contacts(book: &AddressBook, args: &[&str], page_size: usize, today: NaiveDate) -> String {
    let Some(selector) = args.first() else {
        return "/// Invalid command. Please provide the page number or 'all'.".to_string();
    };

    if selector.eq_ignore_ascii_case("all") {
        if book.is_empty() {
            return "/// No contacts found in the address book.".to_string();
        }
        let mut out = vec!["/// Contacts List:".to_string()];
        for (i, record) in book.iter().enumerate() {
            out.push(format!("/// {}. {}", i + 1, record.render_at(today)));
        }
        return out.join("\n");
    }

    let Ok(number) = selector.parse::<usize>() else {
        return "/// Invalid input. Please provide the page number or 'all'.".to_string();
    };

    match book.page(number, page_size) {
        Ok(page) => {
            let mut out = vec![format!(
                "/// --- Contacts Page {}/{} ---",
                page.number, page.total
            )];
            for (i, record) in page.records.iter().enumerate() {
                out.push(format!(
                    "/// {}. {}",
                    page.offset + i + 1,
                    record.render_at(today)
                ));
            }
            out.push(format!(
                "/// ---  End of Page {}/{}  ---",
                page.number, page.total
            ));
            out.join("\n")
        }
        Err(err) => format!("/// {err}"),
    }
}

fn find(book: &AddressBook, args: &[&str], today: NaiveDate) -> String {
    let Some(text) = args.first() else {
        return "/// Invalid command. Please provide the search text.".to_string();
    };

    let hits = book.search(text);
    if hits.is_empty() {
        return format!("/// No contacts found matching '{text}'.");
    }

    let mut out = vec![format!("/// Search results for '{text}':")];
    for record in hits {
        out.push(format!("/// {}", record.render_at(today)));
    }
    out.join("\n")
}

fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let digest = book.upcoming_birthdays(today, BIRTHDAY_HORIZON_DAYS);
    if digest.is_empty() {
        return "/// No birthdays next week.".to_string();
    }

    digest
        .into_iter()
        .map(|(weekday, names)| format!("/// {}: {}", weekday_name(weekday), names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
