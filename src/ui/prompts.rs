use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use log::debug;
use thiserror::Error;

use super::Console;

/// Why a typed ID was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdParseError {
    #[error("no ID was entered")]
    Empty,
    #[error("'{input}' is outside the supported ID range")]
    OutOfRange { input: String },
    #[error("'{input}' is not a whole number")]
    NotAWholeNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Validate an ID typed by the user. Surrounding whitespace is ignored.
pub fn parse_id(raw: &str) -> Result<i64, IdParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdParseError::Empty);
    }
    trimmed.parse::<i64>().map_err(|source| {
        let input = trimmed.to_string();
        if matches!(
            source.kind(),
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
        ) {
            IdParseError::OutOfRange { input }
        } else {
            IdParseError::NotAWholeNumber { input, source }
        }
    })
}

/// Keep asking with `prompt` until [`parse_id`] accepts the answer, printing
/// `retry_message` after every malformed answer.
fn read_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    retry_message: &str,
) -> io::Result<i64> {
    loop {
        let raw = console.read_line(prompt)?;
        match parse_id(&raw) {
            Ok(id) => return Ok(id),
            Err(IdParseError::OutOfRange { .. }) => console.println(&format!(
                "That number is too large. IDs must be between {} and {}. Please try again.",
                i64::MIN,
                i64::MAX
            ))?,
            Err(err) => {
                debug!("rejected ID input: {err}");
                console.println(retry_message)?;
            }
        }
    }
}

/// Collect the ID, title and artist for a new CD. Only the ID is validated.
pub fn read_new_record<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<(i64, String, String)> {
    let id = read_id(
        console,
        "Enter an ID number: ",
        "That value was not a number, or wasn't a whole number. Please try again.",
    )?;
    let title = console.read_line("What is the CD's title? ")?;
    let artist = console.read_line("What is the Artist's name? ")?;
    Ok((id, title, artist))
}

/// Ask which ID to delete. The ID does not have to exist in the inventory.
pub fn read_delete_id<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<i64> {
    read_id(
        console,
        "Which ID would you like to delete? ",
        "\nSorry, that didn't work. Please select an ID from your current inventory.\n",
    )
}

/// Ask a yes/no question; true only when the answer equals `accept`,
/// ignoring case.
pub fn confirm<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    accept: &str,
) -> io::Result<bool> {
    let answer = console.read_line(prompt)?;
    Ok(answer.eq_ignore_ascii_case(accept))
}

/// Wait for the user to press enter.
pub fn pause<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> io::Result<()> {
    console.read_line(prompt).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn parse_id_accepts_signed_integers() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(parse_id("  7 "), Ok(7));
        assert_eq!(parse_id("-3"), Ok(-3));
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id(""), Err(IdParseError::Empty));
        assert_eq!(parse_id("   "), Err(IdParseError::Empty));
        assert!(matches!(
            parse_id("4.5"),
            Err(IdParseError::NotAWholeNumber { .. })
        ));
        assert!(matches!(
            parse_id("abc"),
            Err(IdParseError::NotAWholeNumber { .. })
        ));
    }

    #[test]
    fn parse_id_flags_numbers_beyond_i64() {
        assert_eq!(
            parse_id("99999999999999999999"),
            Err(IdParseError::OutOfRange {
                input: "99999999999999999999".to_string()
            })
        );
        assert!(matches!(
            parse_id("-99999999999999999999"),
            Err(IdParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn oversized_id_gets_range_message() {
        let mut console = console("99999999999999999999\n12\nLow\nDavid Bowie\n");
        let (id, _, _) = read_new_record(&mut console).unwrap();
        assert_eq!(id, 12);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("That number is too large."));
        assert!(!output.contains("wasn't a whole number"));
    }

    #[test]
    fn new_record_reprompts_until_id_is_numeric() {
        let mut console = console("one\n1.5\n101\n  Thriller \nMichael Jackson\n");
        let record = read_new_record(&mut console).unwrap();
        assert_eq!(
            record,
            (101, "Thriller".to_string(), "Michael Jackson".to_string())
        );

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Please try again.").count(), 2);
    }

    #[test]
    fn title_and_artist_are_not_validated() {
        let mut console = console("5\n\n\n");
        let record = read_new_record(&mut console).unwrap();
        assert_eq!(record, (5, String::new(), String::new()));
    }

    #[test]
    fn delete_id_reprompts_until_numeric() {
        let mut console = console("x\n999\n");
        assert_eq!(read_delete_id(&mut console).unwrap(), 999);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Sorry, that didn't work."));
    }

    #[test]
    fn confirm_requires_exact_answer() {
        assert!(confirm(&mut console("YES\n"), "? ", "yes").unwrap());
        assert!(!confirm(&mut console("y\n"), "? ", "yes").unwrap());
        assert!(confirm(&mut console("y\n"), "? ", "y").unwrap());
        assert!(!confirm(&mut console("\n"), "? ", "y").unwrap());
    }
}
