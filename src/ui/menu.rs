use std::io::{self, BufRead, Write};

use super::Console;

const MENU: &str = "Menu\n\n\
[l] Load Inventory from file\n\
[a] Add CD\n\
[i] Display Current Inventory\n\
[d] Delete CD from Inventory\n\
[s] Save Inventory to file\n\
[x] exit\n";

const CHOICE_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

/// The six commands the menu understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl MenuChoice {
    /// Match raw input case-insensitively after trimming.
    pub fn from_input(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "l" => Some(MenuChoice::Load),
            "a" => Some(MenuChoice::Add),
            "i" => Some(MenuChoice::Display),
            "d" => Some(MenuChoice::Delete),
            "s" => Some(MenuChoice::Save),
            "x" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.println(MENU)
}

/// Prompt until the user types one of the menu letters.
pub fn read_menu_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<MenuChoice> {
    loop {
        let raw = console.read_line(CHOICE_PROMPT)?;
        if let Some(choice) = MenuChoice::from_input(&raw) {
            console.println("")?;
            return Ok(choice);
        }
    }
}
