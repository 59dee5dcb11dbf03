use std::io::{self, BufRead, Write};

use super::Console;
use crate::models::Inventory;

const HEADER: &str = "======= The Current Inventory: =======";
const COLUMNS: &str = "ID\tCD Title (by: Artist)";
const FOOTER: &str = "======================================";

/// Build the inventory table: header, one row per record in order, footer.
pub fn render_inventory(inventory: &Inventory) -> String {
    let mut table = format!("{HEADER}\n{COLUMNS}\n\n");
    for record in inventory {
        table.push_str(&format!("{record}\n"));
    }
    table.push_str(FOOTER);
    table
}

pub fn show_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    console.println(&render_inventory(inventory))
}
