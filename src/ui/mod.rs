//! Line-oriented console I/O. Everything the user sees or types flows through
//! here; the module never touches the store or the snapshot file.

mod console;
mod menu;
mod prompts;
mod render;

pub use console::{describe_error, Console, StatusKind};
pub use menu::{print_menu, read_menu_choice, MenuChoice};
pub use prompts::{confirm, parse_id, pause, read_delete_id, read_new_record, IdParseError};
pub use render::{render_inventory, show_inventory};
