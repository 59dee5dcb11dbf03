//! The menu loop. `App` owns the inventory for the whole session and hands it
//! to the store, storage and console layers as each command needs it.

use std::io::{self, BufRead, ErrorKind, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::models::Inventory;
use crate::storage::{self, LoadOutcome};
use crate::store;
use crate::ui::{
    confirm, describe_error, pause, print_menu, read_delete_id, read_menu_choice,
    read_new_record, show_inventory, Console, MenuChoice, StatusKind,
};

const EMPTY_INVENTORY_MESSAGE: &str = "Your CD inventory is empty! Try adding a CD.";

/// Whether the loop keeps going after a command.
enum Flow {
    Continue,
    Exit,
}

/// Session state: the inventory, where it is saved, and the console.
pub struct App<R, W> {
    inventory: Inventory,
    data_file: PathBuf,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Load the snapshot and build the session.
    ///
    /// A missing file starts an empty inventory. A corrupt or unreadable file
    /// aborts startup so it is never overwritten by a later save.
    pub fn start(data_file: PathBuf, mut console: Console<R, W>) -> Result<Self> {
        let outcome = storage::load(&data_file).context("failed to load CD inventory")?;
        if matches!(outcome, LoadOutcome::Missing) {
            console
                .status(StatusKind::Info, EMPTY_INVENTORY_MESSAGE)
                .context("failed to write to console")?;
        }

        Ok(Self {
            inventory: outcome.into_inventory(),
            data_file,
            console,
        })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                    info!("input closed, leaving menu");
                    break;
                }
                Err(err) => return Err(err).context("console I/O failed"),
            }
        }
        Ok(())
    }

    fn step(&mut self) -> io::Result<Flow> {
        print_menu(&mut self.console)?;
        match read_menu_choice(&mut self.console)? {
            MenuChoice::Exit => return Ok(Flow::Exit),
            MenuChoice::Load => self.reload()?,
            MenuChoice::Add => self.add()?,
            MenuChoice::Display => show_inventory(&mut self.console, &self.inventory)?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::Save => self.save()?,
        }
        Ok(Flow::Continue)
    }

    fn reload(&mut self) -> io::Result<()> {
        self.console.warn(
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.",
        )?;
        let proceed = confirm(
            &mut self.console,
            "Type 'yes' to continue and reload from file. Otherwise reload will be canceled: ",
            "yes",
        )?;

        if proceed {
            self.console.println("reloading...")?;
            match storage::load(&self.data_file) {
                Ok(LoadOutcome::Loaded(inventory)) => self.inventory = inventory,
                Ok(LoadOutcome::Missing) => {
                    self.inventory = Inventory::new();
                    self.console.status(StatusKind::Info, EMPTY_INVENTORY_MESSAGE)?;
                }
                // Corrupt and unreadable files both leave the session's data alone.
                Err(err) => {
                    warn!("reload failed, keeping in-memory inventory: {err}");
                    self.console.status(
                        StatusKind::Error,
                        &format!(
                            "Inventory NOT reloaded: {}. Your current data was kept.",
                            describe_error(&err)
                        ),
                    )?;
                }
            }
        } else {
            pause(
                &mut self.console,
                "Canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.",
            )?;
        }
        show_inventory(&mut self.console, &self.inventory)
    }

    fn add(&mut self) -> io::Result<()> {
        let (id, title, artist) = read_new_record(&mut self.console)?;
        store::add(&mut self.inventory, id, &title, &artist);
        show_inventory(&mut self.console, &self.inventory)
    }

    fn delete(&mut self) -> io::Result<()> {
        show_inventory(&mut self.console, &self.inventory)?;
        let id = read_delete_id(&mut self.console)?;
        match store::delete(&mut self.inventory, id) {
            Some(_) => self.console.status(StatusKind::Info, "The CD was removed.")?,
            None => self.console.status(StatusKind::Error, "Could not find this CD!")?,
        }
        show_inventory(&mut self.console, &self.inventory)
    }

    fn save(&mut self) -> io::Result<()> {
        show_inventory(&mut self.console, &self.inventory)?;
        if !confirm(&mut self.console, "Save this inventory to file? [y/n] ", "y")? {
            return pause(
                &mut self.console,
                "The inventory was NOT saved to file. Press [ENTER] to return to the menu.",
            );
        }

        match storage::save(&self.data_file, &self.inventory) {
            Ok(()) => self
                .console
                .status(StatusKind::Info, "Your CD inventory is saved to file now."),
            Err(err) => {
                warn!("save failed: {err}");
                self.console.status(
                    StatusKind::Error,
                    &format!("Inventory NOT saved: {}", describe_error(&err)),
                )
            }
        }
    }
}
