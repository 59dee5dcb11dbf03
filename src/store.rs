//! Mutations over the in-memory inventory. Inputs arrive already validated by
//! the console layer, so nothing here can fail.

use log::debug;

use crate::models::{CdRecord, Inventory};

/// Append a new record to the end of the inventory. Duplicate ids are
/// accepted.
pub fn add(inventory: &mut Inventory, id: i64, title: &str, artist: &str) {
    debug!("adding CD {id} ({title} by {artist})");
    inventory.records_mut().push(CdRecord::new(id, title, artist));
}

/// Remove the first record whose id matches, keeping the order of the rest.
///
/// Returns the removed record, or `None` when no record carries that id. A
/// miss is a normal outcome rather than an error.
pub fn delete(inventory: &mut Inventory, id: i64) -> Option<CdRecord> {
    let records = inventory.records_mut();
    let position = records.iter().position(|record| record.id == id)?;
    debug!("removing CD {id} at position {position}");
    Some(records.remove(position))
}
