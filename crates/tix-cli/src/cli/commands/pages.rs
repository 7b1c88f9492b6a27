//! Listing commands for the static content.

use anyhow::Result;
use comfy_table::Table;
use tix_core::content;

/// Prints the event listing as a table.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn events() -> Result<()> {
    let mut table = Table::new();
    table.set_header(["Event", "Venue", "City", "Date", "Price"]);
    for event in content::events() {
        table.add_row([event.name, event.venue, event.city, event.date, event.price]);
    }
    println!("{table}");
    Ok(())
}

/// Prints the partner hotel listing as a table.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn hotels() -> Result<()> {
    let mut table = Table::new();
    table.set_header(["Hotel", "City", "Location", "Rate"]);
    for hotel in content::hotels() {
        table.add_row([hotel.name, hotel.city, hotel.distance, hotel.rate]);
    }
    println!("{table}");
    Ok(())
}
