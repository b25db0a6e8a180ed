//! Load and save. Backend failures come back as error messages so an interactive session
//! can keep going.

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Backend;
use log::error;

pub fn load<B: Backend>(book: &mut AddressBook<B>) -> Result<CmdResult> {
    let location = book.location();
    let mut result = CmdResult::default();

    match book.load() {
        Ok(report) if !report.found => {
            result.add_message(CmdMessage::info(
                "No existing file found. Starting with an empty address book.",
            ));
        }
        Ok(report) => {
            for skipped in &report.skipped {
                result.add_message(CmdMessage::warning(format!(
                    "Skipped line {}: {}",
                    skipped.line_no, skipped.reason
                )));
            }
            result.add_message(CmdMessage::success(format!(
                "Loaded {} contacts from {}",
                report.loaded, location
            )));
        }
        Err(e) => {
            error!("load from {} failed: {}", location, e);
            result.add_message(CmdMessage::error(format!(
                "Error: Could not open {}: {}",
                location, e
            )));
        }
    }

    Ok(result)
}

pub fn save<B: Backend>(book: &mut AddressBook<B>) -> Result<CmdResult> {
    let location = book.location();
    let message = match book.save() {
        Ok(count) => CmdMessage::success(format!("Saved {} contacts to {}", count, location)),
        Err(e) => {
            error!("save to {} failed: {}", location, e);
            CmdMessage::error(format!("Error: Could not save {}: {}", location, e))
        }
    };
    Ok(CmdResult::default().with_message(message))
}
