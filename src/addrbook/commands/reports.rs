use crate::book::AddressBook;
use crate::commands::{CmdResult, Report};
use crate::error::Result;
use crate::store::Backend;

pub fn missing_info<B: Backend>(book: &AddressBook<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_report(Report::MissingInfo(book.missing_info())))
}

pub fn counts_by_type<B: Backend>(book: &AddressBook<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_report(Report::TypeCounts(book.counts_by_type())))
}

pub fn groups<B: Backend>(book: &AddressBook<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_report(Report::Groups(book.group_summary())))
}
