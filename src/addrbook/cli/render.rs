//! Text rendering for the terminal. Every function returns a `String`; the caller decides
//! which writer it goes to.

use addrbook::book::{GroupSummary, MissingInfoReport, Preview, TypeCounts};
use addrbook::commands::{CmdMessage, MessageLevel, Report};
use addrbook::model::Contact;
use colored::Colorize;

const DETAIL_RULE_WIDTH: usize = 60;
const RESULTS_RULE_WIDTH: usize = 70;
const ENTRY_RULE_WIDTH: usize = 40;

pub fn messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn preview_line(preview: &Preview) -> String {
    format!(
        "ID: {} | Name: {} | Type: {}",
        preview.id, preview.name, preview.kind
    )
}

/// The "All Contacts" listing. An empty slice renders only the heading; the
/// accompanying message says the book is empty.
pub fn previews(previews: &[Preview]) -> String {
    let mut out = String::from("\n=== All Contacts ===\n");
    if previews.is_empty() {
        return out;
    }
    out.push_str(&format!("\nTotal contacts: {}\n\n", previews.len()));
    for preview in previews {
        out.push_str(&preview_line(preview));
        out.push('\n');
    }
    out
}

pub fn contact_detail(contact: &Contact) -> String {
    let rule = "=".repeat(DETAIL_RULE_WIDTH);
    format!("\n{}\n{}{}\n", rule, contact.details(true), rule)
}

pub fn search_results(heading: &str, contacts: &[Contact]) -> String {
    let rule = "=".repeat(RESULTS_RULE_WIDTH);
    let mut out = format!(
        "\n{rule}\nSEARCH RESULTS: {heading}\n{rule}\nFound {} contact(s)\n{}\n",
        contacts.len(),
        "-".repeat(RESULTS_RULE_WIDTH),
    );

    if contacts.is_empty() {
        out.push_str("No contacts found matching search criteria.\n");
        return out;
    }

    for (i, contact) in contacts.iter().enumerate() {
        out.push_str(&format!(
            "\nContact {} of {}\n{}\n",
            i + 1,
            contacts.len(),
            "-".repeat(ENTRY_RULE_WIDTH)
        ));
        out.push_str(&format!("ID: {}\n", contact.id()));
        out.push_str(&format!("Name: {}\n", contact.full_name()));
        out.push_str(&format!("Type: {}\n", contact.kind));
        out.push_str(&format!("Email: {}\n", contact.email));
        out.push_str(&format!("Phone: {}\n", contact.phone));
        out.push_str(&format!("City: {}\n", contact.city));
        out.push_str(&format!("State: {}\n", contact.state));
        out.push_str(&format!(
            "AddressLine and Postal Code: {} {}\n",
            contact.address_line, contact.postal_code
        ));
        if !contact.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", contact.tags.join(" | ")));
        }
        if !contact.groups.is_empty() {
            out.push_str(&format!("Groups: {}\n", contact.groups.join(" | ")));
        }
        out.push_str(&format!("Notes: {}\n", contact.notes));
    }

    out.push_str(&format!("\n{}\n", rule));
    out
}

pub fn report(report: &Report) -> String {
    match report {
        Report::MissingInfo(missing) => missing_info(missing),
        Report::TypeCounts(counts) => type_counts(counts),
        Report::Groups(groups) => group_summary(groups),
    }
}

fn missing_info(report: &MissingInfoReport) -> String {
    let mut out = String::from("\n=== Contacts Missing Information ===\n\n");
    for preview in &report.contacts {
        out.push_str(&format!(
            "ID: {} | {} | {}\n",
            preview.id, preview.name, preview.kind
        ));
    }
    out.push_str(&format!(
        "\nTotal: {} contacts missing email or phone\n",
        report.total()
    ));
    out
}

fn type_counts(counts: &TypeCounts) -> String {
    let mut out = String::from("\n=== Contact Counts by Type ===\n\n");
    for (kind, count) in &counts.counts {
        out.push_str(&format!("{}: {}\n", kind, count));
    }
    out.push_str(&format!("\nTotal contacts: {}\n", counts.total));
    out
}

fn group_summary(summary: &GroupSummary) -> String {
    let mut out = String::from("\n=== Group Summary ===\n\n");
    match summary {
        GroupSummary::NoGroups => out.push_str("No groups defined.\n"),
        GroupSummary::Groups(groups) => {
            for (name, members) in groups {
                out.push_str(&format!("{}: {} members\n", name, members));
            }
        }
    }
    out
}
