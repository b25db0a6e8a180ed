//! Line-oriented input helpers for the menu.
//!
//! Every helper re-prompts until it gets acceptable input. End of input is not acceptable
//! input: it surfaces as [`BookError::InputClosed`] so the menu can wind the session down.

use addrbook::error::{BookError, Result};
use addrbook::model::ContactType;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes text as-is, for the menu's own output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BookError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// One line, possibly empty, with the line terminator removed.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.next_line()
    }

    /// A line with at least one non-whitespace character, trimmed.
    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            self.say("Input was blank. Try again.\n")?;
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Enter a valid integer.\n")?,
            }
        }
    }

    pub fn read_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let value = self.read_int(prompt)?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say(&format!("Please enter a number between {} and {}.\n", min, max))?;
        }
    }

    /// A contact id. Anything outside the id range can never match, so it maps to 0.
    pub fn read_contact_id(&mut self) -> Result<u32> {
        let value = self.read_int("Enter Contact ID: ")?;
        Ok(u32::try_from(value).unwrap_or(0))
    }

    /// Accepts `y`/`Y` or `n`/`N` only.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let question = format!("{} (y/n): ", prompt);
        loop {
            let line = self.read_line(&question)?;
            match line.trim() {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                _ => self.say("Please enter y or n.\n")?,
            }
        }
    }

    pub fn pause(&mut self) -> Result<()> {
        self.say("\nPress ENTER to continue...")?;
        self.next_line().map(|_| ())
    }

    /// Numbered type picker, 1 to 4.
    pub fn pick_type(&mut self) -> Result<ContactType> {
        let mut menu = String::from("\nSelect Contact Type:\n");
        for (i, kind) in ContactType::ALL.iter().enumerate() {
            menu.push_str(&format!("{}) {}\n", i + 1, kind));
        }
        self.say(&menu)?;
        let choice = self.read_int_in_range("Enter choice (1-4): ", 1, 4)?;
        // the range check above keeps this a valid ordinal
        Ok(ContactType::from_ordinal(choice as u32).unwrap_or_default())
    }

    /// Type prompt for edits: blank keeps the current type.
    pub fn pick_type_or_keep(&mut self, current: ContactType) -> Result<Option<ContactType>> {
        let prompt = format!(
            "\nNew Type (1=Person, 2=Business, 3=Vendor, 4=Emergency) [Current: {}]: ",
            current
        );
        loop {
            let line = self.read_line(&prompt)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<u32>().ok().and_then(ContactType::from_ordinal) {
                Some(kind) => return Ok(Some(kind)),
                None => self.say("Please enter a number between 1 and 4.\n")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
