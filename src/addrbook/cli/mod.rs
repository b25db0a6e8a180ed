mod commands;
mod menu;
mod prompt;
mod render;
mod setup;

pub use commands::run;
