/// Interactive menus and the one-shot command mode of the `chemseq` binary
pub mod cli_commands;
pub mod cli_examples;
mod cli_input;
pub mod cli_main;
pub mod cli_molecule;
pub mod cli_sequence;
mod render;
