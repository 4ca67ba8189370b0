//! Command line arguments for the editor binary

use crate::core::errors::EditorResult;
use crate::core::settings::EditorSettings;
use crate::editing::commands::EditCommand;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// command line arguments for working with question documents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// display debug information
    #[arg(long, default_value_t = false, global = true)]
    pub debug: bool,

    /// JSON file overriding grid and undo settings
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Parse a document and write it back with recomputed layout
    Normalize {
        /// document to read, stdin when omitted
        input: Option<PathBuf>,
        /// where to write the result, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the question, its zones and the unassigned pool
    Inspect {
        /// document to read, stdin when omitted
        input: Option<PathBuf>,
    },
    /// Apply edit commands in order, e.g. `add-zone assign=zone-2:item-1`
    Edit {
        /// document to start from, an empty one when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// where to write the result, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// commands to apply
        #[arg(required = true)]
        commands: Vec<EditCommand>,
    },
    /// Print the grid rectangles for a number of zones
    Layout {
        /// how many zones to lay out
        count: usize,
    },
}

impl CliArgs {
    /// Load the settings file if one was given
    pub fn load_settings(&self) -> EditorResult<EditorSettings> {
        match &self.settings {
            Some(path) => EditorSettings::load_from_file(path),
            None => Ok(EditorSettings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_commands_parse_from_arguments() {
        let args = CliArgs::try_parse_from([
            "drag-question-editor",
            "edit",
            "add-item=A",
            "add-zone",
            "assign=zone-2:item-1",
        ])
        .expect("Arguments should parse");

        match args.command {
            CliCommand::Edit { commands, input, .. } => {
                assert_eq!(commands.len(), 3);
                assert_eq!(commands[1], EditCommand::AddZone);
                assert!(input.is_none());
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn edit_reads_input_from_flag() {
        let args = CliArgs::try_parse_from([
            "drag-question-editor",
            "edit",
            "-i",
            "question.json",
            "add-zone",
        ])
        .expect("Arguments should parse");

        match args.command {
            CliCommand::Edit { commands, input, .. } => {
                assert_eq!(input, Some(PathBuf::from("question.json")));
                assert_eq!(commands, vec![EditCommand::AddZone]);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_edit_command_is_rejected() {
        let result =
            CliArgs::try_parse_from(["drag-question-editor", "edit", "explode"]);
        assert!(result.is_err());
    }

    #[test]
    fn settings_default_without_file() {
        let args = CliArgs::try_parse_from(["drag-question-editor", "layout", "3"])
            .expect("Arguments should parse");
        assert_eq!(
            args.load_settings().expect("Default settings"),
            EditorSettings::default()
        );
    }
}
