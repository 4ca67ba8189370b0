// Command line host for drag-and-drop question documents.

use anyhow::Result;
use clap::Parser;
use drag_question_editor::core::cli::{CliArgs, CliCommand};
use drag_question_editor::core::errors::EditorContext;
use drag_question_editor::logger::init_logger;
use drag_question_editor::{
    parse_document, serialize_document, Document, EditCommand, EditorSession,
    EditorSettings,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_logger(cli_args.debug);

    let settings = cli_args.load_settings()?;
    match cli_args.command {
        CliCommand::Normalize { input, output } => {
            let value = read_value(input.as_deref())?;
            let doc = parse_document(&value, &settings.grid);
            write_value(output.as_deref(), &serialize_document(&doc))
        }
        CliCommand::Inspect { input } => {
            let value = read_value(input.as_deref())?;
            let doc = parse_document(&value, &settings.grid);
            print_summary(&doc);
            Ok(())
        }
        CliCommand::Edit {
            input,
            output,
            commands,
        } => {
            let value = match input {
                Some(path) => read_value(Some(path.as_path()))?,
                None => String::new(),
            };
            let value = run_edits(&value, settings, &commands)?;
            write_value(output.as_deref(), &value)
        }
        CliCommand::Layout { count } => {
            for index in 0..count {
                let cell = settings.grid.cell(index);
                let rect = settings.grid.rect_for(index);
                println!(
                    "zone {:>3}  row {:>2} col {}  x {:>6.2} y {:>6.2} w {:>6.2} h {:>6.2}",
                    index + 1,
                    cell.row,
                    cell.column,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height
                );
            }
            Ok(())
        }
    }
}

fn run_edits(
    value: &str,
    settings: EditorSettings,
    commands: &[EditCommand],
) -> Result<String> {
    let mut session = EditorSession::new(value, settings);
    session.set_on_change(|value| {
        log::debug!("Document is now {} bytes", value.len());
    });
    for command in commands {
        session.apply(command)?;
    }
    Ok(session.value())
}

fn read_value(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            Ok(fs::read_to_string(path).with_file_context("read", path)?)
        }
        None => {
            let mut value = String::new();
            io::stdin()
                .read_to_string(&mut value)
                .with_file_context("read", PathBuf::from("<stdin>"))?;
            Ok(value)
        }
    }
}

fn write_value(path: Option<&Path>, value: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, value).with_file_context("write", path)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{value}")?;
        }
    }
    Ok(())
}

fn print_summary(doc: &Document) {
    if doc.is_empty() {
        println!("(empty document)");
        return;
    }

    println!("Question: {}", doc.question());
    for (index, zone) in doc.zones().iter().enumerate() {
        let cell = doc.grid().cell(index);
        println!(
            "[{}] {} (row {}, col {}; x {:.2} y {:.2} w {:.2} h {:.2})",
            zone.id,
            zone.label,
            cell.row,
            cell.column,
            zone.x,
            zone.y,
            zone.width,
            zone.height
        );
        for item in doc.items_in_zone(&zone.id) {
            println!("    [{}] {}", item.id, item.display_text());
        }
    }

    let pool: Vec<_> = doc.unassigned_items().collect();
    println!("Unassigned ({}):", pool.len());
    for item in pool {
        println!("    [{}] {}", item.id, item.display_text());
    }
}
