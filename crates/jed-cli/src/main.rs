//! `jed` CLI — interactive editor for JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Open a document and enter the command loop
//! jed data.json
//!
//! # With no argument, jed prompts for a file path first
//! jed
//! ```
//!
//! Commands: `open <path>` | `validate` | `print` | `search <key>` |
//! `contains <value>` | `set <path> <value>` | `create <path> <value>` |
//! `delete <path>` | `move <from> <to>` | `save [<path>]` |
//! `saveas <file> [<path>]` | `help` | `exit`
//!
//! A file that does not exist yet is created with `{}` content. Every
//! failed operation reports what went wrong and the loop continues.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use jed_core::{serialize, validate, Session};

#[derive(Parser)]
#[command(name = "jed", version, about = "Path-addressed JSON document editor")]
struct Cli {
    /// JSON file to open (prompted for interactively if omitted)
    file: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let file = match cli.file {
        Some(file) => file,
        None => {
            println!("Enter the path of the JSON file to open:");
            match read_line(&mut lines)? {
                Some(line) => line.trim().to_string(),
                None => return Ok(()),
            }
        }
    };

    let mut session = open_session(&file);
    print_help();

    loop {
        let label = session
            .as_ref()
            .map(|s| s.path().display().to_string())
            .unwrap_or_default();
        print!("[{label}] > ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = read_line(&mut lines)? else {
            break;
        };
        let line = line.trim();
        if line == "exit" {
            break;
        }
        execute(&mut session, line);
    }

    Ok(())
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read from stdin")?)),
        None => Ok(None),
    }
}

fn open_session(path: &str) -> Option<Session> {
    match Session::open(path) {
        Ok(session) => {
            println!("Loaded {}", session.path().display());
            Some(session)
        }
        Err(err) => {
            eprintln!("Could not load {path}: {err}");
            None
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  open <path> | validate | print | search <key> | contains <value>");
    println!("  set <path> <value> | create <path> <value> | delete <path>");
    println!("  move <from> <to> | save [<path>] | saveas <file> [<path>]");
    println!("  help | exit");
}

fn execute(session: &mut Option<Session>, line: &str) {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    if command.is_empty() {
        return;
    }
    if command == "help" {
        print_help();
        return;
    }
    if command == "open" {
        if rest.is_empty() {
            eprintln!("usage: open <path>");
        } else if let Some(new_session) = open_session(rest) {
            // The previous tree is dropped wholesale here.
            *session = Some(new_session);
        }
        return;
    }

    let Some(session) = session.as_mut() else {
        eprintln!("No document loaded; use 'open <path>' first.");
        return;
    };

    match command {
        "validate" => {
            if validate(session.text()) {
                println!("Valid JSON document.");
            } else {
                println!("Invalid JSON document.");
            }
        }
        "print" => println!("{}", serialize(session.root())),
        "search" => {
            if rest.is_empty() {
                eprintln!("usage: search <key>");
                return;
            }
            let hits = jed_core::search_by_key(session.root(), rest);
            println!("\"{rest}\":");
            println!("[");
            for hit in hits {
                println!("  {}", serialize(hit));
            }
            println!("]");
        }
        "contains" => {
            if rest.is_empty() {
                eprintln!("usage: contains <value>");
                return;
            }
            println!("{}", jed_core::contains(session.root(), rest));
        }
        "set" | "create" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let (Some(path), Some(value)) = (args.next(), args.next()) else {
                eprintln!("usage: {command} <path> <value>");
                return;
            };
            let result = if command == "set" {
                jed_core::set(session.root_mut(), path, value.trim())
            } else {
                jed_core::create(session.root_mut(), path, value.trim())
            };
            report(result);
        }
        "delete" => {
            if rest.is_empty() {
                eprintln!("usage: delete <path>");
                return;
            }
            report(jed_core::delete(session.root_mut(), rest));
        }
        "move" => {
            let mut args = rest.split_whitespace();
            let (Some(from), Some(to)) = (args.next(), args.next()) else {
                eprintln!("usage: move <from> <to>");
                return;
            };
            match jed_core::move_value(session.root_mut(), from, to) {
                Ok(()) => println!("Moved {from} to {to}"),
                Err(err) => eprintln!("{err}"),
            }
        }
        "save" => {
            let subpath = (!rest.is_empty()).then_some(rest);
            match session.save_path(subpath) {
                Ok(()) => println!("Saved to {}", session.path().display()),
                Err(err) => eprintln!("{err}"),
            }
        }
        "saveas" => {
            let mut args = rest.split_whitespace();
            let Some(file) = args.next() else {
                eprintln!("usage: saveas <file> [<path>]");
                return;
            };
            match session.save_as(file, args.next()) {
                Ok(()) => println!("Saved to {file}"),
                Err(err) => eprintln!("{err}"),
            }
        }
        other => eprintln!("Unknown command '{other}'; type 'help' for the list."),
    }
}

fn report(result: jed_core::Result<()>) {
    if let Err(err) = result {
        eprintln!("{err}");
    }
}
