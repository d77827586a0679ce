//! whatnext (wn) is a pocket todo list for the terminal
//!
//! - one flat list, persisted wholesale to `<name>.wn.yaml` after every change
//! - `add`, `done`, `edit`, `rm` take the list positions that `list` prints
//! - no daemon, no sync, no accounts; delete the file and the list is gone
//!
use anyhow::{anyhow, Context, Result};
use clap::{App, Arg, ArgMatches, SubCommand};

use whatnext::render::render_store;
use whatnext::{FileSlot, TodoId, TodoStore};

fn main() -> Result<()> {
    env_logger::init();
    let matches = App::new("whatnext")
        .version("0.1")
        .about("A tiny local-first todo list")
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .help("Name of the list to use (stored as <name>.wn.yaml)")
                .takes_value(true)
                .default_value("todos"),
        )
        .subcommand(
            SubCommand::with_name("add").about("Add an item").arg(
                Arg::with_name("TEXT")
                    .help("Text of the new item")
                    .required(true)
                    .multiple(true),
            ),
        )
        .subcommand(SubCommand::with_name("list").about("Show the list"))
        .subcommand(
            SubCommand::with_name("done")
                .about("Toggle an item done/undone")
                .arg(
                    Arg::with_name("POS")
                        .help("Position of the item as printed by list")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("edit")
                .about("Rewrite an item's text")
                .arg(
                    Arg::with_name("POS")
                        .help("Position of the item as printed by list")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("TEXT")
                        .help("Replacement text")
                        .required(true)
                        .multiple(true)
                        .index(2),
                ),
        )
        .subcommand(
            SubCommand::with_name("rm").about("Delete an item").arg(
                Arg::with_name("POS")
                    .help("Position of the item as printed by list")
                    .required(true)
                    .index(1),
            ),
        )
        .get_matches();

    let name = matches.value_of("file").unwrap();
    let mut store = TodoStore::load(FileSlot::new(name));

    match matches.subcommand() {
        ("add", Some(args)) => {
            store.add(&joined_text(args));
        }
        ("done", Some(args)) => {
            let id = id_at(&store, args)?;
            store.toggle_complete(id);
        }
        ("edit", Some(args)) => {
            let id = id_at(&store, args)?;
            store.begin_edit(id);
            store.edit(id, &joined_text(args));
        }
        ("rm", Some(args)) => {
            let id = id_at(&store, args)?;
            store.remove(id);
        }
        _ => {} // bare invocation and `list` both just print the list
    }

    print!("{}", render_store(&store));
    Ok(())
}

/// TEXT is declared `multiple` so unquoted words work; stitch them back.
fn joined_text(args: &ArgMatches) -> String {
    args.values_of("TEXT")
        .map(|values| values.collect::<Vec<&str>>().join(" "))
        .unwrap_or_default()
}

/// Resolves the 1-based position printed by `list` to the item's id.
fn id_at(store: &TodoStore<FileSlot>, args: &ArgMatches) -> Result<TodoId> {
    let pos: usize = args
        .value_of("POS")
        .unwrap()
        .parse()
        .context("position must be a number")?;
    pos.checked_sub(1)
        .and_then(|n| store.items().get(n))
        .map(|item| item.id)
        .ok_or_else(|| anyhow!("no item at position {}", pos))
}
