//! `menu tree` command implementation.

use std::path::PathBuf;

use clap::Args;
use menu::{Content, ItemList};

use super::load_definition;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Menu definition file (.json or .toml).
    file: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let list = load_definition(&self.file)?;

        output.highlight(&format!(
            "{} ({} items, {} lists)",
            list.name().unwrap_or("<unnamed>"),
            list.all_items().len(),
            list.all_item_lists().len()
        ));
        output.document(&outline_document(&list))?;

        Ok(())
    }
}

/// The outline as written to stdout, one item per line.
fn outline_document(list: &ItemList) -> String {
    outline(list).join("\n")
}

/// One line per item, indented by depth, in document order.
fn outline(list: &ItemList) -> Vec<String> {
    fn walk(list: &ItemList, depth: usize, lines: &mut Vec<String>) {
        for item in list.items() {
            let indent = "  ".repeat(depth - 1);
            let label = match item.content() {
                Content::Link(link) => {
                    format!("{indent}link {} {}", link.url(), link.value().unwrap_or_default())
                }
                Content::Raw(raw) => format!("{indent}raw  {}", raw.render()),
            };
            lines.push(label.trim_end().to_owned());

            if let Some(children) = item.children() {
                if let Some(name) = children.name() {
                    lines.push(format!("{indent}  [{name}]"));
                }
                walk(children, depth + 1, lines);
            }
        }
    }

    let mut lines = Vec::new();
    walk(list, 1, &mut lines);
    lines
}
