//! Implementation of the `stencil list` command.

use serde::Serialize;

use stencil_core::domain::TreeId;

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ListedFile {
    tree: &'static str,
    path: String,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = super::asset_service();
    let trees = selected_trees(&args);

    let mut files = Vec::new();
    for &tree in trees {
        let paths = service
            .list_tree(tree)
            .with_cli_context(|| format!("listing the {tree} tree"))?;
        files.extend(paths.into_iter().map(|path| ListedFile {
            tree: tree.as_str(),
            path: path.to_string(),
        }));
    }

    match args.format {
        ListFormat::Table => {
            for &tree in trees {
                output.header(&format!("{tree}:"))?;
                for file in files.iter().filter(|f| f.tree == tree.as_str()) {
                    output.print(&format!("  {}", file.path))?;
                }
            }
        }
        ListFormat::List => {
            for file in &files {
                output.print(&format!("{}/{}", file.tree, file.path))?;
            }
        }
        ListFormat::Json => output.json(&files)?,
    }

    Ok(())
}

fn selected_trees(args: &ListArgs) -> &'static [TreeId] {
    match args.tree.map(TreeId::from) {
        Some(TreeId::Foundation) => &[TreeId::Foundation],
        Some(TreeId::Evolving) => &[TreeId::Evolving],
        None => &TreeId::ALL,
    }
}
