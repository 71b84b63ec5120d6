//! Willow CLI
//!
//! Normalizes an HTML fragment and shows the DOM nodes it converts to.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::env;
use std::fs;
use willow_fragment::{build_nodes, normalize};
use willow_html::{Document, print_tree};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: willow <fragment.html>");
        eprintln!("       willow --html '<tr><td>...</td></tr>'");
        eprintln!("       willow --normalize-only <fragment.html>");
        std::process::exit(1);
    }

    let mut rest = &args[1..];
    let normalize_only = rest[0] == "--normalize-only";
    if normalize_only {
        rest = &rest[1..];
        if rest.is_empty() {
            eprintln!("Error: --normalize-only requires a fragment argument");
            std::process::exit(1);
        }
    }

    let html = if rest[0] == "--html" {
        if rest.len() < 2 {
            eprintln!("Error: --html requires an HTML string argument");
            std::process::exit(1);
        }
        rest[1].clone()
    } else {
        fs::read_to_string(&rest[0])?
    };

    let normalized = normalize(html.trim_end());

    println!("{}", "=== Normalized Markup ===".green());
    println!("{normalized}");

    if normalize_only {
        return Ok(());
    }

    let mut doc = Document::new();
    let nodes = build_nodes(&mut doc, &normalized)?;

    println!("\n{}", "=== Converted Nodes ===".green());
    println!("{} top-level node(s)", nodes.len().yellow());
    for &node in &nodes {
        print_tree(doc.tree(), node, 0);
    }

    Ok(())
}
