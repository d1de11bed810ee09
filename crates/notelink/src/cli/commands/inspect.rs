//! Implementation of `notelink inspect`.

use std::{fs, path::Path, process::ExitCode};

use notelink_document::{Document, header};

use crate::cli::{
    args::InspectCommand,
    output::{dim, header as section},
};

/// Shows how notelink parses a note: names, metadata, header span, and the
/// terms other notes would be matched against.
pub fn run(cmd: &InspectCommand) -> ExitCode {
    let path = Path::new(&cmd.file);

    if !path.exists() {
        eprintln!("error: file not found: {}", cmd.file);
        return ExitCode::FAILURE;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: failed to read file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (stripped, removed) = header::strip_header(&content);
    let line_count = content.split('\n').count();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cmd.file.clone());
    let document = Document::new(file_name, path, content.clone());

    println!("{}", section(&document.file_name));
    match &document.title {
        Some(title) => println!("title: {title}"),
        None => println!("title: {}", dim("(none declared)")),
    }
    println!("canonical title: {}", document.stem);
    if document.aliases.is_empty() {
        println!("aliases: {}", dim("(none)"));
    } else {
        println!("aliases: {}", document.aliases.join(", "));
    }
    println!();

    if removed == 0 {
        println!("{}", dim("no metadata header"));
    } else {
        println!(
            "metadata header: {removed} bytes stripped before matching ({} lines remain)",
            stripped.split('\n').count()
        );
    }
    println!("{line_count} lines total");
    println!();

    println!("{}", section("Search terms other notes match against:"));
    println!("  {} {}", document.stem, dim("(title)"));
    for alias in &document.aliases {
        println!("  {alias} {}", dim("(alias)"));
    }

    ExitCode::SUCCESS
}
