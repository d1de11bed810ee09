//! Implementation of `notelink apply`.
//!
//! `apply` is the edit sink of the scanner: it re-scans the target note,
//! resolves the requested match by its stable id against that fresh scan,
//! rewrites the span, and persists the file. Spans from an earlier scan are
//! never trusted directly — if the note changed since then, the id simply
//! no longer resolves and the user is told to scan again.

use std::{fs, process::ExitCode};

use notelink_scan::{LinkId, PotentialLink, Scanner, Span, replace_span};

use super::shared::resolve_note;
use crate::cli::{args::ApplyCommand, context::CommandContext, output::dim};

/// Turns one previously reported match into a wikilink.
pub fn run(ctx: &CommandContext, cmd: &ApplyCommand) -> ExitCode {
    let id = match LinkId::parse(&cmd.id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error: {e}: {}", cmd.id);
            eprintln!("Expected format: fromLine-fromCol-toLine-toCol, e.g. 0-6-0-11");
            return ExitCode::FAILURE;
        }
    };

    let vault = match ctx.require_vault(true) {
        Ok(vault) => vault,
        Err(code) => return code,
    };
    let snapshot = match ctx.load_snapshot(vault) {
        Ok(snapshot) => snapshot,
        Err(code) => return code,
    };
    let Some(document) = resolve_note(&snapshot, &cmd.file) else {
        eprintln!("error: no note matching '{}' in the vault", cmd.file);
        return ExitCode::FAILURE;
    };

    let scanner = Scanner::new(&snapshot).with_preview_context(ctx.config.scan.preview_context);
    let links = scanner.scan_document(document);
    let Some(link) = links.iter().find(|link| link.id == id) else {
        eprintln!(
            "error: no match with id {} in {}",
            id,
            document.rel_path.display()
        );
        eprintln!("The note may have changed since the last scan; re-run 'notelink scan'.");
        return ExitCode::FAILURE;
    };

    let replacement = match build_replacement(cmd, link) {
        Ok(replacement) => replacement,
        Err(code) => return code,
    };

    let span = Span::new(link.from, link.to);
    let rewritten = match replace_span(&document.content, span, &replacement) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = fs::write(&document.abs_path, &rewritten) {
        eprintln!(
            "error: failed to write {}: {e}",
            document.abs_path.display()
        );
        return ExitCode::FAILURE;
    }

    println!(
        "Rewrote {} at {}: {} -> {}",
        document.rel_path.display(),
        id,
        link.match_text,
        replacement
    );
    println!(
        "{}",
        dim("Spans reported before this edit are stale; re-run 'notelink scan' before applying more.")
    );

    ExitCode::SUCCESS
}

/// Chooses the replacement text for the span.
fn build_replacement(cmd: &ApplyCommand, link: &PotentialLink) -> Result<String, ExitCode> {
    if let Some(text) = &cmd.replacement {
        return Ok(text.clone());
    }
    if let Some(alias) = &cmd.alias {
        if !link.linked_aliases.iter().any(|known| known == alias) {
            eprintln!(
                "error: '{alias}' is not a declared alias of {}",
                link.linked_title
            );
            if link.linked_aliases.is_empty() {
                eprintln!("The linked note declares no aliases.");
            } else {
                eprintln!("Declared aliases: {}", link.linked_aliases.join(", "));
            }
            return Err(ExitCode::FAILURE);
        }
        return Ok(format!("[[{}|{alias}]]", link.match_text));
    }
    Ok(format!("[[{}]]", link.match_text))
}
