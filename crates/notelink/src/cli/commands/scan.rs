//! Implementation of `notelink scan`.

use std::process::ExitCode;

use notelink_scan::{DocumentLinks, Scanner};

use super::shared::resolve_note;
use crate::cli::{args::ScanCommand, context::CommandContext, output::render_reports};

/// Scans the vault (or a single note) and reports unlinked mentions.
pub fn run(ctx: &CommandContext, cmd: &ScanCommand) -> ExitCode {
    let vault = match ctx.require_vault(true) {
        Ok(vault) => vault,
        Err(code) => return code,
    };
    let snapshot = match ctx.load_snapshot(vault) {
        Ok(snapshot) => snapshot,
        Err(code) => return code,
    };

    let scanner = Scanner::new(&snapshot).with_preview_context(ctx.config.scan.preview_context);

    let mut reports: Vec<DocumentLinks> = match &cmd.file {
        Some(reference) => {
            let Some(document) = resolve_note(&snapshot, reference) else {
                eprintln!("error: no note matching '{reference}' in the vault");
                return ExitCode::FAILURE;
            };
            vec![DocumentLinks {
                path: document.rel_path.clone(),
                title: document.stem.clone(),
                links: scanner.scan_document(document),
            }]
        }
        None => scanner.scan_corpus(),
    };

    if let Some(limit) = cmd.limit {
        for report in &mut reports {
            report.links.truncate(limit);
        }
    }

    if cmd.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize results: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        render_reports(&reports);
    }

    ExitCode::SUCCESS
}
