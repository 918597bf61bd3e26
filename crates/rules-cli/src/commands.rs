use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use comfy_table::Table;
use tracing::{debug, info_span};

use rules_cli::pipeline::{GenerateOutcome, generate};
use rules_model::SectionId;

use crate::cli::GenerateArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let snapshot = args
        .snapshot_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let span = info_span!("generate", input = %args.input.display());
    let _guard = span.enter();
    let started = Instant::now();
    let outcome = generate(&args.input, &args.output, snapshot, args.dry_run)?;
    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generate finished"
    );
    Ok(outcome)
}

pub fn run_sections() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Section"), header_cell("Title")]);
    apply_table_style(&mut table);
    for id in SectionId::ALL {
        table.add_row(vec![id.as_str(), id.title()]);
    }
    println!("{table}");
    Ok(())
}
