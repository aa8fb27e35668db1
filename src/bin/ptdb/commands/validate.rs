use std::io::{self, Write};

use anyhow::{Context as _, Result, bail};

use periodically::validate;

use super::Session;
use crate::display::{
    Context, Progress, print_issues, print_null_fields, print_validation_summary,
};

const TOTAL_STEPS: u8 = 1;

pub fn run_validate(session: &Session, ctx: Context) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Validating records");
    let report = validate::validate(&session.layout).context("Validation could not run")?;
    if report.passed() {
        progress.complete_step("Validating records", &[]);
    } else {
        progress.fail_step("Validating records");
    }

    let mut out = io::stdout().lock();
    print_validation_summary(&mut out, &report);
    print_null_fields(
        &mut out,
        &report.elements.null_counts,
        session.config.report.top_null_fields,
    );
    if !report.passed() {
        writeln!(out)?;
        print_issues(&mut out, report.issues());
    }
    out.flush()?;
    drop(out);

    if report.passed() {
        progress.finish("Validation passed", true);
        Ok(())
    } else {
        progress.finish("Validation failed", false);
        bail!(
            "validation failed with {} issue(s)",
            report.issue_count()
        )
    }
}
