use std::time::{Duration, Instant};

use colored::*;
use tracing::info_span;

use sonda_common::models::report::Report;
use sonda_common::models::target::Target;
use sonda_common::utils::input;
use sonda_core::investigator::{self, Investigator};

use crate::terminal::spinner::SpinnerGuard;
use crate::terminal::{
    colors,
    print::{GLOBAL_KEY_WIDTH, Print},
};

pub async fn investigate(target_arg: Option<&str>) -> anyhow::Result<()> {
    let input: String = match target_arg {
        Some(value) => value.to_string(),
        None => input::prompt_target()?,
    };
    let target: Target = Target::parse(&input)?;

    Print::header("starting investigation");
    GLOBAL_KEY_WIDTH.set(9);

    let start_time: Instant = Instant::now();
    let report: Report = run_investigation(target).await?;
    let total_time: Duration = start_time.elapsed();

    Print::report(&report);
    Print::investigation_summary(report.lookup_count(), total_time);

    Ok(())
}

async fn run_investigation(target: Target) -> anyhow::Result<Report> {
    let _guard: SpinnerGuard = run_spinner();
    let investigator = Investigator::with_defaults()?;
    investigator.investigate(target).await
}

fn run_spinner() -> SpinnerGuard {
    let span = info_span!("investigate", indicatif.pb_show = true);
    let _enter = span.enter();

    SpinnerGuard::with_status(span.clone(), || {
        let step = investigator::active_step();
        format!("{}...", step.label())
            .color(colors::TEXT_DEFAULT)
            .italic()
    })
}
