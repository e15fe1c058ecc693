//! Plain-text rendering of console records for the terminal.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use records::{CrawlTrigger, Job, Run, Source};
use serde_json::Value;

pub fn job_line(job: &Job) -> String {
    format!("{:>6}  {:<12}  {}  |  {}  |  {}", job.id, job.score_text(), job.title, job.company, job.location)
}

pub fn job_detail(job: &Job) -> String {
    let mut lines = vec![
        format!("#{} {}", job.id, job.title),
        format!("company:  {}", job.company),
        format!("location: {}", job.location),
        format!("score:    {}", job.score_text()),
        format!("url:      {}", job.canonical_url),
    ];
    if let Some(posted) = &job.posted_at {
        lines.push(format!("posted:   {posted}"));
    }
    if let Some(description) = job.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push(description.to_owned());
    }
    lines.join("\n")
}

pub fn run_line(run: &Run) -> String {
    let mut line = format!(
        "{:>6}  source={}  {}  fetched={} new={} high={}",
        run.id, run.source_id, run.status, run.fetched_count, run.new_count, run.high_priority_count
    );
    if !run.error_summary.is_empty() {
        line.push_str("  error=");
        line.push_str(&run.error_summary);
    }
    line
}

pub fn source_line(source: &Source) -> String {
    let state = if source.enabled { "enabled" } else { "disabled" };
    format!("{:>4}  {:<8}  {}  {}", source.id, state, source.name, source.base_url)
}

pub fn trigger_summary(summary: &CrawlTrigger) -> String {
    let outcome = if summary.success { "ok" } else { "not run" };
    let message = if summary.message.is_empty() { String::new() } else { format!(": {}", summary.message) };
    format!(
        "crawl {outcome}{message} (new={}, high_priority={})",
        summary.new_jobs, summary.high_priority_jobs
    )
}

pub fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
