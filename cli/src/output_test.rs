use super::*;
use serde_json::json;

fn job() -> Job {
    serde_json::from_value(json!({
        "id": 12,
        "title": "Rust Engineer",
        "company": "Acme",
        "location": "Remote",
        "score": { "total_score": 82, "decision": "high" },
        "canonical_url": "https://x/12",
        "description": "Build the crawler."
    }))
    .expect("job")
}

#[test]
fn job_line_carries_score_text() {
    assert_eq!(job_line(&job()), "    12  82 (high)     Rust Engineer  |  Acme  |  Remote");
}

#[test]
fn job_detail_appends_description_after_blank_line() {
    let detail = job_detail(&job());
    assert!(detail.starts_with("#12 Rust Engineer\n"));
    assert!(detail.ends_with("\n\nBuild the crawler."));
    assert!(!detail.contains("posted:"));
}

#[test]
fn run_line_mentions_error_only_when_present() {
    let mut run: Run = serde_json::from_value(json!({
        "id": 3, "source_id": 1, "status": "success", "fetched_count": 40, "new_count": 5, "high_priority_count": 2
    }))
    .expect("run");
    assert_eq!(run_line(&run), "     3  source=1  success  fetched=40 new=5 high=2");

    run.status = "failed".to_owned();
    run.error_summary = "timeout".to_owned();
    assert!(run_line(&run).ends_with("  error=timeout"));
}

#[test]
fn source_line_shows_state() {
    let source: Source = serde_json::from_value(json!({
        "id": 2, "name": "dejob", "base_url": "https://dejob.top", "enabled": false
    }))
    .expect("source");
    assert_eq!(source_line(&source), "   2  disabled  dejob  https://dejob.top");
}

#[test]
fn trigger_summary_handles_missing_message() {
    let summary = CrawlTrigger { success: true, new_jobs: 3, high_priority_jobs: 1, ..CrawlTrigger::default() };
    assert_eq!(trigger_summary(&summary), "crawl ok (new=3, high_priority=1)");

    let skipped = CrawlTrigger { message: "all sources disabled".to_owned(), ..CrawlTrigger::default() };
    assert_eq!(trigger_summary(&skipped), "crawl not run: all sources disabled (new=0, high_priority=0)");
}
