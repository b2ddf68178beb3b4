use helptrace_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn stats_shows_cards_with_escalation_rate() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["stats"])
        .success()
        .stdout(predicate::str::contains("Total Sessions"))
        .stdout(predicate::str::contains("156"))
        .stdout(predicate::str::contains("27% escalation rate"))
        .stdout(predicate::str::contains("8.5 min"));
}

#[test]
fn stats_json_round_trips() {
    let world = TestWorld::with_sample_dataset().unwrap();
    let output = world.run(&["--format", "json", "stats"]).success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["totalSessions"], 156);
    assert_eq!(value["ticketsRaised"], 42);
}

#[test]
fn session_list_shows_all_history() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "list"])
        .success()
        .stdout(predicate::str::contains("SESSION"))
        .stdout(predicate::str::contains("session-122"))
        .stdout(predicate::str::contains("session-119"))
        .stdout(predicate::str::contains("Password reset request"));
}

#[test]
fn session_list_query_narrows_and_reports_match_count() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "list", "--query", "outlook"])
        .success()
        .stdout(predicate::str::contains("session-121"))
        .stdout(predicate::str::contains("session-122").not())
        .stdout(predicate::str::contains("1 of 4 sessions match"));
}

#[test]
fn session_list_query_matches_transcript_text() {
    let world = TestWorld::with_sample_dataset().unwrap();
    // "finance" appears only inside session-119's transcript
    world
        .run(&["session", "list", "--query", "FINANCE"])
        .success()
        .stdout(predicate::str::contains("session-119"))
        .stdout(predicate::str::contains("session-120").not());
}

#[test]
fn session_list_unmatched_query_prints_empty_state() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "list", "--query", "zzz-no-such-thing"])
        .success()
        .stdout(predicate::str::contains(
            "No sessions found matching \"zzz-no-such-thing\"",
        ));
}

#[test]
fn session_list_tickets_only_filters_by_escalation() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "list", "--tickets-only"])
        .success()
        .stdout(predicate::str::contains("session-121"))
        .stdout(predicate::str::contains("session-119"))
        .stdout(predicate::str::contains("session-122").not())
        .stdout(predicate::str::contains("session-120").not());
}

#[test]
fn session_list_json_is_parseable() {
    let world = TestWorld::with_sample_dataset().unwrap();
    let output = world
        .run(&["--format", "json", "session", "list", "--query", "outlook"])
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["sessionId"], "session-121");
}

#[test]
fn session_show_renders_transcript_and_summary() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "show", "session-121"])
        .success()
        .stdout(predicate::str::contains("Transcript"))
        .stdout(predicate::str::contains("AI Summary"))
        .stdout(predicate::str::contains("Outlook keeps crashing"))
        .stdout(predicate::str::contains("Software"))
        .stdout(predicate::str::contains("5 min"));
}

#[test]
fn session_show_section_flag_limits_output() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "show", "session-121", "--section", "summary"])
        .success()
        .stdout(predicate::str::contains("AI Summary"))
        .stdout(predicate::str::contains("Transcript").not());
}

#[test]
fn session_show_rejects_ambiguous_prefix() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "show", "session-12"])
        .failure()
        .stderr(predicate::str::contains("ambiguous"));
}

#[test]
fn session_show_reports_unknown_id() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["session", "show", "session-999"])
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn active_panel_shows_ongoing_session() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["active"])
        .success()
        .stdout(predicate::str::contains("Active Session"))
        .stdout(predicate::str::contains("session-123"))
        .stdout(predicate::str::contains("Ongoing"))
        .stdout(predicate::str::contains("WiFi"));
}

#[test]
fn charts_render_volume_and_categories() {
    let world = TestWorld::with_sample_dataset().unwrap();
    world
        .run(&["charts"])
        .success()
        .stdout(predicate::str::contains("Sessions This Week"))
        .stdout(predicate::str::contains("32 sessions / 12 tickets"))
        .stdout(predicate::str::contains("Issue Categories"))
        .stdout(predicate::str::contains("Network"))
        .stdout(predicate::str::contains("35 (35%)"));
}

#[test]
fn export_csv_writes_header_and_rows() {
    let world = TestWorld::with_sample_dataset().unwrap();
    let out = world.dir().join("export.csv");
    world
        .run(&["session", "export", "--output", out.to_str().unwrap()])
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("sessionId,startedAt,endedAt,duration,status"));
    assert!(lines[1].starts_with("session-122,"));
}

#[test]
fn export_json_goes_to_stdout_by_default() {
    let world = TestWorld::with_sample_dataset().unwrap();
    let output = world
        .run(&["session", "export", "--format", "json"])
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 4);
}

#[test]
fn missing_dataset_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert_cmd::Command::cargo_bin("helptrace")
        .unwrap()
        .arg("--data")
        .arg(&missing)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read dataset"));
}

#[test]
fn inconsistent_dataset_warns_but_still_renders() {
    let mut dataset = helptrace_testing::fixtures::sample_dataset();
    dataset.stats.tickets_raised = 200;
    let world = TestWorld::new(&dataset).unwrap();
    world
        .run(&["stats"])
        .success()
        .stderr(predicate::str::contains("warning:"));
}
