use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use helptrace_engine::session_duration;
use helptrace_types::{Dataset, Session};
use serde::Serialize;

use crate::args::ExportFormat;

/// One flattened history row. Transcripts are deliberately left out of the
/// export; `session show` is the surface for those.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRow<'a> {
    session_id: &'a str,
    started_at: i64,
    ended_at: Option<i64>,
    duration: String,
    status: &'static str,
    category: Option<&'a str>,
    issue: Option<&'a str>,
    resolution: Option<&'a str>,
    escalation_required: Option<bool>,
}

impl<'a> ExportRow<'a> {
    fn from_session(session: &'a Session) -> Self {
        Self {
            session_id: &session.session_id,
            started_at: session.started_at,
            ended_at: session.ended_at,
            duration: session_duration(session).to_string(),
            status: session.status().label(),
            category: session.category(),
            issue: session.summary.as_ref().map(|s| s.issue.as_str()),
            resolution: session.summary.as_ref().map(|s| s.resolution.as_str()),
            escalation_required: session.summary.as_ref().map(|s| s.escalation_required),
        }
    }
}

pub fn handle(dataset: &Dataset, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let rows: Vec<ExportRow> = dataset.history.iter().map(ExportRow::from_session).collect();

    let rendered = match format {
        ExportFormat::Csv => render_csv(&rows)?,
        ExportFormat::Json => {
            let mut text = serde_json::to_string_pretty(&rows)?;
            text.push('\n');
            text
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            eprintln!("Exported {} sessions to {}", rows.len(), path.display());
        }
        None => {
            std::io::stdout().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}

fn render_csv(rows: &[ExportRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {}", e))?;
    Ok(String::from_utf8(bytes).context("CSV output was not valid UTF-8")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use helptrace_types::SessionSummary;

    fn session() -> Session {
        Session {
            session_id: "session-121".to_string(),
            started_at: 1_705_320_000_000,
            ended_at: Some(1_705_320_600_000),
            ticket_raised: true,
            transcripts: vec![],
            summary: Some(SessionSummary {
                issue: "Outlook crashes on startup".to_string(),
                category: "Software".to_string(),
                resolution: "Escalated to desktop support".to_string(),
                escalation_required: true,
            }),
        }
    }

    #[test]
    fn csv_includes_header_and_row() {
        let s = session();
        let rows = vec![ExportRow::from_session(&s)];
        let csv = render_csv(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "sessionId,startedAt,endedAt,duration,status,category,issue,resolution,escalationRequired"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("session-121,"));
        assert!(row.contains("10 min"));
        assert!(row.contains("Ticket"));
        assert!(row.contains("Software"));
    }

    #[test]
    fn csv_leaves_missing_summary_fields_empty() {
        let mut s = session();
        s.summary = None;
        s.ended_at = None;
        let rows = vec![ExportRow::from_session(&s)];
        let csv = render_csv(&rows).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("Ongoing"));
        assert!(row.ends_with(",,,,"));
    }
}
