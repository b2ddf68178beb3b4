use std::fmt;

use owo_colors::OwoColorize;

use super::theme::{ansi_color, category_color, status_ansi};
use super::view_models::{
    ChartsViewModel, SessionDetailViewModel, SessionListViewModel, StatsViewModel,
};

const VOLUME_BAR_WIDTH: usize = 30;
const CATEGORY_BAR_WIDTH: usize = 20;

// --------------------------------------------------------
// Stat Cards View
// --------------------------------------------------------

pub struct StatsView<'a> {
    data: &'a StatsViewModel,
    color: bool,
}

impl<'a> StatsView<'a> {
    pub fn new(data: &'a StatsViewModel, color: bool) -> Self {
        Self { data, color }
    }
}

impl fmt::Display for StatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.cards {
            let value = format!("{:<10}", card.value);
            if self.color && card.highlight {
                writeln!(f, "{:<16} {} {}", card.title, value.green(), card.description)?;
            } else {
                writeln!(f, "{:<16} {} {}", card.title, value, card.description)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Session List View
// --------------------------------------------------------

pub struct SessionListView<'a> {
    data: &'a SessionListViewModel,
    color: bool,
}

impl<'a> SessionListView<'a> {
    pub fn new(data: &'a SessionListViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn render_empty(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.query {
            Some(query) => writeln!(f, "No sessions found matching \"{}\"", query),
            None => writeln!(f, "No sessions yet."),
        }
    }
}

impl fmt::Display for SessionListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            return self.render_empty(f);
        }

        writeln!(
            f,
            "{:<12}  {:<14}  {:<8}  {:<9}  {:<10}  ISSUE",
            "SESSION", "STARTED", "DURATION", "STATUS", "CATEGORY"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for row in &self.data.rows {
            let status = format!("{:<9}", row.status.label());
            let category = format!("{:<10}", row.category.as_deref().unwrap_or("--"));

            if self.color {
                let category_painted = match &row.category {
                    Some(name) => category.color(ansi_color(category_color(name))).to_string(),
                    None => category.clone(),
                };
                writeln!(
                    f,
                    "{:<12}  {:<14}  {:<8}  {}  {}  {}",
                    row.id,
                    row.started,
                    row.duration,
                    status.color(status_ansi(row.status)),
                    category_painted,
                    row.issue
                )?;
            } else {
                writeln!(
                    f,
                    "{:<12}  {:<14}  {:<8}  {}  {}  {}",
                    row.id, row.started, row.duration, status, category, row.issue
                )?;
            }
        }

        if self.data.query.is_some() && self.data.rows.len() != self.data.total_unfiltered {
            writeln!(f)?;
            writeln!(
                f,
                "{} of {} sessions match",
                self.data.rows.len(),
                self.data.total_unfiltered
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Session Detail View
// --------------------------------------------------------

pub struct SessionDetailView<'a> {
    data: &'a SessionDetailViewModel,
    show_transcript: bool,
    show_summary: bool,
    color: bool,
}

impl<'a> SessionDetailView<'a> {
    pub fn new(
        data: &'a SessionDetailViewModel,
        show_transcript: bool,
        show_summary: bool,
        color: bool,
    ) -> Self {
        Self {
            data,
            show_transcript,
            show_summary,
            color,
        }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let badge = format!("[{}]", self.data.status.label());
        if self.color {
            writeln!(
                f,
                "Session {}  {}  {}  {}",
                self.data.id.bold(),
                badge.color(status_ansi(self.data.status)),
                self.data.started,
                self.data.duration
            )
        } else {
            writeln!(
                f,
                "Session {}  {}  {}  {}",
                self.data.id, badge, self.data.started, self.data.duration
            )
        }
    }

    fn render_transcript(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Transcript")?;
        writeln!(f, "{}", "-".repeat(60))?;

        if self.data.transcript.is_empty() {
            writeln!(f, "(no messages)")?;
            return Ok(());
        }

        for line in &self.data.transcript {
            let label = format!("{:<8}", line.speaker_label);
            if self.color {
                let painted = if line.is_user {
                    label.green().to_string()
                } else {
                    label.cyan().to_string()
                };
                writeln!(f, "  {}  {}  {}", line.clock_time, painted, line.text)?;
            } else {
                writeln!(f, "  {}  {}  {}", line.clock_time, label, line.text)?;
            }
        }
        Ok(())
    }

    fn render_summary(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "AI Summary")?;
        writeln!(f, "{}", "-".repeat(60))?;

        let Some(summary) = &self.data.summary else {
            writeln!(f, "No AI summary available for this session")?;
            return Ok(());
        };

        writeln!(f, "Issue:       {}", summary.issue)?;
        if self.color {
            writeln!(
                f,
                "Category:    {}",
                summary
                    .category
                    .color(ansi_color(category_color(&summary.category)))
            )?;
        } else {
            writeln!(f, "Category:    {}", summary.category)?;
        }
        let escalation = if summary.escalation_required {
            "Required"
        } else {
            "Not required"
        };
        writeln!(f, "Escalation:  {}", escalation)?;
        writeln!(f, "Resolution:  {}", summary.resolution)?;
        Ok(())
    }
}

impl fmt::Display for SessionDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        if self.show_transcript {
            self.render_transcript(f)?;
        }
        if self.show_summary {
            self.render_summary(f)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Active Session View
// --------------------------------------------------------

pub struct ActiveSessionView<'a> {
    data: Option<&'a SessionDetailViewModel>,
    color: bool,
}

impl<'a> ActiveSessionView<'a> {
    pub fn new(data: Option<&'a SessionDetailViewModel>, color: bool) -> Self {
        Self { data, color }
    }
}

impl fmt::Display for ActiveSessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(data) = self.data else {
            writeln!(f, "No active session.")?;
            return Ok(());
        };

        writeln!(f, "Active Session")?;
        writeln!(f, "{}", "=".repeat(60))?;
        write!(
            f,
            "{}",
            SessionDetailView::new(data, true, true, self.color)
        )
    }
}

// --------------------------------------------------------
// Charts View
// --------------------------------------------------------

pub struct ChartsView<'a> {
    data: &'a ChartsViewModel,
    color: bool,
}

impl<'a> ChartsView<'a> {
    pub fn new(data: &'a ChartsViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn render_volume(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Sessions This Week")?;
        writeln!(f, "{}", "-".repeat(60))?;

        if self.data.volume.is_empty() {
            writeln!(f, "(no data)")?;
            return Ok(());
        }

        let max = self.data.max_sessions.max(1);
        for bar in &self.data.volume {
            let session_cells =
                (bar.sessions as f64 / max as f64 * VOLUME_BAR_WIDTH as f64).round() as usize;
            let ticket_cells = (bar.tickets as f64 / max as f64 * VOLUME_BAR_WIDTH as f64).round()
                as usize;
            let ticket_cells = ticket_cells.min(session_cells);

            let ticket_part = "█".repeat(ticket_cells);
            let session_part = "█".repeat(session_cells.saturating_sub(ticket_cells));
            let padding = " ".repeat(VOLUME_BAR_WIDTH.saturating_sub(session_cells));

            if self.color {
                writeln!(
                    f,
                    "{:<4} {}{}{} {} sessions / {} tickets",
                    bar.label,
                    ticket_part.yellow(),
                    session_part.cyan(),
                    padding,
                    bar.sessions,
                    bar.tickets
                )?;
            } else {
                let ticket_part = "▓".repeat(ticket_cells);
                writeln!(
                    f,
                    "{:<4} {}{}{} {} sessions / {} tickets",
                    bar.label, ticket_part, session_part, padding, bar.sessions, bar.tickets
                )?;
            }
        }
        Ok(())
    }

    fn render_categories(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Issue Categories")?;
        writeln!(f, "{}", "-".repeat(60))?;

        if self.data.categories.is_empty() {
            writeln!(f, "(no data)")?;
            return Ok(());
        }

        let max_share = self
            .data
            .categories
            .iter()
            .map(|c| c.share_pct)
            .max()
            .unwrap_or(0)
            .max(1);

        for slice in &self.data.categories {
            let cells = (slice.share_pct as f64 / max_share as f64 * CATEGORY_BAR_WIDTH as f64)
                .round() as usize;
            let bar = "█".repeat(cells);
            let padding = " ".repeat(CATEGORY_BAR_WIDTH.saturating_sub(cells));

            if self.color {
                writeln!(
                    f,
                    "{:<10} {}{} {:>3} ({}%)",
                    slice.name,
                    bar.color(ansi_color(slice.color)),
                    padding,
                    slice.value,
                    slice.share_pct
                )?;
            } else {
                writeln!(
                    f,
                    "{:<10} {}{} {:>3} ({}%)",
                    slice.name, bar, padding, slice.value, slice.share_pct
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ChartsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_volume(f)?;
        self.render_categories(f)
    }
}
