use helptrace_types::{ChartColor, SessionStatus};

/// One stat card (title, headline value, supporting description).
#[derive(Debug, Clone)]
pub struct StatCardViewModel {
    pub title: &'static str,
    pub value: String,
    pub description: String,
    pub highlight: bool,
}

#[derive(Debug, Clone)]
pub struct StatsViewModel {
    pub cards: Vec<StatCardViewModel>,
}

/// One row of the session history table.
#[derive(Debug, Clone)]
pub struct SessionRowViewModel {
    pub id: String,
    pub started: String,
    pub duration: String,
    pub status: SessionStatus,
    pub category: Option<String>,
    pub issue: String,
}

#[derive(Debug, Clone)]
pub struct SessionListViewModel {
    pub rows: Vec<SessionRowViewModel>,
    /// Query that produced this list, if any (echoed in the empty state).
    pub query: Option<String>,
    pub total_unfiltered: usize,
}

/// One transcript bubble.
#[derive(Debug, Clone)]
pub struct TranscriptLineViewModel {
    pub speaker_label: &'static str,
    pub is_user: bool,
    pub clock_time: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct SummaryViewModel {
    pub issue: String,
    pub category: String,
    pub resolution: String,
    pub escalation_required: bool,
}

/// Full detail view of one session (transcript + optional AI summary).
#[derive(Debug, Clone)]
pub struct SessionDetailViewModel {
    pub id: String,
    pub status: SessionStatus,
    pub started: String,
    pub duration: String,
    pub transcript: Vec<TranscriptLineViewModel>,
    pub summary: Option<SummaryViewModel>,
}

/// One bucket of the weekly volume chart.
#[derive(Debug, Clone)]
pub struct VolumeBarViewModel {
    pub label: String,
    pub sessions: u64,
    pub tickets: u64,
}

/// One slice of the category breakdown, with its share of the total.
#[derive(Debug, Clone)]
pub struct CategorySliceViewModel {
    pub name: String,
    pub value: u64,
    pub share_pct: u32,
    pub color: ChartColor,
}

#[derive(Debug, Clone)]
pub struct ChartsViewModel {
    pub volume: Vec<VolumeBarViewModel>,
    pub max_sessions: u64,
    pub categories: Vec<CategorySliceViewModel>,
}
