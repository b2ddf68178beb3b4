/// Escalation rate as a whole percentage: `round(tickets / total * 100)`.
///
/// Rounds half away from zero (`f64::round`), so 26.92 becomes 27. A total
/// of zero sessions reports 0% rather than propagating a division by zero.
pub fn escalation_rate_pct(tickets_raised: u64, total_sessions: u64) -> u32 {
    if total_sessions == 0 {
        return 0;
    }
    (tickets_raised as f64 / total_sessions as f64 * 100.0).round() as u32
}

/// Sessions closed without a ticket, by the dashboard convention
/// `resolved = total - tickets`.
pub fn resolved_sessions(total_sessions: u64, tickets_raised: u64) -> u64 {
    total_sessions.saturating_sub(tickets_raised)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_rounds_half_up() {
        // 42 / 156 = 26.92...
        assert_eq!(escalation_rate_pct(42, 156), 27);
        // 1 / 8 = 12.5 rounds up
        assert_eq!(escalation_rate_pct(1, 8), 13);
        assert_eq!(escalation_rate_pct(1, 4), 25);
    }

    #[test]
    fn zero_total_reports_zero_percent() {
        assert_eq!(escalation_rate_pct(0, 0), 0);
    }

    #[test]
    fn full_escalation_is_one_hundred_percent() {
        assert_eq!(escalation_rate_pct(5, 5), 100);
    }

    #[test]
    fn resolved_is_total_minus_tickets() {
        assert_eq!(resolved_sessions(156, 42), 114);
        assert_eq!(resolved_sessions(0, 0), 0);
    }

    #[test]
    fn resolved_saturates_on_inconsistent_input() {
        assert_eq!(resolved_sessions(3, 5), 0);
    }
}
