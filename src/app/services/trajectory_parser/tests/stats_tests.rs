//! Tests for parsing statistics

use super::STANDARD_FILE;
use crate::app::services::trajectory_parser::{ParseStats, TrajectoryParser};

#[test]
fn test_stats_counters_for_clean_file() {
    let result = TrajectoryParser::new().parse_content(STANDARD_FILE);

    assert_eq!(result.stats.total_lines, 8);
    assert_eq!(result.stats.data_lines, 3);
    assert_eq!(result.stats.rows_parsed, 3);
    assert_eq!(result.stats.rows_skipped, 0);
}

#[test]
fn test_success_rate() {
    let stats = ParseStats {
        total_lines: 10,
        data_lines: 4,
        rows_parsed: 3,
        rows_skipped: 1,
    };
    assert!((stats.success_rate() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_success_rate_with_no_data_lines() {
    let stats = ParseStats::new();
    assert_eq!(stats.success_rate(), 0.0);
}
