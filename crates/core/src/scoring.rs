//! Scoring module - classic line-clear scoring and the level curve
//!
//! Levels start at 1 and go up every 10 lines. Line clears are paid from the
//! classic table, multiplied by the level that was in effect *before* the
//! clear was counted.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, START_LEVEL,
};

/// Calculate line clear score
/// lines: number of lines cleared by one lock (1-4; anything else scores 0)
/// level: level before the clear (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level management
/// Level increases every 10 lines cleared, starting from 1
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Get gravity interval for a level (in milliseconds)
/// 1000ms on level 1, 100ms faster per level, never below 100ms
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(START_LEVEL).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
