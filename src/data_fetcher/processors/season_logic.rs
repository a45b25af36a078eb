//! Current-season resolution for a league.
//!
//! Season naming is free-form upstream ("2024", "2023/2024", "IPL 2025"),
//! so resolution is heuristic with a documented fallback order: an explicit
//! `is_current` flag wins, otherwise the season whose name parses to the
//! highest year.

use crate::data_fetcher::models::UpstreamSeason;

/// Extracts the highest 4-digit year embedded in a season name, if any.
fn year_from_name(name: &str) -> Option<i32> {
    let mut best: Option<i32> = None;
    let mut digits = String::new();

    for ch in name.chars().chain(std::iter::once(' ')) {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            if digits.len() == 4 {
                if let Ok(year) = digits.parse::<i32>() {
                    best = Some(best.map_or(year, |b| b.max(year)));
                }
            }
            digits.clear();
        }
    }

    best
}

/// Resolves the current season for a league.
///
/// Fallback order: first season flagged `is_current`, else the season with
/// the highest year parsed from its name, else the last season in upstream
/// order. Returns `None` only when the list is empty.
pub fn resolve_current_season(seasons: &[UpstreamSeason]) -> Option<&UpstreamSeason> {
    if let Some(current) = seasons.iter().find(|s| s.is_current == Some(true)) {
        return Some(current);
    }

    seasons
        .iter()
        .filter(|s| s.name.as_deref().and_then(year_from_name).is_some())
        .max_by_key(|s| s.name.as_deref().and_then(year_from_name))
        .or_else(|| seasons.last())
}
