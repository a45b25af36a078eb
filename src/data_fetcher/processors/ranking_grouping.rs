//! Team-ranking grouping: splits the provider's flat ranking entries into
//! men/women buckets for one format.

use crate::data_fetcher::models::{GroupedRankings, UpstreamRankingEntry};

/// Decides whether a ranking entry belongs to the women's bucket by checking
/// the resource string and the gender field for a womens-indicating
/// substring. Ambiguous entries default to men.
fn is_womens_entry(entry: &UpstreamRankingEntry) -> bool {
    let haystacks = [entry.resource.as_deref(), entry.gender.as_deref()];
    haystacks.iter().flatten().any(|value| {
        let lower = value.to_ascii_lowercase();
        lower.contains("women") || lower.contains("female")
    })
}

/// Checks the entry's `type` against the caller-supplied alias set,
/// case-insensitively. E.g. both "T20I" and "T20" count as the T20I format.
fn matches_format(entry: &UpstreamRankingEntry, accepted_types: &[&str]) -> bool {
    match entry.format_type.as_deref() {
        Some(format_type) => accepted_types
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(format_type)),
        None => false,
    }
}

/// Groups ranking entries into men/women buckets for the format described by
/// `accepted_types`. Entries whose type matches no alias are discarded. A
/// later entry for the same gender silently replaces an earlier one; there
/// is no merge and no error.
pub fn group_team_rankings(
    entries: &[UpstreamRankingEntry],
    accepted_types: &[&str],
) -> GroupedRankings {
    let mut groups = GroupedRankings::default();

    for entry in entries {
        if !matches_format(entry, accepted_types) {
            continue;
        }
        if is_womens_entry(entry) {
            groups.women = entry.team.clone();
        } else {
            groups.men = entry.team.clone();
        }
    }

    groups
}
