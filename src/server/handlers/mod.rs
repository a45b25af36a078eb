pub mod archives;
pub mod catalog;
pub mod countries;
pub mod fixtures;
pub mod leagues;
pub mod live;
pub mod matches;
pub mod news;
pub mod players;
pub mod rankings;
pub mod seasons;
pub mod teams;

use std::collections::HashMap;

/// Picks the whitelisted query parameters out of the incoming request for
/// forwarding upstream. Unknown parameters are dropped, never forwarded.
pub(crate) fn forward_params<'a>(
    query: &'a HashMap<String, String>,
    keys: &[&'a str],
) -> Vec<(&'a str, &'a str)> {
    keys.iter()
        .filter_map(|&key| query.get(key).map(|value| (key, value.as_str())))
        .collect()
}
