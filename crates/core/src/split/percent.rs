#![forbid(unsafe_code)]

/// Half-up percentage of `done / total`.
///
/// Only a full tally reaches 100: an incomplete one is capped at 99 so a derived
/// `completed` flag never turns on early. `total == 0` yields 0.
pub fn rounded_percent(done: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    if done >= total {
        return 100;
    }
    let done = u128::from(done);
    let total = u128::from(total);
    let pct = (200 * done + total) / (2 * total);
    u32::try_from(pct).unwrap_or(100).min(99)
}

/// Equal-share mean of several `(done, total)` tallies, as a percentage.
///
/// Every tally owns `1 / n` of the result regardless of its size; an empty tally counts as
/// zero progress. The same cap as [`rounded_percent`] applies.
pub fn equal_share_percent(tallies: &[(u64, u64)]) -> u32 {
    if tallies.is_empty() {
        return 0;
    }
    let all_done = tallies
        .iter()
        .all(|(done, total)| *total > 0 && done >= total);
    if all_done {
        return 100;
    }

    let share: f64 = tallies
        .iter()
        .map(|(done, total)| {
            if *total == 0 {
                0.0
            } else {
                (*done).min(*total) as f64 / *total as f64
            }
        })
        .sum();
    let pct = (100.0 * share / tallies.len() as f64 + 0.5).floor();
    (pct.clamp(0.0, 99.0)) as u32
}
