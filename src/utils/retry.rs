//! # Bounded Redraws
//!
//! Several rules redraw from a table until a candidate is acceptable. Table
//! data normally guarantees termination; malformed data must not hang the
//! caller, so every loop goes through [`draw_until`].

use crate::{HoardError, HoardResult};
use std::collections::BTreeSet;

/// Draws until `accept` holds, giving up after `max_attempts` draws.
///
/// # Examples
///
/// ```
/// use hoard::draw_until;
///
/// let mut next = 0;
/// let even = draw_until(10, "even number", || { next += 1; Ok(next) }, |n| n % 2 == 0);
/// assert_eq!(even.unwrap(), 2);
/// ```
pub fn draw_until<T, D, A>(max_attempts: usize, what: &str, mut draw: D, mut accept: A) -> HoardResult<T>
where
    D: FnMut() -> HoardResult<T>,
    A: FnMut(&T) -> bool,
{
    for attempt in 1..=max_attempts {
        let candidate = draw()?;
        if accept(&candidate) {
            return Ok(candidate);
        }
        log::trace!("Rejected {} candidate on attempt {}", what, attempt);
    }

    Err(HoardError::RetryLimitExceeded(format!(
        "no acceptable {} after {} draws",
        what, max_attempts
    )))
}

/// Draws `count` values not already in `existing`, inserting each one.
///
/// Repeats are redrawn. Returns the newly added values in draw order.
pub fn draw_distinct<D>(
    max_attempts: usize,
    what: &str,
    existing: &mut BTreeSet<String>,
    count: usize,
    mut draw: D,
) -> HoardResult<Vec<String>>
where
    D: FnMut() -> HoardResult<String>,
{
    let mut added = Vec::with_capacity(count);
    let mut attempts = 0;

    while added.len() < count {
        if attempts == max_attempts {
            return Err(HoardError::RetryLimitExceeded(format!(
                "only {} of {} distinct {} after {} draws",
                added.len(),
                count,
                what,
                max_attempts
            )));
        }
        attempts += 1;

        let candidate = draw()?;
        if existing.insert(candidate.clone()) {
            added.push(candidate);
        } else {
            log::trace!("Redrawing repeated {} '{}'", what, candidate);
        }
    }

    Ok(added)
}
