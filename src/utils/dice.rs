//! # Dice
//!
//! The dice-rolling contract the generators consume, plus a seeded default.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Dice-rolling primitive.
pub trait Dice: Send + Sync {
    /// Rolls `quantity` dice with `sides` faces and returns the sum.
    fn roll(&self, quantity: u32, sides: u32) -> u32;

    /// Rolls one die and reports whether it reached `threshold`.
    fn roll_as_boolean(&self, sides: u32, threshold: u32) -> bool {
        self.roll(1, sides) >= threshold
    }
}

/// Dice backed by a seeded [`StdRng`].
///
/// # Examples
///
/// ```
/// use hoard::{Dice, StdDice};
///
/// let dice = StdDice::new(7);
/// let total = dice.roll(3, 6);
/// assert!((3..=18).contains(&total));
/// ```
#[derive(Debug)]
pub struct StdDice {
    rng: Mutex<StdRng>,
}

impl StdDice {
    /// Creates dice that replay the same rolls for the same seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for StdDice {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SEED)
    }
}

impl Dice for StdDice {
    fn roll(&self, quantity: u32, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }

        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        (0..quantity).fold(0u32, |total, _| total.saturating_add(rng.gen_range(1..=sides)))
    }
}
