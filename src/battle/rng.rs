use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The single random source a simulation draws from.
///
/// Every draw names the reason it is taken, which is logged at trace level so a
/// replayed episode can be compared draw by draw.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Seeded(StdRng),
    /// Fractions in `[0, 1)`, consumed in order.
    Scripted { outcomes: Vec<f64>, index: usize },
}

impl TurnRng {
    pub fn new_seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        Self {
            source: RngSource::Seeded(StdRng::from_os_rng()),
        }
    }

    /// A source that replays fixed outcomes, for tests.
    ///
    /// Each outcome is a fraction in `[0, 1)`: `chance` returns it as is and
    /// `below(n)` maps it to `floor(outcome * n)`.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// Replaces the source with a freshly seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.source = RngSource::Seeded(StdRng::seed_from_u64(seed));
    }

    /// Uniform draw in `[0, 1)`.
    pub fn chance(&mut self, reason: &str) -> f64 {
        let outcome = match &mut self.source {
            RngSource::Seeded(rng) => rng.random::<f64>(),
            RngSource::Scripted { outcomes, index } => next_scripted(outcomes, index, reason),
        };
        tracing::trace!(outcome, reason, "rng consumed");
        outcome
    }

    /// Uniform integer draw in `[0, upper)`. Returns 0 when `upper` is 0.
    pub fn below(&mut self, upper: u32, reason: &str) -> u32 {
        if upper == 0 {
            return 0;
        }
        let outcome = match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(0..upper),
            RngSource::Scripted { outcomes, index } => {
                let fraction = next_scripted(outcomes, index, reason);
                ((fraction * upper as f64) as u32).min(upper - 1)
            }
        };
        tracing::trace!(outcome, upper, reason, "rng consumed");
        outcome
    }

    /// Uniform integer draw in `[low, high]`.
    pub fn between(&mut self, low: u32, high: u32, reason: &str) -> u32 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        low + self.below(high - low + 1, reason)
    }
}

fn next_scripted(outcomes: &[f64], index: &mut usize, reason: &str) -> f64 {
    if *index >= outcomes.len() {
        panic!(
            "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
            reason
        );
    }
    let outcome = outcomes[*index];
    *index += 1;
    outcome
}
