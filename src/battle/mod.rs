pub mod calculators;
pub mod commands;
pub mod encounter;
pub mod rng;

#[cfg(test)]
pub(crate) mod tests;
