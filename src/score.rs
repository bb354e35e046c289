use log::warn;

/// Computes the ordering key for a grid. Lower scores sort first.
pub trait Scorer {
    fn score(&self, tiles: &[i32; 9]) -> i32;
}

impl<F> Scorer for F
where
    F: Fn(&[i32; 9]) -> i32,
{
    fn score(&self, tiles: &[i32; 9]) -> i32 {
        self(tiles)
    }
}

/// Stand-in for the A* heuristic. Announces itself and scores everything 0.
///
/// The announcement goes through `log` at warn level, so it shows under the
/// default filter and `RUST_LOG=warn`, and is silenced only by `RUST_LOG=error`
/// or `off`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Placeholder;

impl Scorer for Placeholder {
    fn score(&self, _tiles: &[i32; 9]) -> i32 {
        warn!("I'm A Star");
        0
    }
}
