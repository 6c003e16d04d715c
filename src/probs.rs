//! Helpers for working with slices of probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn scale(&mut self, factor: f64);
    fn normalise(&mut self, target: f64) -> f64;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }

    /// Rescales the slice so that it sums to `target`, returning the sum
    /// prior to rescaling. Used to redistribute truncated tail mass when a
    /// proper distribution is wanted from a bounded grid.
    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }
}
