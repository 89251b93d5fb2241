/// Source of uniform draws in `[0, 1)`.
///
/// Every consumer of randomness in the engine (direction shuffling, anchor
/// selection, decoy fill) takes one of these explicitly.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Maps a single draw onto `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let draw = self.next_f64();
        let idx = (draw * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts a closure into a [`RandomSource`].
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_f64(&mut self) -> f64 {
        (self.0)()
    }
}

/// Fisher-Yates shuffle, one draw per swap.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

pub fn seeded(seed: Option<u64>) -> fastrand::Rng {
    if let Some(s) = seed {
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    }
}
