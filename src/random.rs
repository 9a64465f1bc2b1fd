//! Injected randomness. Nothing in the core calls a global RNG; callers pass
//! an `Rng` (or a picker built from one) so games replay from a seed and
//! tests can substitute fixed choices.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len)
}

/// Uniformly chosen element of `items`, or `None` if it is empty.
pub fn random_item<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> Option<T> {
    items.choose(rng).copied()
}

/// Wrap `rng` as a picker closure for
/// [`optimal_attack_coordinate`](crate::optimal_attack_coordinate).
pub fn random_picker<'a, R, T>(rng: &'a mut R) -> impl FnMut(&[T]) -> Option<T> + 'a
where
    R: Rng + ?Sized + 'a,
    T: Copy + 'a,
{
    move |items: &[T]| random_item(&mut *rng, items)
}
