use std::cmp::Ordering;

use crate::ranking::RankedResult;

/// Ranks `x` against `y` by coefficient, smallest first.
///
/// - `Less` if `x.coefficient < y.coefficient` (x ranks before y),
/// - `Equal` if the coefficients compare equal,
/// - `Greater` otherwise. This includes every comparison where either side is NaN, so NaN
///   entries do not form a consistent order with anything, themselves included.
///
/// Row and column never take part in the decision. This is a total preorder over finite
/// coefficients, not a strict total order: results with equal coefficients are
/// interchangeable and their relative order is left to the container.
///
/// ```
/// use dicrank::ranking::{RankedResult, rank_order};
/// use std::cmp::Ordering;
///
/// let a = RankedResult::new(0.1, 9, 9);
/// let b = RankedResult::new(0.1, 0, 0);
/// assert_eq!(rank_order(&a, &b), Ordering::Equal);
/// assert_eq!(rank_order(&RankedResult::new(-1.0, 0, 0), &a), Ordering::Less);
/// ```
pub fn rank_order(x: &RankedResult, y: &RankedResult) -> Ordering {
    if x.coefficient < y.coefficient {
        Ordering::Less
    } else if x.coefficient == y.coefficient {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

/// An ordering strategy handed by value to a [`ResultQueue`](crate::ranking::ResultQueue).
///
/// `compare(x, y) == Less` means `x` is extracted before `y`. Implementations must be pure:
/// the same pair always yields the same answer.
pub trait RankingPolicy: Copy {
    /// Ranks `x` against `y`; `Less` puts `x` first.
    fn compare(&self, x: &RankedResult, y: &RankedResult) -> Ordering;
}

/// Lowest coefficient first. See [`rank_order`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AscendingCoefficient;

impl RankingPolicy for AscendingCoefficient {
    #[inline]
    fn compare(&self, x: &RankedResult, y: &RankedResult) -> Ordering {
        rank_order(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn coef(c: f64) -> RankedResult {
        RankedResult::new(c, 0, 0)
    }

    #[test]
    fn test_lower_ranks_first() {
        assert_eq!(rank_order(&coef(1.0), &coef(2.0)), Ordering::Less);
        assert_eq!(rank_order(&coef(2.0), &coef(1.0)), Ordering::Greater);
        assert_eq!(rank_order(&coef(-5.0), &coef(-4.0)), Ordering::Less);
    }

    #[test]
    fn test_equal_coefficients_ignore_position() {
        let a = RankedResult::new(3.0, 1, 2);
        let b = RankedResult::new(3.0, 100, -7);
        assert_eq!(rank_order(&a, &b), Ordering::Equal);
        assert_eq!(rank_order(&b, &a), Ordering::Equal);
    }

    #[test]
    fn test_signed_zeros_are_equal() {
        assert_eq!(rank_order(&coef(0.0), &coef(-0.0)), Ordering::Equal);
    }

    #[test]
    fn test_nan_is_never_less_nor_equal() {
        let nan = coef(f64::NAN);
        assert_eq!(rank_order(&nan, &coef(1.0)), Ordering::Greater);
        assert_eq!(rank_order(&coef(1.0), &nan), Ordering::Greater);
        assert_eq!(rank_order(&nan, &nan), Ordering::Greater);
    }

    #[test]
    fn test_infinities() {
        assert_eq!(
            rank_order(&coef(f64::NEG_INFINITY), &coef(f64::MIN)),
            Ordering::Less
        );
        assert_eq!(
            rank_order(&coef(f64::INFINITY), &coef(f64::INFINITY)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_empty_result_sits_between_signs() {
        let zero = RankedResult::empty();
        assert_eq!(rank_order(&zero, &coef(1e-12)), Ordering::Less);
        assert_eq!(rank_order(&zero, &coef(-1e-12)), Ordering::Greater);
        assert_eq!(rank_order(&coef(1e-12), &zero), Ordering::Greater);
    }

    #[test]
    fn test_policy_delegates_to_rank_order() {
        let p = AscendingCoefficient;
        for (x, y) in [(1.0, 2.0), (2.0, 1.0), (4.0, 4.0)] {
            assert_eq!(p.compare(&coef(x), &coef(y)), rank_order(&coef(x), &coef(y)));
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let a = RankedResult::new(0.3, 1, 1);
        let b = RankedResult::new(0.7, 2, 2);
        let first = rank_order(&a, &b);
        for _ in 0..100 {
            assert_eq!(rank_order(&a, &b), first);
        }
    }

    #[test]
    fn test_randomized_transitivity() {
        let mut rng = StdRng::seed_from_u64(42);
        // coarse values so that ties actually show up
        let values: Vec<RankedResult> = (0..60)
            .map(|i| RankedResult::new(rng.random_range(-10..10) as f64 * 0.5, i, -i))
            .collect();

        for a in &values {
            for b in &values {
                // antisymmetry over finite coefficients
                assert_eq!(rank_order(a, b), rank_order(b, a).reverse());
                for c in &values {
                    if rank_order(a, b) == Ordering::Less && rank_order(b, c) == Ordering::Less {
                        assert_eq!(rank_order(a, c), Ordering::Less);
                    }
                    if rank_order(a, b) != Ordering::Greater
                        && rank_order(b, c) != Ordering::Greater
                    {
                        assert_ne!(rank_order(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }
}
