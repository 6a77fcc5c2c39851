use crate::error::DerangeError;
use crate::fisher_yates::fisher_yates;
use rand::Rng;

/// A single assignment of a draw: `giver` hands their gift to `receiver`.
///
/// Displays as `giver → receiver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing<T> {
    pub giver: T,
    pub receiver: T,
}

impl<T: std::fmt::Display> std::fmt::Display for Pairing<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.giver, self.receiver)
    }
}

/// Draws secret-friend pairs over `items`: every item (the giver) is mapped
/// to a distinct item (its receiver). The receivers are a permutation of
/// the givers, so everyone gives exactly once and receives exactly once.
///
/// Givers keep the input order. The receivers come from shuffling a copy of
/// `items` with [`fisher_yates`] and clearing fixed points with a single
/// circular correction sweep; the caller's slice is never mutated.
///
/// Items are compared by value (`PartialEq`) and are expected to be pairwise
/// distinct. Duplicates are not rejected, but with them "no self-assignment"
/// loses its meaning and a fixed point may survive the correction.
///
/// # Errors
/// [`DerangeError::TooFewParticipants`] when `items` holds fewer than two
/// entries. A draw is never silently partial.
///
/// # Warning
/// The pairing is a valid derangement, but it is not drawn uniformly from
/// all possible derangements: shuffle outcomes that needed a corrective
/// swap favour rotation-like pairings.
///
/// # Example
/// ```
/// use amigo_shuffle::derange::derange;
///
/// let pairs = derange(&mut rand::thread_rng(), &[1, 2, 3, 4]).unwrap();
///
/// assert_eq!(pairs.len(), 4);
/// assert!(pairs.iter().all(|p| p.giver != p.receiver));
/// ```
pub fn derange<R: Rng, T: Clone + PartialEq>(
    rng: &mut R,
    items: &[T],
) -> Result<Vec<Pairing<T>>, DerangeError> {
    if items.len() < 2 {
        return Err(DerangeError::TooFewParticipants(items.len()));
    }

    let mut receivers = items.to_vec();
    fisher_yates(rng, &mut receivers);
    resolve_fixed_points(items, &mut receivers);

    Ok(items
        .iter()
        .cloned()
        .zip(receivers)
        .map(|(giver, receiver)| Pairing { giver, receiver })
        .collect())
}

/// Runs [`derange`] on a fast PCG generator seeded with `seed`, so the same
/// seed reproduces the same pairs on the same build.
#[cfg(feature = "seed_with")]
pub fn derange_seeded<T: Clone + PartialEq>(
    seed: u64,
    items: &[T],
) -> Result<Vec<Pairing<T>>, DerangeError> {
    use rand::SeedableRng;

    let mut rng = rand_pcg::Pcg64Mcg::seed_from_u64(seed);
    derange(&mut rng, items)
}

/// One circular corrective sweep over the shuffled receivers: a position
/// holding its own giver swaps with its right neighbour; the last position
/// wraps around to the first.
///
/// For pairwise distinct givers no fixed point survives the sweep. The
/// giver's value already sits at the fixed position, so the neighbour
/// swapped in can never equal it; and the wrap-around swap plants the last
/// giver into slot 0, where it cannot match either. Duplicate values void
/// that guarantee (swapping two equal receivers changes nothing), though
/// the sweep still terminates after exactly one pass.
fn resolve_fixed_points<T: PartialEq>(givers: &[T], receivers: &mut [T]) {
    let len = receivers.len();
    for i in 0..len {
        if givers[i] == receivers[i] {
            receivers.swap(i, (i + 1) % len);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn rejects_empty_and_singleton() {
        let mut rng = Pcg64Mcg::seed_from_u64(1234);

        let empty: [u32; 0] = [];
        assert_eq!(
            derange(&mut rng, &empty),
            Err(DerangeError::TooFewParticipants(0))
        );
        assert_eq!(
            derange(&mut rng, &[7u32]),
            Err(DerangeError::TooFewParticipants(1))
        );
    }

    #[test]
    fn two_items_always_swap() {
        let mut rng = Pcg64Mcg::seed_from_u64(4567);

        for _ in 0..100 {
            let pairs = derange(&mut rng, &["A", "B"]).unwrap();
            assert_eq!(
                pairs,
                vec![
                    Pairing {
                        giver: "A",
                        receiver: "B"
                    },
                    Pairing {
                        giver: "B",
                        receiver: "A"
                    },
                ]
            );
        }
    }

    #[test]
    fn no_self_pairs_and_receivers_form_permutation() {
        let mut rng = Pcg64Mcg::seed_from_u64(890);

        for n in 2..50 {
            let items: Vec<usize> = (0..n).collect();
            let pairs = derange(&mut rng, &items).unwrap();

            assert_eq!(pairs.len(), n);
            assert!(pairs.iter().all(|p| p.giver != p.receiver));
            assert!(pairs.iter().map(|p| p.giver).eq(items.iter().copied()));

            let mut receivers: Vec<_> = pairs.iter().map(|p| p.receiver).collect();
            receivers.sort_unstable();
            assert_eq!(receivers, items);
        }
    }

    /// Duplicate values void the no-self-pair guarantee, but the draw must
    /// still terminate and hand back a permutation of the input.
    #[test]
    fn duplicate_values_still_terminate() {
        let mut rng = Pcg64Mcg::seed_from_u64(2024);
        let items = ["Ana", "Ana", "Beto", "Ana"];

        for _ in 0..100 {
            let pairs = derange(&mut rng, &items).unwrap();

            assert_eq!(pairs.len(), items.len());
            assert!(pairs.iter().map(|p| p.giver).eq(items.iter().copied()));

            let mut receivers: Vec<_> = pairs.iter().map(|p| p.receiver).collect();
            receivers.sort_unstable();
            let mut expected = items.to_vec();
            expected.sort_unstable();
            assert_eq!(receivers, expected);
        }
    }

    /// Feeds every possible shuffle outcome through the corrective sweep
    /// for short lists. For distinct items not a single residual fixed
    /// point may remain, regardless of what the shuffle produced.
    #[test]
    fn corrective_sweep_exhaustive_small_n() {
        for n in 2..=6 {
            let givers: Vec<usize> = (0..n).collect();

            for perm in (0..n).permutations(n) {
                let mut receivers = perm.clone();
                resolve_fixed_points(&givers, &mut receivers);

                assert!(
                    givers.iter().zip(&receivers).all(|(g, r)| g != r),
                    "residual fixed point: n={} shuffled={:?} corrected={:?}",
                    n,
                    perm,
                    receivers
                );

                let mut sorted = receivers.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, givers, "correction lost an element");
            }
        }
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let names = ["Ana", "Beto", "Caro", "Dani", "Eli"];
        let rng = Pcg64Mcg::seed_from_u64(31337);

        let runs: Vec<_> = (0..10)
            .map(|_| derange(&mut rng.clone(), &names).unwrap())
            .collect();

        for run in &runs[1..] {
            assert_eq!(&runs[0], run);
        }
    }

    #[cfg(feature = "seed_with")]
    #[test]
    fn derange_seeded_reproduces() {
        let names = ["Ana", "Beto", "Caro"];

        assert_eq!(
            derange_seeded(99, &names).unwrap(),
            derange_seeded(99, &names).unwrap()
        );
    }

    #[test]
    fn pairing_displays_with_arrow() {
        let pair = Pairing {
            giver: "Ana",
            receiver: "Beto",
        };
        assert_eq!(pair.to_string(), "Ana → Beto");
    }

    /// Coarse distribution check for `n = 5`. The sampler is deliberately
    /// not uniform over derangements, so the reference is the algorithm's
    /// own law: enumerate all 120 equally likely shuffle outcomes to get
    /// the exact probability of each giver→receiver assignment, then test
    /// 10_000 seeded draws against it, count by count, with a two-sided
    /// binomial p-value.
    #[test]
    fn pair_frequencies_follow_exact_law() {
        const N: usize = 5;
        const RUNS: u64 = 10_000;

        let givers: Vec<usize> = (0..N).collect();
        let mut outcomes = [[0u64; N]; N];
        let mut num_outcomes = 0u64;

        for perm in (0..N).permutations(N) {
            let mut receivers = perm;
            resolve_fixed_points(&givers, &mut receivers);
            for (g, &r) in receivers.iter().enumerate() {
                outcomes[g][r] += 1;
            }
            num_outcomes += 1;
        }

        assert_eq!(num_outcomes, 120);

        // every non-self assignment must be reachable, no self assignment may be
        for g in 0..N {
            for r in 0..N {
                if g == r {
                    assert_eq!(outcomes[g][r], 0, "self pairing {}→{}", g, r);
                } else {
                    assert!(outcomes[g][r] > 0, "unreachable pairing {}→{}", g, r);
                }
            }
        }

        let mut rng = Pcg64Mcg::seed_from_u64(0x00A1_60D1);
        let mut sampled = [[0u64; N]; N];

        for _ in 0..RUNS {
            for pair in derange(&mut rng, &givers).unwrap() {
                sampled[pair.giver][pair.receiver] += 1;
            }
        }

        let significance = 1e-4;
        // Bonferroni correction across the N * (N - 1) tested counts
        let corrected_significance = significance / (N * (N - 1)) as f64;

        for g in 0..N {
            for r in 0..N {
                if g == r {
                    assert_eq!(sampled[g][r], 0);
                    continue;
                }

                let prob = outcomes[g][r] as f64 / num_outcomes as f64;
                let p_value = binomial_two_sided_p_value(RUNS, prob, sampled[g][r]);

                assert!(
                    p_value >= corrected_significance,
                    "pairing {}→{}: count {} of {} (exact p = {:.4}), p-value {:.2e}",
                    g,
                    r,
                    sampled[g][r],
                    RUNS,
                    prob,
                    p_value
                );
            }
        }
    }

    fn binomial_two_sided_p_value(num_draws: u64, success_prob: f64, actual_count: u64) -> f64 {
        use statrs::distribution::{Binomial, DiscreteCDF};

        let distr = Binomial::new(success_prob, num_draws).unwrap();
        let mean = success_prob * num_draws as f64;

        // probability that the binomial produces a count at least this extreme
        if mean >= actual_count as f64 {
            2.0 * distr.cdf(actual_count)
        } else {
            2.0 * (1.0 - distr.cdf(actual_count - 1))
        }
    }
}
