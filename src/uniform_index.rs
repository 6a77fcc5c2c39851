use rand::Rng;

/// Generates an index from the exclusive range `0..ub` uniformly at
/// random. It is functionally equivalent to `rng.gen_range(0..ub)`, but
/// kept as its own helper so the shuffle sweep's draw from the full
/// inclusive range `[0, i]` stays free of modulo bias.
///
/// # Warning
/// The upper bound must be strictly positive. This is not
/// checked in release builds!
///
/// # Example
/// ```
/// use amigo_shuffle::uniform_index::gen_index;
/// use rand::prelude::*;
///
/// for i in 1..100 {
///   let rand = gen_index(&mut rand::thread_rng(), i);
///   assert!(rand < i);
/// }
/// ```
pub fn gen_index(rng: &mut impl Rng, exclusive_ub: usize) -> usize {
    debug_assert!(exclusive_ub != 0);

    let ub = exclusive_ub as u64;
    let (mut lo, mut hi) = wide_multiply(rng.gen(), ub);

    if lo >= ub {
        return hi as usize;
    }

    // rejection threshold; draws with lo below it would skew the result
    let t = ub.wrapping_neg() % ub;

    loop {
        if lo >= t {
            return hi as usize;
        }

        (lo, hi) = wide_multiply(rng.gen(), ub);
    }
}

/// Multiplies two `u64` values and splits the 128 bit product into its
/// low and high words.
fn wide_multiply(a: u64, b: u64) -> (u64, u64) {
    let prod = (a as u128) * (b as u128);
    (prod as u64, (prod >> u64::BITS) as u64)
}
