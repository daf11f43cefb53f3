use crate::squares::square_cache::SquareCache;

/// Computes square numbers without multiplication, from the recurrence over
/// consecutive odd numbers:
///
/// ```text
/// square(n)      = square(n-1) + forward(n-1)
/// forward(n)     = forward(n-1) + 2
/// backward(n)    = forward(n) - 2
/// ```
///
/// `forward(n) = 2n + 1` is the delta to the next square, `backward(n) = 2n - 1`
/// the delta from the previous one. Three equivalent strategies are provided
/// (plain recursion, tail recursion, a bounded loop), all memoizing through a
/// caller-supplied `SquareCache`.
///
/// Negative `n` squares like its magnitude; the progression deltas flip sign
/// (counting away from zero steps the other way along the odd numbers) while
/// the square does not. All three strategies apply the same rule.
///
/// The square overflows `i64` past `|n|` around `3 * 10^9`, and the recursive
/// strategies burn one stack frame per index, so these are meant for the
/// small-magnitude inputs the recurrence is interesting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareProgression {
    /// Delta from the previous square, `2n - 1`.
    pub backward: i64,
    /// Delta to the next square, `2n + 1`.
    pub forward: i64,
    /// `n^2`, built by summing forward deltas.
    pub square: i64,
}

impl SquareProgression {
    /// The entry at `n = 0`: deltas bracket zero, square is zero.
    pub const BASE: SquareProgression = SquareProgression {
        backward: -1,
        forward: 1,
        square: 0,
    };

    /// The entry one index up: both deltas advance by 2 and the old forward
    /// delta lands on the square.
    pub fn step(&self) -> SquareProgression {
        SquareProgression {
            backward: self.backward + 2,
            forward: self.forward + 2,
            square: self.square + self.forward,
        }
    }

    /// The entry for `-n`: deltas flip sign, the square stays.
    pub fn negated(&self) -> SquareProgression {
        SquareProgression {
            backward: -self.backward,
            forward: -self.forward,
            square: self.square,
        }
    }
}

/// Plain recursion: the entry for `n` is one `step` past the entry for
/// `n - 1`. Every index on the way down gets cached while the call stack
/// unwinds, so a later call for any smaller index is a lookup.
pub fn recursive_square(n: i64, cache: &mut SquareCache) -> SquareProgression {
    if let Some(hit) = cache.get(n) {
        return hit;
    }
    let result = if n < 0 {
        recursive_square(-n, cache).negated()
    } else {
        recursive_square(n - 1, cache).step()
    };
    cache.insert(n, result);
    result
}

/// Tail recursion: the recursive call is the last operation, with the current
/// entry carried in an accumulator parameter instead of combined while
/// unwinding. A cached entry for `n - 1` short-circuits the walk entirely by
/// taking a single `step`.
pub fn tail_recursive_square(n: i64, cache: &mut SquareCache) -> SquareProgression {
    if let Some(hit) = cache.get(n) {
        return hit;
    }
    if n < 0 {
        let result = tail_recursive_square(-n, cache).negated();
        cache.insert(n, result);
        return result;
    }
    if let Some(previous) = cache.get(n - 1) {
        let result = previous.step();
        cache.insert(n, result);
        return result;
    }
    let result = tail_step(n, 0, SquareProgression::BASE, cache);
    cache.insert(n, result);
    result
}

fn tail_step(
    remaining: i64,
    idx: i64,
    current: SquareProgression,
    cache: &mut SquareCache,
) -> SquareProgression {
    cache.insert(idx, current);
    if remaining == 0 {
        return current;
    }
    tail_step(remaining - 1, idx + 1, current.step(), cache)
}

/// The same recurrence as a bounded loop, O(n) time and O(1) space beyond the
/// cache. Every index walked gets cached.
pub fn iterative_square(n: i64, cache: &mut SquareCache) -> SquareProgression {
    if let Some(hit) = cache.get(n) {
        return hit;
    }
    let magnitude = n.abs();
    let mut current = SquareProgression::BASE;
    for idx in 0..magnitude {
        cache.insert(idx, current);
        current = current.step();
    }
    cache.insert(magnitude, current);
    let result = if n < 0 { current.negated() } else { current };
    cache.insert(n, result);
    result
}
