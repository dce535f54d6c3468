//! Transition rule δ: Γ → Γ
//!
//! One fixed rule, applied to every cell exactly once:
//! - `B..=Z` → previous letter, `A` wraps to `Z`
//! - `b..=z` → previous letter, `a` wraps to `z`
//! - every other byte is written back unchanged

use super::Symbol;

/// Number of letters in each case range (cycle length of the rule)
pub const ALPHABET_LEN: usize = 26;

/// Apply the transition rule to a single symbol
///
/// Total over all 256 byte values; never fails.
#[inline]
pub fn shift_back(symbol: Symbol) -> Symbol {
    match symbol {
        b'A' => b'Z',
        b'a' => b'z',
        b'B'..=b'Z' | b'b'..=b'z' => symbol - 1,
        _ => symbol,
    }
}

/// Apply the transition rule `n` times
///
/// Equivalent to `n` calls of [`shift_back`], computed in O(1).
pub fn shift_back_by(symbol: Symbol, n: usize) -> Symbol {
    let base = match symbol {
        b'A'..=b'Z' => b'A',
        b'a'..=b'z' => b'a',
        _ => return symbol,
    };
    let offset = (symbol - base) as usize;
    let shift = n % ALPHABET_LEN;
    base + ((offset + ALPHABET_LEN - shift) % ALPHABET_LEN) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b'A', b'Z' ; "upper wraps")]
    #[test_case(b'a', b'z' ; "lower wraps")]
    #[test_case(b'M', b'L' ; "upper interior")]
    #[test_case(b'q', b'p' ; "lower interior")]
    #[test_case(b'5', b'5' ; "digit passes through")]
    #[test_case(b' ', b' ' ; "space passes through")]
    #[test_case(b'@', b'@' ; "byte before A")]
    #[test_case(b'[', b'[' ; "byte after Z")]
    #[test_case(b'`', b'`' ; "byte before a")]
    #[test_case(b'{', b'{' ; "byte after z")]
    #[test_case(0xC3, 0xC3 ; "non ascii")]
    fn test_shift_back(input: u8, expected: u8) {
        assert_eq!(shift_back(input), expected);
    }

    #[test]
    fn test_shift_by_matches_repeated_application() {
        for symbol in 0..=u8::MAX {
            let mut repeated = symbol;
            for n in 0..=60 {
                assert_eq!(shift_back_by(symbol, n), repeated, "symbol {symbol} n {n}");
                repeated = shift_back(repeated);
            }
        }
    }
}
