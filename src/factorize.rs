/*
 * // Copyright (c) Radzivon Bartoshyk 6/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::FftError;
use crate::handler::fault;

/// Radix sizes tried first, in this order. 4 precedes 2 so plans favor
/// the radix-4 butterfly wherever the length allows it.
pub(crate) const PREFERRED_FACTORS: [usize; 7] = [4, 2, 3, 5, 7, 11, 13];

/// Decomposes `n` into an ordered factor sequence whose product is `n`.
///
/// Factors are drawn from [`PREFERRED_FACTORS`] first; whatever remains
/// is split into primes by ascending odd trial division, so an arbitrary
/// prime length comes out as a single factor equal to the prime itself.
/// `factorize(1)` is the degenerate single-pass plan `[1]`.
pub fn factorize(n: usize) -> Result<Vec<usize>, FftError> {
    if n == 0 {
        fault!(FftError::ZeroSizedFft);
    }

    let mut factors = Vec::new();
    if n == 1 {
        factors.push(1);
        return Ok(factors);
    }

    let mut remainder = n;
    for &factor in PREFERRED_FACTORS.iter() {
        while remainder % factor == 0 {
            remainder /= factor;
            factors.push(factor);
        }
    }

    // Whatever is left carries only prime factors above the preferred
    // list; even candidates and small primes are already divided out.
    let mut candidate = 17;
    while remainder > 1 {
        if candidate * candidate > remainder {
            candidate = remainder;
        }
        while remainder % candidate == 0 {
            remainder /= candidate;
            factors.push(candidate);
        }
        candidate += 2;
    }

    // Guards arithmetic regressions in the loops above.
    if factors.iter().product::<usize>() != n {
        fault!(FftError::FactorizationFailed(n));
    }

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_products() {
        for n in 1..=2048usize {
            let factors = factorize(n).unwrap();
            assert!(!factors.is_empty(), "empty factorization for {n}");
            assert_eq!(factors.iter().product::<usize>(), n, "for length {n}");
        }
    }

    #[test]
    fn test_prefers_radix4() {
        assert_eq!(factorize(8).unwrap(), vec![4, 2]);
        assert_eq!(factorize(32).unwrap(), vec![4, 4, 2]);
        assert_eq!(factorize(60).unwrap(), vec![4, 3, 5]);
    }

    #[test]
    fn test_degenerate_and_prime_lengths() {
        assert_eq!(factorize(1).unwrap(), vec![1]);
        assert_eq!(factorize(17).unwrap(), vec![17]);
        assert_eq!(factorize(289).unwrap(), vec![17, 17]);
        assert_eq!(factorize(104729).unwrap(), vec![104729]);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(factorize(0), Err(FftError::ZeroSizedFft)));
    }
}
