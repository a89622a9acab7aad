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
use crate::err::{try_vec, FftError};
use crate::factorize::factorize;
use crate::handler::fault;
use crate::traits::{compute_twiddle, FftSample};
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Reusable transform plan for complex data of one fixed length.
///
/// Holds the factor sequence, one trigonometric lookup table with a
/// block per pass, and a scratch buffer ping-ponged against the caller's
/// data during execution. Building is O(n) and amortized across repeated
/// transforms; `factors` and the table are read-only once built, so a
/// plan can be rebuilt per thread and the heavy part shared by cloning
/// is never needed. Owned buffers are released on drop.
pub struct Wavetable<T> {
    pub(crate) n: usize,
    pub(crate) factors: Vec<usize>,
    pub(crate) twiddle: Vec<Complex<T>>,
    pub(crate) twiddle_offsets: Vec<usize>,
    pub(crate) scratch: Vec<Complex<T>>,
    // work buffers for the generic butterfly kernel, sized to the
    // largest factor without a specialized pass; execution must not
    // allocate, so these live with the plan
    pub(crate) generic_roots: Vec<Complex<T>>,
    pub(crate) generic_column: Vec<Complex<T>>,
}

impl<T: FftSample> Wavetable<T>
where
    f64: AsPrimitive<T>,
{
    /// Plans a transform of length `n`, factorizing it internally.
    pub fn new(n: usize) -> Result<Wavetable<T>, FftError> {
        let factors = factorize(n)?;
        Wavetable::with_factors(n, factors)
    }

    /// Plans a transform of length `n` over a caller-supplied factor
    /// sequence.
    ///
    /// The product of `factors` is not validated up front; a malformed
    /// plan is caught by the trigonometric table budget, never by
    /// out-of-bounds writes. Twiddles are stored for the forward
    /// direction and conjugated at execution time for inverse calls.
    pub fn with_factors(n: usize, factors: Vec<usize>) -> Result<Wavetable<T>, FftError> {
        if n == 0 {
            fault!(FftError::ZeroSizedFft);
        }
        if factors.is_empty() || factors.contains(&0) {
            fault!(FftError::FactorizationFailed(n));
        }

        let scratch = try_vec![Complex::zero(); n];

        let largest_generic = factors
            .iter()
            .copied()
            .filter(|factor| !matches!(factor, 2 | 3 | 4 | 5))
            .max()
            .unwrap_or(0);
        let generic_roots = try_vec![Complex::zero(); largest_generic];
        let generic_column = try_vec![Complex::zero(); largest_generic];

        if n == 1 {
            // Identity transform; no pass ever reads the table.
            return Ok(Wavetable {
                n,
                twiddle_offsets: vec![0; factors.len()],
                factors,
                twiddle: try_vec![],
                scratch,
                generic_roots,
                generic_column,
            });
        }

        let capacity = n;
        let mut twiddle = try_vec![Complex::zero(); capacity];
        let mut twiddle_offsets = Vec::new();
        twiddle_offsets.try_reserve_exact(factors.len()).map_err(|_| {
            crate::handler::flag(FftError::OutOfMemory(factors.len()), file!(), line!())
        })?;

        let mut t = 0usize;
        let mut product = 1usize;

        for &factor in factors.iter() {
            twiddle_offsets.push(t);

            let product_prev = product;
            product *= factor;
            let q = n / product;

            for j in 1..factor {
                let mut m = 0usize;
                for _ in 1..=q {
                    m = (m + j * product_prev) % n;
                    if t < capacity {
                        twiddle[t] = compute_twiddle(m, n, FftDirection::Forward);
                    }
                    t += 1;
                }
            }
        }

        // The recurrence telescopes to strictly fewer than n entries for
        // any factor sequence; tripping this means the planner regressed.
        if t > capacity {
            fault!(FftError::TableOverflow(t, capacity));
        }

        twiddle.truncate(t);

        Ok(Wavetable {
            n,
            factors,
            twiddle,
            twiddle_offsets,
            scratch,
            generic_roots,
            generic_column,
        })
    }

    /// Transform length this plan was built for.
    pub fn length(&self) -> usize {
        self.n
    }

    /// The ordered factor sequence driving the pass loop.
    pub fn factors(&self) -> &[usize] {
        &self.factors
    }
}
