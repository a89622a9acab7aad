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
use crate::traits::{FftSample, FftTrigonometry};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Transform plan for real-valued data of one fixed length.
///
/// Real-input spectra are conjugate-symmetric, so the table packs only
/// `⌈n/2⌉` entries; that budget is a hard bound checked at construction
/// time, which makes it the place where a malformed factor sequence is
/// rejected. The scratch buffer is real and sized `n`. Distinct from
/// [`crate::Wavetable`] on purpose: the two kinds of plan have different
/// sizing policies and are never interchangeable.
pub struct RealWavetable<T> {
    pub(crate) n: usize,
    pub(crate) factors: Vec<usize>,
    pub(crate) twiddle: Vec<Complex<T>>,
    pub(crate) twiddle_offsets: Vec<usize>,
    pub(crate) scratch: Vec<T>,
}

impl<T: FftSample> RealWavetable<T>
where
    f64: AsPrimitive<T>,
{
    /// Plans a real-input transform of length `n`.
    pub fn new(n: usize) -> Result<RealWavetable<T>, FftError> {
        let factors = factorize(n)?;
        RealWavetable::with_factors(n, factors)
    }

    /// Plans over a caller-supplied factor sequence. A plan whose
    /// twiddle demand exceeds the packed budget fails with
    /// [`FftError::TableOverflow`].
    pub fn with_factors(n: usize, factors: Vec<usize>) -> Result<RealWavetable<T>, FftError> {
        if n == 0 {
            fault!(FftError::ZeroSizedFft);
        }
        if factors.is_empty() || factors.contains(&0) {
            fault!(FftError::FactorizationFailed(n));
        }

        let scratch = try_vec![T::zero(); n];

        if n == 1 {
            return Ok(RealWavetable {
                n,
                twiddle_offsets: vec![0; factors.len()],
                factors,
                twiddle: try_vec![],
                scratch,
            });
        }

        let capacity = n.div_ceil(2);
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
                for _ in 1..(product_prev + 1) / 2 {
                    m = (m + j * q) % n;
                    if t < capacity {
                        // positive-angle convention of the real tables
                        let angle: T = (2.0 * m as f64 / n as f64).as_();
                        let (v_sin, v_cos) = angle.sincos_pi();
                        twiddle[t] = Complex {
                            re: v_cos,
                            im: v_sin,
                        };
                    }
                    t += 1;
                }
            }
        }

        if t > capacity {
            fault!(FftError::TableOverflow(t, capacity));
        }

        twiddle.truncate(t);

        Ok(RealWavetable {
            n,
            factors,
            twiddle,
            twiddle_offsets,
            scratch,
        })
    }

    /// Transform length this plan was built for.
    pub fn length(&self) -> usize {
        self.n
    }

    /// The ordered factor sequence of the plan.
    pub fn factors(&self) -> &[usize] {
        &self.factors
    }

    /// The packed trigonometric table, one block per pass.
    pub fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddle
    }

    /// Starting offset of each pass's block inside [`Self::twiddles`].
    pub fn pass_offsets(&self) -> &[usize] {
        &self.twiddle_offsets
    }

    /// Exclusive checkout of the per-plan scratch buffer. Concurrent
    /// transforms must each use their own plan; the `&mut` receiver
    /// enforces that.
    pub fn scratch(&mut self) -> &mut [T] {
        &mut self.scratch
    }
}
