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
use crate::traits::{compute_twiddle, FftSample};
use crate::wavetable::Wavetable;
use crate::FftDirection;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Which buffer holds the live data between passes.
#[derive(Copy, Clone, Eq, PartialEq)]
enum PingPong {
    Data,
    Scratch,
}

impl<T: FftSample> Wavetable<T>
where
    f64: AsPrimitive<T>,
{
    /// Applies the planned transform to `data`, in place.
    ///
    /// One pass per planned factor, ping-ponging between `data` and the
    /// plan's scratch buffer; after an odd pass count the result is
    /// copied back, so `data` always holds the output on return. Forward
    /// output is unnormalized, the inverse direction scales by `1/n`.
    /// Execution never allocates (all work buffers are owned by the
    /// plan) and shape errors are raised before the first pass runs, so
    /// on failure the buffer is always untouched.
    pub fn transform(
        &mut self,
        data: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), FftError> {
        self.transform_strided(data, 1, direction)
    }

    /// Strided variant of [`Wavetable::transform`]: element `i` of the
    /// logical sequence lives at `data[i * stride]` and
    /// `data.len() == n·stride`.
    pub fn transform_strided(
        &mut self,
        data: &mut [Complex<T>],
        stride: usize,
        direction: FftDirection,
    ) -> Result<(), FftError> {
        let n = self.n;
        if stride == 0 || data.is_empty() {
            fault!(FftError::ZeroSizedFft);
        }
        // checked so an adversarial stride cannot wrap the product
        match n.checked_mul(stride) {
            Some(required) if data.len() == required => {}
            _ => fault!(FftError::LengthMismatch(n, data.len() / stride)),
        }
        if n == 1 {
            // identity transform; 1/n normalization is also the identity
            return Ok(());
        }

        let factors = &self.factors;
        let offsets = &self.twiddle_offsets;
        let twiddle = &self.twiddle;
        let scratch = &mut self.scratch[..];
        let roots = &mut self.generic_roots[..];
        let column = &mut self.generic_column[..];

        let mut state = PingPong::Data;
        let mut product = 1usize;

        for (i, &factor) in factors.iter().enumerate() {
            product *= factor;
            let block = &twiddle[offsets[i]..];

            match state {
                PingPong::Data => dispatch_pass(
                    data, stride, scratch, 1, factor, product, n, block, roots, column, direction,
                ),
                PingPong::Scratch => dispatch_pass(
                    scratch, 1, data, stride, factor, product, n, block, roots, column, direction,
                ),
            }

            state = match state {
                PingPong::Data => PingPong::Scratch,
                PingPong::Scratch => PingPong::Data,
            };
        }

        if state == PingPong::Scratch {
            // odd pass count: the last pass wrote into scratch
            if stride == 1 {
                data.copy_from_slice(scratch);
            } else {
                for (i, value) in scratch.iter().enumerate() {
                    data[i * stride] = *value;
                }
            }
        }

        if direction == FftDirection::Inverse {
            let norm: T = (1.0 / n as f64).as_();
            for i in 0..n {
                data[i * stride] = data[i * stride] * norm;
            }
        }

        Ok(())
    }
}

/// Free-function form of [`Wavetable::transform`]. The wavetable's `n`
/// must equal `data.len()`.
pub fn transform_general<T: FftSample>(
    data: &mut [Complex<T>],
    direction: FftDirection,
    wavetable: &mut Wavetable<T>,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    wavetable.transform(data, direction)
}

/// Per-group twiddle for butterfly column `k`. `group` is the output row
/// minus one; column 0 always multiplies by unity.
#[inline]
fn pass_twiddle<T: FftSample>(
    twiddles: &[Complex<T>],
    k: usize,
    group: usize,
    q: usize,
    direction: FftDirection,
) -> Complex<T> {
    if k == 0 {
        return Complex::new(T::one(), T::zero());
    }
    let w = twiddles[group * q + (k - 1)];
    match direction {
        FftDirection::Forward => w,
        FftDirection::Inverse => w.conj(),
    }
}

#[inline]
fn butterfly_sign<T: FftSample>(direction: FftDirection) -> T {
    match direction {
        FftDirection::Forward => -T::one(),
        FftDirection::Inverse => T::one(),
    }
}

#[allow(clippy::too_many_arguments)]
fn dispatch_pass<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    factor: usize,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    roots: &mut [Complex<T>],
    column: &mut [Complex<T>],
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    match factor {
        2 => pass_2(input, istride, output, ostride, product, n, twiddles, direction),
        3 => pass_3(input, istride, output, ostride, product, n, twiddles, direction),
        4 => pass_4(input, istride, output, ostride, product, n, twiddles, direction),
        5 => pass_5(input, istride, output, ostride, product, n, twiddles, direction),
        _ => pass_generic(
            input, istride, output, ostride, factor, product, n, twiddles, roots, column,
            direction,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn pass_2<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    direction: FftDirection,
) {
    let factor = 2;
    let m = n / factor;
    let q = n / product;
    let product_1 = product / factor;
    let jump = (factor - 1) * product_1;

    let mut i = 0usize;
    let mut j = 0usize;

    for k in 0..q {
        let w = pass_twiddle(twiddles, k, 0, q, direction);

        for _ in 0..product_1 {
            let z0 = input[i * istride];
            let z1 = input[(i + m) * istride];
            i += 1;

            let x0 = z0 + z1;
            let x1 = z0 - z1;

            output[j * ostride] = x0;
            output[(j + product_1) * ostride] = w * x1;
            j += 1;
        }
        j += jump;
    }
}

#[allow(clippy::too_many_arguments)]
fn pass_3<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let factor = 3;
    let m = n / factor;
    let q = n / product;
    let product_1 = product / factor;
    let jump = (factor - 1) * product_1;

    let half: T = 0.5.as_();
    let tau: T = butterfly_sign::<T>(direction) * (0.75f64.sqrt()).as_();

    let mut i = 0usize;
    let mut j = 0usize;

    for k in 0..q {
        let w1 = pass_twiddle(twiddles, k, 0, q, direction);
        let w2 = pass_twiddle(twiddles, k, 1, q, direction);

        for _ in 0..product_1 {
            let z0 = input[i * istride];
            let z1 = input[(i + m) * istride];
            let z2 = input[(i + 2 * m) * istride];
            i += 1;

            let t1 = z1 + z2;
            let t2 = z0 - t1 * half;
            let t3 = (z1 - z2) * tau;

            let x0 = z0 + t1;
            let x1 = Complex::new(t2.re - t3.im, t2.im + t3.re);
            let x2 = Complex::new(t2.re + t3.im, t2.im - t3.re);

            output[j * ostride] = x0;
            output[(j + product_1) * ostride] = w1 * x1;
            output[(j + 2 * product_1) * ostride] = w2 * x2;
            j += 1;
        }
        j += jump;
    }
}

#[allow(clippy::too_many_arguments)]
fn pass_4<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    direction: FftDirection,
) {
    let factor = 4;
    let m = n / factor;
    let q = n / product;
    let product_1 = product / factor;
    let jump = (factor - 1) * product_1;

    let sign: T = butterfly_sign(direction);

    let mut i = 0usize;
    let mut j = 0usize;

    for k in 0..q {
        let w1 = pass_twiddle(twiddles, k, 0, q, direction);
        let w2 = pass_twiddle(twiddles, k, 1, q, direction);
        let w3 = pass_twiddle(twiddles, k, 2, q, direction);

        for _ in 0..product_1 {
            let z0 = input[i * istride];
            let z1 = input[(i + m) * istride];
            let z2 = input[(i + 2 * m) * istride];
            let z3 = input[(i + 3 * m) * istride];
            i += 1;

            let t1 = z0 + z2;
            let t2 = z1 + z3;
            let t3 = z0 - z2;
            let t4 = (z1 - z3) * sign;

            let x0 = t1 + t2;
            let x1 = Complex::new(t3.re - t4.im, t3.im + t4.re);
            let x2 = t1 - t2;
            let x3 = Complex::new(t3.re + t4.im, t3.im - t4.re);

            output[j * ostride] = x0;
            output[(j + product_1) * ostride] = w1 * x1;
            output[(j + 2 * product_1) * ostride] = w2 * x2;
            output[(j + 3 * product_1) * ostride] = w3 * x3;
            j += 1;
        }
        j += jump;
    }
}

#[allow(clippy::too_many_arguments)]
fn pass_5<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let factor = 5;
    let m = n / factor;
    let q = n / product;
    let product_1 = product / factor;
    let jump = (factor - 1) * product_1;

    let quarter: T = 0.25.as_();
    let root5_4: T = (5f64.sqrt() / 4.0).as_();
    let sign: T = butterfly_sign(direction);
    let sin_2pi_5: T = ((2.0 * std::f64::consts::PI / 5.0).sin()).as_() * sign;
    let sin_2pi_10: T = ((2.0 * std::f64::consts::PI / 10.0).sin()).as_() * sign;

    let mut i = 0usize;
    let mut j = 0usize;

    for k in 0..q {
        let w1 = pass_twiddle(twiddles, k, 0, q, direction);
        let w2 = pass_twiddle(twiddles, k, 1, q, direction);
        let w3 = pass_twiddle(twiddles, k, 2, q, direction);
        let w4 = pass_twiddle(twiddles, k, 3, q, direction);

        for _ in 0..product_1 {
            let z0 = input[i * istride];
            let z1 = input[(i + m) * istride];
            let z2 = input[(i + 2 * m) * istride];
            let z3 = input[(i + 3 * m) * istride];
            let z4 = input[(i + 4 * m) * istride];
            i += 1;

            let t1 = z1 + z4;
            let t2 = z2 + z3;
            let t3 = z1 - z4;
            let t4 = z2 - z3;
            let t5 = t1 + t2;
            let t6 = (t1 - t2) * root5_4;
            let t7 = z0 - t5 * quarter;
            let t8 = t7 + t6;
            let t9 = t7 - t6;
            let t10 = t3 * sin_2pi_5 + t4 * sin_2pi_10;
            let t11 = t3 * sin_2pi_10 - t4 * sin_2pi_5;

            let x0 = z0 + t5;
            let x1 = Complex::new(t8.re - t10.im, t8.im + t10.re);
            let x2 = Complex::new(t9.re - t11.im, t9.im + t11.re);
            let x3 = Complex::new(t9.re + t11.im, t9.im - t11.re);
            let x4 = Complex::new(t8.re + t10.im, t8.im - t10.re);

            output[j * ostride] = x0;
            output[(j + product_1) * ostride] = w1 * x1;
            output[(j + 2 * product_1) * ostride] = w2 * x2;
            output[(j + 3 * product_1) * ostride] = w3 * x3;
            output[(j + 4 * product_1) * ostride] = w4 * x4;
            j += 1;
        }
        j += jump;
    }
}

/// Fallback kernel for any factor without a specialized butterfly; an
/// O(factor²) DFT per column, still fed by the pass's twiddle block.
/// `roots` and `column` are the plan-owned work buffers, so the pass
/// itself never allocates.
#[allow(clippy::too_many_arguments)]
fn pass_generic<T: FftSample>(
    input: &[Complex<T>],
    istride: usize,
    output: &mut [Complex<T>],
    ostride: usize,
    factor: usize,
    product: usize,
    n: usize,
    twiddles: &[Complex<T>],
    roots: &mut [Complex<T>],
    column: &mut [Complex<T>],
    direction: FftDirection,
) where
    f64: AsPrimitive<T>,
{
    let m = n / factor;
    let q = n / product;
    let product_1 = product / factor;
    let jump = (factor - 1) * product_1;

    let roots = &mut roots[..factor];
    for (t, root) in roots.iter_mut().enumerate() {
        *root = compute_twiddle(t, factor, direction);
    }

    let column = &mut column[..factor];

    let mut i = 0usize;
    let mut j = 0usize;

    for k in 0..q {
        for _ in 0..product_1 {
            for (e, slot) in column.iter_mut().enumerate() {
                *slot = input[(i + e * m) * istride];
            }
            i += 1;

            for u in 0..factor {
                let mut sum = Complex::<T>::zero();
                for (e, z) in column.iter().enumerate() {
                    sum = sum + *z * roots[(u * e) % factor];
                }
                let w = if u == 0 {
                    Complex::new(T::one(), T::zero())
                } else {
                    pass_twiddle(twiddles, k, u - 1, q, direction)
                };
                output[(j + u * product_1) * ostride] = w * sum;
            }
            j += 1;
        }
        j += jump;
    }
}
