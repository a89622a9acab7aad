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
use crate::traits::{FftSample, FftTrigonometry};
use crate::FftDirection;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// In-place radix-2 decimation-in-time transform.
///
/// The self-contained fast path: no wavetable, no allocation. Stage
/// twiddles come from a stable sin-based recurrence instead of a lookup
/// table. `data.len()` must be an exact power of two; on any precondition
/// failure the buffer is left untouched. Forward output is unnormalized,
/// the inverse direction scales by `1/n`.
pub fn transform_radix2<T: FftSample>(
    data: &mut [Complex<T>],
    direction: FftDirection,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    let n = data.len();
    transform_radix2_strided(data, 1, n, direction)
}

/// Strided variant of [`transform_radix2`]: element `i` of the logical
/// sequence lives at `data[i * stride]`.
pub fn transform_radix2_strided<T: FftSample>(
    data: &mut [Complex<T>],
    stride: usize,
    n: usize,
    direction: FftDirection,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    if n == 0 || stride == 0 {
        fault!(FftError::ZeroSizedFft);
    }
    if !n.is_power_of_two() {
        fault!(FftError::NotPowerOfTwo(n));
    }
    // checked so an adversarial stride cannot wrap the span arithmetic
    let span = (n - 1)
        .checked_mul(stride)
        .and_then(|last| last.checked_add(1));
    match span {
        Some(span) if data.len() >= span => {}
        _ => fault!(FftError::LengthMismatch(n, data.len() / stride)),
    }
    if n == 1 {
        return Ok(());
    }

    let stages = n.trailing_zeros();

    // Gold-Rader bit-reversal permutation, in place.
    let mut j = 0usize;
    for i in 0..n - 1 {
        if i < j {
            data.swap(i * stride, j * stride);
        }
        let mut k = n / 2;
        while k <= j {
            j -= k;
            k /= 2;
        }
        j += k;
    }

    let sign = match direction {
        FftDirection::Forward => -1.0f64,
        FftDirection::Inverse => 1.0f64,
    };

    let mut dual = 1usize;
    for _ in 0..stages {
        // a == 0: w = 1, no multiply
        let mut b = 0usize;
        while b < n {
            let i0 = b * stride;
            let i1 = (b + dual) * stride;
            let wd = data[i1];
            data[i1] = data[i0] - wd;
            data[i0] = data[i0] + wd;
            b += 2 * dual;
        }

        // remaining columns advance w by exp(sign·iπ/dual) per step,
        // using the 2sin²(θ/2) form to keep the recurrence stable
        let angle: T = (sign / dual as f64).as_();
        let (s, _) = angle.sincos_pi();
        let half_angle: T = (sign / (2.0 * dual as f64)).as_();
        let (s_half, _) = half_angle.sincos_pi();
        let s2 = (s_half * s_half) * (2.0.as_());

        let mut w_re = T::one();
        let mut w_im = T::zero();

        for a in 1..dual {
            let tmp = w_re - s * w_im - s2 * w_re;
            w_im = w_im + s * w_re - s2 * w_im;
            w_re = tmp;

            let mut b = 0usize;
            while b < n {
                let i0 = (b + a) * stride;
                let i1 = (b + a + dual) * stride;
                let z1 = data[i1];
                let wd = Complex {
                    re: w_re * z1.re - w_im * z1.im,
                    im: w_re * z1.im + w_im * z1.re,
                };
                data[i1] = data[i0] - wd;
                data[i0] = data[i0] + wd;
                b += 2 * dual;
            }
        }

        dual *= 2;
    }

    if direction == FftDirection::Inverse {
        let norm: T = (1.0 / n as f64).as_();
        for i in 0..n {
            data[i * stride] = data[i * stride] * norm;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_radix2_roundtrip() {
        for i in 1..14 {
            let size = 2usize.pow(i);
            let mut input = vec![Complex::<f64>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let src = input.to_vec();
            transform_radix2(&mut input, FftDirection::Forward).unwrap();
            transform_radix2(&mut input, FftDirection::Inverse).unwrap();

            input.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!(
                    (a.re - b.re).abs() < 1e-9,
                    "a_re {} != b_re {} for size {}",
                    a.re,
                    b.re,
                    size
                );
                assert!(
                    (a.im - b.im).abs() < 1e-9,
                    "a_im {} != b_im {} for size {}",
                    a.im,
                    b.im,
                    size
                );
            });
        }
    }

    #[test]
    fn test_radix2_impulse() {
        // impulse of amplitude 1 at index 3: the spectrum is
        // exp(-2πi·3k/8) for k = 0..7
        let mut data = vec![Complex::<f64>::default(); 8];
        data[3] = Complex::new(1.0, 0.0);
        transform_radix2(&mut data, FftDirection::Forward).unwrap();
        for (k, z) in data.iter().enumerate() {
            let theta = -2.0 * std::f64::consts::PI * 3.0 * k as f64 / 8.0;
            assert!(
                (z.re - theta.cos()).abs() < 1e-12 && (z.im - theta.sin()).abs() < 1e-12,
                "bin {k}: got {z}, expected ({}, {})",
                theta.cos(),
                theta.sin()
            );
        }
    }

    #[test]
    fn test_not_power_of_two_leaves_buffer_untouched() {
        let mut data: Vec<Complex<f32>> = (0..15)
            .map(|i| Complex::new(i as f32, -(i as f32)))
            .collect();
        let src = data.to_vec();
        assert!(matches!(
            transform_radix2(&mut data, FftDirection::Forward),
            Err(FftError::NotPowerOfTwo(15))
        ));
        assert_eq!(data, src);
    }

    #[test]
    fn test_huge_stride_is_rejected_not_wrapped() {
        // (n - 1) * stride overflows usize; the shape check must report
        // the mismatch instead of wrapping and passing validation
        let mut data = vec![Complex::new(1.0f64, 0.0); 4];
        let src = data.to_vec();
        assert!(matches!(
            transform_radix2_strided(&mut data, usize::MAX / 2, 8, FftDirection::Forward),
            Err(FftError::LengthMismatch(8, 0))
        ));
        assert_eq!(data, src);
    }

    #[test]
    fn test_strided_matches_dense() {
        let n = 64usize;
        let stride = 3usize;
        let mut dense = vec![Complex::<f64>::default(); n];
        for z in dense.iter_mut() {
            *z = Complex {
                re: rand::rng().random(),
                im: rand::rng().random(),
            };
        }

        let mut strided = vec![Complex::new(f64::NAN, f64::NAN); (n - 1) * stride + 1];
        for (i, z) in dense.iter().enumerate() {
            strided[i * stride] = *z;
        }

        transform_radix2(&mut dense, FftDirection::Forward).unwrap();
        transform_radix2_strided(&mut strided, stride, n, FftDirection::Forward).unwrap();

        for (i, a) in dense.iter().enumerate() {
            let b = strided[i * stride];
            assert!((a.re - b.re).abs() < 1e-12 && (a.im - b.im).abs() < 1e-12);
        }
    }
}
