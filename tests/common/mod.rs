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
//! Closed-form signal fixtures shared by the integration suites. Each
//! generator returns an (input, expected forward spectrum) pair.
#![allow(dead_code)]

use num_complex::Complex;
use rand::Rng;

pub const TAU: f64 = 2.0 * std::f64::consts::PI;

/// Unit impulse of amplitude `z` at index `index`. The spectrum is the
/// exponential ramp `z · exp(-2πi·index·k/n)`.
pub fn pulse(n: usize, index: usize, z: Complex<f64>) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let mut signal = vec![Complex::new(0.0, 0.0); n];
    signal[index] = z;
    let spectrum = (0..n)
        .map(|k| {
            let theta = -TAU * ((index * k) % n) as f64 / n as f64;
            z * Complex::new(theta.cos(), theta.sin())
        })
        .collect();
    (signal, spectrum)
}

/// Constant sequence of value `z`. The spectrum is a single impulse of
/// amplitude `n·z` at bin 0.
pub fn constant(n: usize, z: Complex<f64>) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let signal = vec![z; n];
    let mut spectrum = vec![Complex::new(0.0, 0.0); n];
    spectrum[0] = z * n as f64;
    (signal, spectrum)
}

/// Complex exponential at integer frequency `freq`, amplitude `z`. The
/// spectrum is a unit impulse at bin `freq` scaled by `n·z`.
pub fn exponential(n: usize, freq: usize, z: Complex<f64>) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let signal = (0..n)
        .map(|t| {
            let theta = TAU * ((freq * t) % n) as f64 / n as f64;
            z * Complex::new(theta.cos(), theta.sin())
        })
        .collect();
    let mut spectrum = vec![Complex::new(0.0, 0.0); n];
    spectrum[freq] = z * n as f64;
    (signal, spectrum)
}

/// Sum of two exponentials at distinct frequencies. Validates linearity:
/// the spectrum is the sum of the two single-bin impulses.
pub fn exponential_pair(
    n: usize,
    freq_a: usize,
    freq_b: usize,
    za: Complex<f64>,
    zb: Complex<f64>,
) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let (sig_a, spec_a) = exponential(n, freq_a, za);
    let (sig_b, spec_b) = exponential(n, freq_b, zb);
    let signal = sig_a.iter().zip(sig_b.iter()).map(|(a, b)| a + b).collect();
    let spectrum = spec_a.iter().zip(spec_b.iter()).map(|(a, b)| a + b).collect();
    (signal, spectrum)
}

/// Plain random complex signal, for suites that need an input but no
/// closed-form spectrum. [`noise`] costs an O(n²) reference summation;
/// this does not.
pub fn random_signal(n: usize) -> Vec<Complex<f64>> {
    let mut signal = vec![Complex::new(0.0, 0.0); n];
    for z in signal.iter_mut() {
        *z = Complex {
            re: rand::rng().random::<f64>() - 0.5,
            im: rand::rng().random::<f64>() - 0.5,
        };
    }
    signal
}

/// Pseudo-random complex noise with the expected spectrum computed by an
/// independent direct O(n²) summation.
pub fn noise(n: usize) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let signal = random_signal(n);
    let spectrum = direct_dft(&signal);
    (signal, spectrum)
}

/// Pseudo-random noise confined to the real lane, same oracle.
pub fn real_noise(n: usize) -> (Vec<Complex<f64>>, Vec<Complex<f64>>) {
    let mut signal = vec![Complex::new(0.0, 0.0); n];
    for z in signal.iter_mut() {
        z.re = rand::rng().random::<f64>() - 0.5;
    }
    let spectrum = direct_dft(&signal);
    (signal, spectrum)
}

/// Reference direct summation, deliberately independent of any transform
/// machinery under test.
pub fn direct_dft(input: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = input.len();
    (0..n)
        .map(|k| {
            let mut sum = Complex::new(0.0, 0.0);
            for (t, z) in input.iter().enumerate() {
                let theta = -TAU * ((k * t) % n) as f64 / n as f64;
                sum += z * Complex::new(theta.cos(), theta.sin());
            }
            sum
        })
        .collect()
}

/// Largest absolute deviation between two spectra, normalized by the
/// input's L2 magnitude so tolerances are scale-free.
pub fn max_relative_error(got: &[Complex<f64>], expected: &[Complex<f64>]) -> f64 {
    let scale: f64 = expected
        .iter()
        .map(|z| z.norm_sqr())
        .sum::<f64>()
        .sqrt()
        .max(1.0);
    got.iter()
        .zip(expected.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0.0f64, f64::max)
        / scale
}
