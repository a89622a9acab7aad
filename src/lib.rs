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
//! Mixed-radix FFT with precomputed trigonometric wavetables.
//!
//! Two execution paths share one set of conventions. [`transform_radix2`]
//! is a self-contained, zero-allocation path for power-of-two lengths.
//! [`Wavetable`] plans an arbitrary length once (factorization plus a
//! packed twiddle table) and [`Wavetable::transform`] then runs one pass
//! per factor, with specialized butterflies for radices 2 through 5 and a
//! generic kernel for anything else.
//!
//! Forward transforms are unnormalized; the inverse scales by `1/n`, so a
//! forward/inverse round trip reproduces the input.
//!
//! ```
//! use num_complex::Complex;
//! use wavefft::{FftDirection, Wavetable};
//!
//! let mut data = vec![Complex::new(1.0f64, 0.0); 6];
//! let mut plan = Wavetable::new(6)?;
//! plan.transform(&mut data, FftDirection::Forward)?;
//! assert!((data[0].re - 6.0).abs() < 1e-12);
//! # Ok::<(), wavefft::FftError>(())
//! ```

mod err;
mod factorize;
mod handler;
mod mixed_radix;
mod radix2;
mod real_wavetable;
mod traits;
mod wavetable;

pub use err::FftError;
pub use factorize::factorize;
pub use handler::{set_fault_handler, FaultHandler};
pub use mixed_radix::transform_general;
pub use radix2::{transform_radix2, transform_radix2_strided};
pub use real_wavetable::RealWavetable;
pub use traits::{FftSample, FftTrigonometry};
pub use wavetable::Wavetable;

/// Direction of a transform. The inverse is the conjugate transform
/// scaled by `1/n`.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}
