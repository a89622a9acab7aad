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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FftError {
    ZeroSizedFft,
    FactorizationFailed(usize),
    /// (entries demanded, table budget)
    TableOverflow(usize, usize),
    OutOfMemory(usize),
    NotPowerOfTwo(usize),
    /// (length the plan was built for, length the buffer holds)
    LengthMismatch(usize, usize),
}

impl Error for FftError {}

impl std::fmt::Display for FftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftError::ZeroSizedFft => {
                f.write_str("Cannot plan or execute an FFT of zero length")
            }
            FftError::FactorizationFailed(n) => {
                f.write_fmt(format_args!("Length {n} could not be factorized"))
            }
            FftError::TableOverflow(written, capacity) => f.write_fmt(format_args!(
                "Trigonometric table overflow: plan demands {written} entries against a budget of {capacity}"
            )),
            FftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector"))
            }
            FftError::NotPowerOfTwo(n) => f.write_fmt(format_args!(
                "Radix-2 transform requires a power-of-two length, but it was {n}"
            )),
            FftError::LengthMismatch(expected, got) => f.write_fmt(format_args!(
                "Wavetable length expected to be {expected}, but the buffer holds {got}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n).map_err(|_| {
            crate::handler::flag(crate::err::FftError::OutOfMemory($n), file!(), line!())
        })?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
