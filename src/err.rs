/*
 * // Copyright (c) Radzivon Bartoshyk 11/2025. All rights reserved.
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
    TooManyFactors(usize),
    OutOfMemory(usize),
    InvalidInPlaceLength(usize, usize),
    ShapeMismatch(usize, usize),
    TooManyAxes(usize, usize),
    InvalidAxis(usize, usize),
    ZeroStrideAxis(usize),
    StrideOutOfBounds(isize, usize),
}

impl Error for FftError {}

impl std::fmt::Display for FftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftError::ZeroSizedFft => f.write_str("Cannot execute FFT on zero-sized buffers"),
            FftError::TooManyFactors(length) => f.write_fmt(format_args!(
                "Length {length} has too many prime factors to build a plan"
            )),
            FftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements"))
            }
            FftError::InvalidInPlaceLength(s0, s1) => f.write_fmt(format_args!(
                "In-place length expected to be {s0}, but it was {s1}"
            )),
            FftError::ShapeMismatch(s0, s1) => f.write_fmt(format_args!(
                "Stride array has {s0} entries, but the shape has {s1} dimensions"
            )),
            FftError::TooManyAxes(nax, ndim) => f.write_fmt(format_args!(
                "{nax} transform axes requested on a {ndim}-dimensional array"
            )),
            FftError::InvalidAxis(axis, ndim) => f.write_fmt(format_args!(
                "Axis {axis} is out of bounds for a {ndim}-dimensional array"
            )),
            FftError::ZeroStrideAxis(axis) => {
                f.write_fmt(format_args!("Transformed axis {axis} has zero stride"))
            }
            FftError::StrideOutOfBounds(offset, len) => f.write_fmt(format_args!(
                "Stride layout addresses element {offset} of a buffer with {len} elements"
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
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::FftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
