/*
 * // Copyright (c) Radzivon Bartoshyk 12/2025. All rights reserved.
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
use crate::bluestein::BluesteinFft;
use crate::cfft::CfftPlan;
use crate::err::FftError;
use crate::rfft::RfftPlan;
use crate::util::{cost_guess, good_size, largest_prime_factor};
use crate::FftSample;
use num_complex::Complex;
use num_traits::AsPrimitive;

// Empirical weight on the Bluestein side of the cost comparison; do not
// tune without a benchmark.
const BLUESTEIN_FUDGE: f64 = 1.5;

fn prefers_mixed_radix(length: usize) -> bool {
    let lpf = largest_prime_factor(length);
    length < 50 || lpf * lpf <= length
}

enum CfftKind<T> {
    Packed(CfftPlan<T>),
    Bluestein(BluesteinFft<T>),
}

/// Precomputed 1-D transform for complex data of a fixed length. Picks a
/// mixed-radix plan for smooth lengths and a Bluestein plan when a large
/// prime factor would make the generic radix too expensive. The plan is
/// immutable after construction; `forward`/`backward` borrow the caller's
/// buffer for the duration of one call and may be used from several
/// threads at once.
pub struct FftPlan<T> {
    length: usize,
    kind: CfftKind<T>,
}

impl<T: FftSample> FftPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(length: usize) -> Result<FftPlan<T>, FftError> {
        if length == 0 {
            return Err(FftError::ZeroSizedFft);
        }
        if prefers_mixed_radix(length) {
            return Ok(FftPlan {
                length,
                kind: CfftKind::Packed(CfftPlan::new(length)?),
            });
        }
        let comp1 = cost_guess(length);
        let comp2 = BLUESTEIN_FUDGE * 2. * cost_guess(good_size(2 * length - 1));
        let kind = if comp2 < comp1 {
            CfftKind::Bluestein(BluesteinFft::new(length)?)
        } else {
            CfftKind::Packed(CfftPlan::new(length)?)
        };
        Ok(FftPlan { length, kind })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// DFT with the e^(-2 pi i j k / n) kernel; `fct` scales the output.
    pub fn forward(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        match &self.kind {
            CfftKind::Packed(plan) => plan.forward(c, fct),
            CfftKind::Bluestein(plan) => plan.forward(c, fct),
        }
    }

    /// DFT with the e^(+2 pi i j k / n) kernel; `fct` scales the output.
    pub fn backward(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        match &self.kind {
            CfftKind::Packed(plan) => plan.backward(c, fct),
            CfftKind::Bluestein(plan) => plan.backward(c, fct),
        }
    }
}

enum RfftKind<T> {
    Packed(RfftPlan<T>),
    Bluestein(BluesteinFft<T>),
}

/// Precomputed 1-D transform for real data of a fixed length. The forward
/// direction produces the conjugate-even packed spectrum in n real slots,
/// the backward direction consumes it.
pub struct RealFftPlan<T> {
    length: usize,
    kind: RfftKind<T>,
}

impl<T: FftSample> RealFftPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(length: usize) -> Result<RealFftPlan<T>, FftError> {
        if length == 0 {
            return Err(FftError::ZeroSizedFft);
        }
        if prefers_mixed_radix(length) {
            return Ok(RealFftPlan {
                length,
                kind: RfftKind::Packed(RfftPlan::new(length)?),
            });
        }
        // the real transform does roughly half the work of the complex one
        let comp1 = 0.5 * cost_guess(length);
        let comp2 = BLUESTEIN_FUDGE * 2. * cost_guess(good_size(2 * length - 1));
        let kind = if comp2 < comp1 {
            RfftKind::Bluestein(BluesteinFft::new(length)?)
        } else {
            RfftKind::Packed(RfftPlan::new(length)?)
        };
        Ok(RealFftPlan { length, kind })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn forward(&self, c: &mut [T], fct: T) -> Result<(), FftError> {
        match &self.kind {
            RfftKind::Packed(plan) => plan.forward(c, fct),
            RfftKind::Bluestein(plan) => plan.forward_real(c, fct),
        }
    }

    pub fn backward(&self, c: &mut [T], fct: T) -> Result<(), FftError> {
        match &self.kind {
            RfftKind::Packed(plan) => plan.backward(c, fct),
            RfftKind::Bluestein(plan) => plan.backward_real(c, fct),
        }
    }
}
