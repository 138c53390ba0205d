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
use crate::align::AlignedVec;
use crate::cfft::CfftPlan;
use crate::err::{try_vec, FftError};
use crate::trig::SinCos2PiByN;
use crate::util::{good_size, special_mul};
use crate::FftSample;
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Chirp-z plan: a length-n DFT expressed as a cyclic convolution of
/// length n2 = good_size(2n - 1), carried out by a nested mixed-radix
/// plan. `bk` holds the chirp exp(i pi k^2 / n); `bkf` its zero-padded,
/// forward-transformed, 1/n2-scaled symmetric extension.
pub(crate) struct BluesteinFft<T> {
    n: usize,
    n2: usize,
    plan: CfftPlan<T>,
    bk: AlignedVec<Complex<T>>,
    bkf: AlignedVec<Complex<T>>,
}

impl<T: FftSample> BluesteinFft<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(length: usize) -> Result<BluesteinFft<T>, FftError> {
        if length == 0 {
            return Err(FftError::ZeroSizedFft);
        }
        let n = length;
        let n2 = good_size(2 * n - 1);
        let plan = CfftPlan::new(n2)?;

        let twid = SinCos2PiByN::new(2 * n, false)?;
        let mut bk: AlignedVec<Complex<T>> = AlignedVec::new(n)?;
        bk[0] = Complex::new(1f64.as_(), 0f64.as_());
        // square residues mod 2n, accumulated to keep the index exact
        let mut coeff = 0usize;
        for m in 1..n {
            coeff += 2 * m - 1;
            if coeff >= 2 * n {
                coeff -= 2 * n;
            }
            let (c, s) = twid.cs(coeff);
            bk[m] = Complex::new(c.as_(), s.as_());
        }

        let xn2: T = (1. / n2 as f64).as_();
        let mut bkf: AlignedVec<Complex<T>> = AlignedVec::new(n2)?;
        bkf[0] = bk[0] * xn2;
        for m in 1..n {
            let scaled = bk[m] * xn2;
            bkf[m] = scaled;
            bkf[n2 - m] = scaled;
        }
        plan.forward(&mut bkf, 1f64.as_())?;

        Ok(BluesteinFft {
            n,
            n2,
            plan,
            bk,
            bkf,
        })
    }

    pub(crate) fn length(&self) -> usize {
        self.n
    }

    fn fft<const BWD: bool>(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        let one: T = 1f64.as_();
        let mut akf: AlignedVec<Complex<T>> = AlignedVec::new(self.n2)?;
        for m in 0..self.n {
            akf[m] = special_mul(c[m], self.bk[m], BWD);
        }
        self.plan.forward(&mut akf, one)?;
        // convolution; the chirp direction flips relative to the outer one
        for m in 0..self.n2 {
            akf[m] = special_mul(akf[m], self.bkf[m], !BWD);
        }
        self.plan.backward(&mut akf, one)?;
        for m in 0..self.n {
            c[m] = special_mul(akf[m], self.bk[m], BWD) * fct;
        }
        Ok(())
    }

    pub(crate) fn forward(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        if c.len() != self.n {
            return Err(FftError::InvalidInPlaceLength(self.n, c.len()));
        }
        self.fft::<false>(c, fct)
    }

    pub(crate) fn backward(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        if c.len() != self.n {
            return Err(FftError::InvalidInPlaceLength(self.n, c.len()));
        }
        self.fft::<true>(c, fct)
    }

    /// Real-to-CCE fallback used by the real dispatcher for lengths with a
    /// large prime factor.
    pub(crate) fn forward_real(&self, c: &mut [T], fct: T) -> Result<(), FftError> {
        if c.len() != self.n {
            return Err(FftError::InvalidInPlaceLength(self.n, c.len()));
        }
        let n = self.n;
        let zero: T = 0f64.as_();
        let mut tmp = try_vec![Complex::new(zero, zero); n];
        for m in 0..n {
            tmp[m] = Complex::new(c[m], zero);
        }
        self.fft::<false>(&mut tmp, fct)?;
        c[0] = tmp[0].re;
        for m in 1..n {
            let half = (m + 1) / 2;
            c[m] = if m & 1 == 1 { tmp[half].re } else { tmp[half].im };
        }
        Ok(())
    }

    /// CCE-to-real inverse: rebuilds the Hermitian spectrum, runs the
    /// backward complex transform, keeps the real parts.
    pub(crate) fn backward_real(&self, c: &mut [T], fct: T) -> Result<(), FftError> {
        if c.len() != self.n {
            return Err(FftError::InvalidInPlaceLength(self.n, c.len()));
        }
        let n = self.n;
        let zero: T = 0f64.as_();
        let mut tmp = try_vec![Complex::new(zero, zero); n];
        tmp[0] = Complex::new(c[0], zero);
        for m in 1..n {
            let half = (m + 1) / 2;
            if m & 1 == 1 {
                tmp[half].re = c[m];
            } else {
                tmp[half].im = c[m];
            }
        }
        for k in 1..(n + 1) / 2 {
            tmp[n - k] = tmp[k].conj();
        }
        self.fft::<true>(&mut tmp, fct)?;
        for m in 0..n {
            c[m] = tmp[m].re;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BluesteinFft;
    use crate::rfft::RfftPlan;
    use num_complex::Complex;
    use rand::Rng;

    fn naive_dft(src: &[Complex<f64>], bwd: bool) -> Vec<Complex<f64>> {
        let n = src.len();
        let sign = if bwd { 1. } else { -1. };
        (0..n)
            .map(|k| {
                let mut sum = Complex::new(0., 0.);
                for (j, &x) in src.iter().enumerate() {
                    let ang = sign * 2. * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                    sum += x * Complex::new(ang.cos(), ang.sin());
                }
                sum
            })
            .collect()
    }

    #[test]
    fn matches_naive_dft() {
        let mut rng = rand::rng();
        for n in [1usize, 2, 5, 13, 17, 100, 101, 541] {
            let src: Vec<Complex<f64>> = (0..n)
                .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
                .collect();
            let plan = BluesteinFft::new(n).unwrap();
            let tol = 1e-11 * n as f64 + 1e-12;

            let mut fwd = src.clone();
            plan.forward(&mut fwd, 1.).unwrap();
            for (idx, (a, b)) in fwd.iter().zip(naive_dft(&src, false).iter()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
                    "forward n={n}: {a} != {b} at {idx}"
                );
            }

            let mut bwd = src.clone();
            plan.backward(&mut bwd, 1.).unwrap();
            for (idx, (a, b)) in bwd.iter().zip(naive_dft(&src, true).iter()).enumerate() {
                assert!(
                    (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
                    "backward n={n}: {a} != {b} at {idx}"
                );
            }
        }
    }

    #[test]
    fn real_wrappers_agree_with_real_plan() {
        let mut rng = rand::rng();
        for n in [2usize, 3, 13, 20, 37, 101, 108] {
            let src: Vec<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();
            let blue = BluesteinFft::new(n).unwrap();
            let packed = RfftPlan::new(n).unwrap();
            let tol = 1e-11 * n as f64 + 1e-12;

            let mut a = src.clone();
            blue.forward_real(&mut a, 1.).unwrap();
            let mut b = src.clone();
            packed.forward(&mut b, 1.).unwrap();
            for (idx, (x, y)) in a.iter().zip(b.iter()).enumerate() {
                assert!((x - y).abs() < tol, "forward n={n}: {x} != {y} at {idx}");
            }

            blue.backward_real(&mut a, 1. / n as f64).unwrap();
            for (idx, (x, y)) in a.iter().zip(src.iter()).enumerate() {
                assert!((x - y).abs() < tol, "roundtrip n={n}: {x} != {y} at {idx}");
            }
        }
    }

    #[test]
    fn flat_spectrum_for_impulse() {
        let plan = BluesteinFft::<f64>::new(13).unwrap();
        let mut data = vec![Complex::new(0., 0.); 13];
        data[0] = Complex::new(1., 0.);
        plan.forward(&mut data, 1.).unwrap();
        for v in data {
            assert!((v.norm() - 1.).abs() < 1e-12);
        }
    }
}
