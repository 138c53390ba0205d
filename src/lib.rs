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
#![allow(
    clippy::too_many_arguments,
    clippy::needless_range_loop,
    clippy::assign_op_pattern
)]
mod align;
mod bluestein;
mod cfft;
mod err;
mod ndim;
mod plan;
mod rfft;
mod trig;
mod util;

pub use err::FftError;
pub use ndim::{c2c, c2r, hartley, r2c, r2r};
pub use plan::{FftPlan, RealFftPlan};
pub use util::good_size;

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Scalar type the transforms operate on.
pub trait FftSample: Float + Default + Debug + Display + Send + Sync + 'static {}

impl FftSample for f32 {}
impl FftSample for f64 {}

#[cfg(test)]
mod tests {
    use crate::{FftPlan, RealFftPlan};
    use num_complex::Complex;
    use rand::Rng;

    #[test]
    fn test_everything_f64() {
        let mut rng = rand::rng();
        for i in 1..400usize {
            let mut data: Vec<Complex<f64>> = (0..i)
                .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
                .collect();
            let src = data.clone();
            let plan = FftPlan::new(i).expect("Failed to make FFT!");
            plan.forward(&mut data, 1.).unwrap();
            plan.backward(&mut data, 1. / i as f64).unwrap();
            data.iter().zip(src).enumerate().for_each(|(idx, (a, b))| {
                assert!(
                    (a.re - b.re).abs() < 1e-9,
                    "a_re {}, b_re {} at {idx}, for size {i}",
                    a.re,
                    b.re
                );
                assert!(
                    (a.im - b.im).abs() < 1e-9,
                    "a_im {}, b_im {} at {idx}, for size {i}",
                    a.im,
                    b.im
                );
            });
        }
    }

    #[test]
    fn test_everything_f32() {
        let mut rng = rand::rng();
        for i in 1..250usize {
            let mut data: Vec<Complex<f32>> = (0..i)
                .map(|_| Complex::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5))
                .collect();
            let src = data.clone();
            let plan = FftPlan::new(i).expect("Failed to make FFT!");
            plan.forward(&mut data, 1.).unwrap();
            plan.backward(&mut data, 1. / i as f32).unwrap();
            data.iter().zip(src).enumerate().for_each(|(idx, (a, b))| {
                assert!(
                    (a.re - b.re).abs() < 1e-2,
                    "a_re {}, b_re {} at {idx}, for size {i}",
                    a.re,
                    b.re
                );
                assert!(
                    (a.im - b.im).abs() < 1e-2,
                    "a_im {}, b_im {} at {idx}, for size {i}",
                    a.im,
                    b.im
                );
            });
        }
    }

    #[test]
    fn test_everything_real_f64() {
        let mut rng = rand::rng();
        for i in 1..400usize {
            let mut data: Vec<f64> = (0..i).map(|_| rng.random::<f64>() - 0.5).collect();
            let src = data.clone();
            let plan = RealFftPlan::new(i).expect("Failed to make FFT!");
            plan.forward(&mut data, 1.).unwrap();
            plan.backward(&mut data, 1. / i as f64).unwrap();
            data.iter().zip(src).enumerate().for_each(|(idx, (a, b))| {
                assert!(
                    (a - b).abs() < 1e-9,
                    "a {a}, b {b} at {idx}, for size {i}"
                );
            });
        }
    }

    #[test]
    fn roundtrip_spec_sizes() {
        let mut rng = rand::rng();
        for n in [1usize, 2, 3, 7, 11, 13, 1024, 2310] {
            let mut data: Vec<Complex<f64>> = (0..n)
                .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
                .collect();
            let src = data.clone();
            let plan = FftPlan::new(n).unwrap();
            plan.forward(&mut data, 1.).unwrap();
            plan.backward(&mut data, 1. / n as f64).unwrap();
            let tol = 1e-12 * n as f64 + 1e-13;
            for (a, b) in data.iter().zip(src.iter()) {
                assert!((a.re - b.re).abs() < tol, "complex size {n}");
                assert!((a.im - b.im).abs() < tol, "complex size {n}");
            }

            let mut rdata: Vec<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();
            let rsrc = rdata.clone();
            let rplan = RealFftPlan::new(n).unwrap();
            rplan.forward(&mut rdata, 1.).unwrap();
            rplan.backward(&mut rdata, 1. / n as f64).unwrap();
            for (a, b) in rdata.iter().zip(rsrc.iter()) {
                assert!((a - b).abs() < tol, "real size {n}");
            }
        }
    }

    // a prime length large enough that only Bluestein is viable
    #[test]
    fn roundtrip_million_plus_prime() {
        let n = 1_000_003usize;
        let mut rng = rand::rng();
        let mut data: Vec<Complex<f64>> = (0..n)
            .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
            .collect();
        let src = data.clone();
        let plan = FftPlan::new(n).unwrap();
        plan.forward(&mut data, 1.).unwrap();
        plan.backward(&mut data, 1. / n as f64).unwrap();
        for (a, b) in data.iter().zip(src.iter()) {
            assert!((a.re - b.re).abs() < 1e-7);
            assert!((a.im - b.im).abs() < 1e-7);
        }
    }

    #[test]
    fn linearity() {
        let mut rng = rand::rng();
        for n in [16usize, 53, 541] {
            let x: Vec<Complex<f64>> = (0..n)
                .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
                .collect();
            let y: Vec<Complex<f64>> = (0..n)
                .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
                .collect();
            let a = Complex::new(0.7, -1.3);
            let b = Complex::new(-0.2, 0.4);
            let plan = FftPlan::new(n).unwrap();

            let mut combined: Vec<Complex<f64>> = x
                .iter()
                .zip(y.iter())
                .map(|(&xv, &yv)| a * xv + b * yv)
                .collect();
            plan.forward(&mut combined, 1.).unwrap();

            let mut fx = x.clone();
            plan.forward(&mut fx, 1.).unwrap();
            let mut fy = y.clone();
            plan.forward(&mut fy, 1.).unwrap();

            let tol = 1e-11 * n as f64;
            for i in 0..n {
                let want = a * fx[i] + b * fy[i];
                assert!(
                    (combined[i].re - want.re).abs() < tol
                        && (combined[i].im - want.im).abs() < tol,
                    "linearity broken for size {n} at {i}"
                );
            }
        }
    }

    #[test]
    fn parseval() {
        let mut rng = rand::rng();
        for n in [36usize, 97, 540] {
            let x: Vec<Complex<f64>> = (0..n)
                .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
                .collect();
            let time_energy: f64 = x.iter().map(|v| v.norm_sqr()).sum();
            let mut spec = x.clone();
            FftPlan::new(n).unwrap().forward(&mut spec, 1.).unwrap();
            let freq_energy: f64 = spec.iter().map(|v| v.norm_sqr()).sum::<f64>() / n as f64;
            assert!(
                (time_energy - freq_energy).abs() < 1e-11 * n as f64,
                "Parseval broken for size {n}: {time_energy} vs {freq_energy}"
            );
        }
    }

    #[test]
    fn plans_are_shareable_across_threads() {
        let plan = std::sync::Arc::new(FftPlan::<f64>::new(64).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let plan = plan.clone();
                std::thread::spawn(move || {
                    let mut data = vec![Complex::new(t as f64, 0.); 64];
                    plan.forward(&mut data, 1.).unwrap();
                    data[0]
                })
            })
            .collect();
        for (t, h) in handles.into_iter().enumerate() {
            let dc = h.join().unwrap();
            assert!((dc.re - 64. * t as f64).abs() < 1e-9);
        }
    }
}
