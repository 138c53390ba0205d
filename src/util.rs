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
use crate::err::FftError;
use num_complex::Complex;
use num_traits::Float;

/// Hard cap on the number of factors a plan may carry.
pub(crate) const NFCT: usize = 25;

pub(crate) fn largest_prime_factor(mut n: usize) -> usize {
    let mut res = 1;
    while n & 1 == 0 {
        res = 2;
        n >>= 1;
    }
    let mut limit = (n as f64 + 0.01).sqrt() as usize;
    let mut x = 3;
    while x <= limit {
        while n.is_multiple_of(x) {
            res = x;
            n /= x;
            limit = (n as f64 + 0.01).sqrt() as usize;
        }
        x += 2;
    }
    if n > 1 {
        res = n;
    }
    res
}

/// Rough operation count of a mixed-radix transform of length `n`,
/// n * sum of factors with a 1.1 penalty on primes above 5.
pub(crate) fn cost_guess(n: usize) -> f64 {
    let lfp = 1.1;
    let ni = n;
    let mut n = n;
    let mut result = 0.;
    while n & 1 == 0 {
        result += 2.;
        n >>= 1;
    }
    let mut limit = (n as f64 + 0.01).sqrt() as usize;
    let mut x = 3;
    while x <= limit {
        while n.is_multiple_of(x) {
            result += if x <= 5 { x as f64 } else { lfp * x as f64 };
            n /= x;
            limit = (n as f64 + 0.01).sqrt() as usize;
        }
        x += 2;
    }
    if n > 1 {
        result += if n <= 5 { n as f64 } else { lfp * n as f64 };
    }
    result * ni as f64
}

/// Returns the smallest composite of 2, 3, 5, 7 and 11 which is >= n.
pub fn good_size(n: usize) -> usize {
    if n <= 12 {
        return n;
    }
    let mut bestfac = 2 * n;
    let mut f2 = 1;
    while f2 < bestfac {
        let mut f23 = f2;
        while f23 < bestfac {
            let mut f235 = f23;
            while f235 < bestfac {
                let mut f2357 = f235;
                while f2357 < bestfac {
                    let mut f235711 = f2357;
                    while f235711 < bestfac {
                        if f235711 >= n {
                            bestfac = f235711;
                        }
                        f235711 *= 11;
                    }
                    f2357 *= 7;
                }
                f235 *= 5;
            }
            f23 *= 3;
        }
        f2 *= 2;
    }
    bestfac
}

/// Factorizes `n` for the transform plans: factors of 4 are peeled first,
/// a leftover single 2 is rotated to the front, odd divisors follow, and a
/// prime residue is appended last.
pub(crate) fn factorize(n: usize) -> Result<Vec<usize>, FftError> {
    fn push_factor(n: usize, factors: &mut Vec<usize>, f: usize) -> Result<(), FftError> {
        if factors.len() >= NFCT {
            return Err(FftError::TooManyFactors(n));
        }
        factors.push(f);
        Ok(())
    }

    let mut factors = Vec::new();
    let mut len = n;
    while len.is_multiple_of(4) {
        push_factor(n, &mut factors, 4)?;
        len >>= 2;
    }
    if len.is_multiple_of(2) {
        len >>= 1;
        push_factor(n, &mut factors, 2)?;
        let nfct = factors.len();
        factors.swap(0, nfct - 1);
    }
    let mut maxl = (len as f64).sqrt() as usize + 1;
    let mut divisor = 3;
    while len > 1 && divisor < maxl {
        if len.is_multiple_of(divisor) {
            while len.is_multiple_of(divisor) {
                push_factor(n, &mut factors, divisor)?;
                len /= divisor;
            }
            maxl = (len as f64).sqrt() as usize + 1;
        }
        divisor += 2;
    }
    if len > 1 {
        push_factor(n, &mut factors, len)?;
    }
    Ok(factors)
}

/// Direction-dependent twiddle multiply: `a * w` on the backward path,
/// `a * conj(w)` on the forward path. Callers pass a constant for `bwd`,
/// so the branch folds away.
#[inline(always)]
pub(crate) fn special_mul<T: Float>(a: Complex<T>, w: Complex<T>, bwd: bool) -> Complex<T> {
    if bwd {
        Complex::new(
            a.re.mul_add(w.re, -(a.im * w.im)),
            a.re.mul_add(w.im, a.im * w.re),
        )
    } else {
        Complex::new(
            a.re.mul_add(w.re, a.im * w.im),
            a.im.mul_add(w.re, -(a.re * w.im)),
        )
    }
}

#[inline(always)]
pub(crate) fn pmc<T: Float>(c: Complex<T>, d: Complex<T>) -> (Complex<T>, Complex<T>) {
    (c + d, c - d)
}

/// Multiplication by i.
#[inline(always)]
pub(crate) fn rot90<T: Float>(a: Complex<T>) -> Complex<T> {
    Complex::new(-a.im, a.re)
}

/// Multiplication by -i.
#[inline(always)]
pub(crate) fn rotm90<T: Float>(a: Complex<T>) -> Complex<T> {
    Complex::new(a.im, -a.re)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_prime_factor_basics() {
        assert_eq!(largest_prime_factor(1), 1);
        assert_eq!(largest_prime_factor(2), 2);
        assert_eq!(largest_prime_factor(12), 3);
        assert_eq!(largest_prime_factor(97), 97);
        assert_eq!(largest_prime_factor(2 * 3 * 5 * 7 * 11), 11);
        assert_eq!(largest_prime_factor(541 * 4), 541);
    }

    #[test]
    fn good_size_basics() {
        for n in 1..=12 {
            assert_eq!(good_size(n), n);
        }
        assert_eq!(good_size(13), 14);
        assert_eq!(good_size(17), 18);
        assert_eq!(good_size(1025), 1050);
        // 2*541-1 rounded up to an 11-smooth composite
        let m = good_size(1081);
        assert!(m >= 1081);
        assert!(largest_prime_factor(m) <= 11);
        for n in 13..2000 {
            let m = good_size(n);
            assert!(m >= n && m < 2 * n);
            assert!(largest_prime_factor(m) <= 11, "good_size({n}) = {m}");
        }
    }

    #[test]
    fn cost_guess_penalizes_large_primes() {
        assert!(cost_guess(541) > cost_guess(540));
        assert_eq!(cost_guess(16), 16. * 8.);
    }

    #[test]
    fn factorize_shapes() {
        assert_eq!(factorize(1).unwrap(), Vec::<usize>::new());
        assert_eq!(factorize(4).unwrap(), vec![4]);
        assert_eq!(factorize(8).unwrap(), vec![2, 4]);
        assert_eq!(factorize(32).unwrap(), vec![2, 4, 4]);
        assert_eq!(factorize(60).unwrap(), vec![4, 3, 5]);
        assert_eq!(factorize(540).unwrap(), vec![4, 3, 3, 3, 5]);
        assert_eq!(factorize(541).unwrap(), vec![541]);
        for n in 1..3000usize {
            let f = factorize(n).unwrap();
            assert_eq!(f.iter().product::<usize>().max(1), n.max(1));
            // a single factor of 2 always sits at the front
            if n.trailing_zeros() % 2 == 1 {
                assert_eq!(f[0], 2, "factorization of {n}: {f:?}");
            } else {
                assert!(!f.contains(&2), "factorization of {n}: {f:?}");
            }
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn factor_cap() {
        // 2^51 needs 26 factors
        assert!(factorize(1usize << 51).is_err());
        assert_eq!(factorize(1usize << 50).unwrap().len(), 25);
    }
}
