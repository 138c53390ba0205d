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
use crate::align::AlignedVec;
use crate::err::FftError;

/// Evaluates `(cos(pi*a) - 1, sin(pi*a))` for |a| <= 0.25 with minimax
/// polynomials in a*a and fused multiply-adds. The `-1` offset on the
/// cosine keeps full precision near the axis crossings.
fn sincosm1pi(a: f64) -> (f64, f64) {
    let s = a * a;
    let mut r: f64 = -1.0369917389758117e-4;
    r = r.mul_add(s, 1.9294935641298806e-3);
    r = r.mul_add(s, -2.5806887942825395e-2);
    r = r.mul_add(s, 2.3533063028328211e-1);
    r = r.mul_add(s, -1.3352627688538006e+0);
    r = r.mul_add(s, 4.0587121264167623e+0);
    r = r.mul_add(s, -4.9348022005446790e+0);
    let c = r * s;
    let mut r: f64 = 4.6151442520157035e-4;
    r = r.mul_add(s, -7.3700183130883555e-3);
    r = r.mul_add(s, 8.2145868949323936e-2);
    r = r.mul_add(s, -5.9926452893214921e-1);
    r = r.mul_add(s, 2.5501640398732688e+0);
    r = r.mul_add(s, -5.1677127800499516e+0);
    let s = s * a;
    let r = r * s;
    let s = a.mul_add(3.1415926535897931e+0, r);
    (c, s)
}

/// Fills the first octant of the unit circle for denominator `den`:
/// (cos, sin) of 2*pi*i/den for i = 0..(den+4)/8. Direct polynomial
/// evaluation for the first sqrt-sized block, then one exact angle-sum
/// step per block, carried in (cos - 1) form until the final fixup.
fn calc_first_octant(den: usize, res: &mut [f64]) {
    let n = (den + 4) >> 3;
    if n == 0 {
        return;
    }
    res[0] = 1.;
    res[1] = 0.;
    if n == 1 {
        return;
    }
    let l1 = (n as f64).sqrt() as usize;
    for i in 1..l1 {
        let (c, s) = sincosm1pi((2. * i as f64) / den as f64);
        res[2 * i] = c;
        res[2 * i + 1] = s;
    }
    let mut start = l1;
    while start < n {
        let (cs0, cs1) = sincosm1pi((2. * start as f64) / den as f64);
        res[2 * start] = cs0 + 1.;
        res[2 * start + 1] = cs1;
        let mut end = l1;
        if start + end > n {
            end = n - start;
        }
        for i in 1..end {
            let csx0 = res[2 * i];
            let csx1 = res[2 * i + 1];
            res[2 * (start + i)] = ((cs0 * csx0 - cs1 * csx1 + cs0) + csx0) + 1.;
            res[2 * (start + i) + 1] = (cs0 * csx1 + cs1 * csx0) + cs1 + csx1;
        }
        start += l1;
    }
    for i in 1..l1 {
        res[2 * i] += 1.;
    }
}

// The upper half of `res` serves as scratch for the denser octant table,
// which is then compacted forward; reads stay ahead of writes.
fn calc_first_quadrant(n: usize, res: &mut [f64]) {
    let p = n;
    calc_first_octant(n << 1, &mut res[p..]);
    let ndone = (n + 2) >> 2;
    let mut i = 0;
    let mut idx1 = 0;
    let mut idx2 = 2 * ndone - 2;
    while i + 1 < ndone {
        res[idx1] = res[p + 2 * i];
        res[idx1 + 1] = res[p + 2 * i + 1];
        res[idx2] = res[p + 2 * i + 3];
        res[idx2 + 1] = res[p + 2 * i + 2];
        i += 2;
        idx1 += 2;
        idx2 -= 2;
    }
    if i != ndone {
        res[idx1] = res[p + 2 * i];
        res[idx1 + 1] = res[p + 2 * i + 1];
    }
}

fn calc_first_half(n: usize, res: &mut [f64]) {
    let ndone = (n + 1) >> 1;
    let p = n - 1;
    calc_first_octant(n << 2, &mut res[p..]);
    let rn = n as isize;
    let mut i4: isize = 0;
    let mut i: usize = 0;
    // octant 0
    while i4 <= rn - i4 {
        res[2 * i] = res[p + 2 * i4 as usize];
        res[2 * i + 1] = res[p + 2 * i4 as usize + 1];
        i += 1;
        i4 += 4;
    }
    // octant 1
    while i4 - rn <= 0 {
        let xm = (rn - i4) as usize;
        res[2 * i] = res[p + 2 * xm + 1];
        res[2 * i + 1] = res[p + 2 * xm];
        i += 1;
        i4 += 4;
    }
    // octant 2
    while i4 <= 3 * rn - i4 {
        let xm = (i4 - rn) as usize;
        res[2 * i] = -res[p + 2 * xm + 1];
        res[2 * i + 1] = res[p + 2 * xm];
        i += 1;
        i4 += 4;
    }
    // octant 3
    while i < ndone {
        let xm = (2 * rn - i4) as usize;
        res[2 * i] = -res[p + 2 * xm];
        res[2 * i + 1] = res[p + 2 * xm + 1];
        i += 1;
        i4 += 4;
    }
}

fn fill_first_quadrant(n: usize, res: &mut [f64]) {
    let hsqt2 = 0.707106781186547524400844362104849;
    let quart = n >> 2;
    if n & 7 == 0 {
        res[quart] = hsqt2;
        res[quart + 1] = hsqt2;
    }
    let mut i = 2;
    let mut j = 2 * quart - 2;
    while i < quart {
        res[j] = res[i + 1];
        res[j + 1] = res[i];
        i += 2;
        j -= 2;
    }
}

fn fill_first_half(n: usize, res: &mut [f64]) {
    let half = n >> 1;
    if n & 3 == 0 {
        let mut i = 0;
        while i < half {
            res[i + half] = -res[i + 1];
            res[i + half + 1] = res[i];
            i += 2;
        }
    } else {
        let mut i = 2;
        let mut j = 2 * half - 2;
        while i < half {
            res[j] = -res[i];
            res[j + 1] = res[i + 1];
            i += 2;
            j -= 2;
        }
    }
}

fn fill_second_half(n: usize, res: &mut [f64]) {
    if n & 1 == 0 {
        for i in 0..n {
            res[i + n] = -res[i];
        }
    } else {
        let mut i = 2;
        let mut j = 2 * n - 2;
        while i < n {
            res[j] = res[i];
            res[j + 1] = -res[i + 1];
            i += 2;
            j -= 2;
        }
    }
}

fn sincos_2pibyn_half(n: usize, res: &mut [f64]) {
    if n & 3 == 0 {
        calc_first_octant(n, res);
        fill_first_quadrant(n, res);
        fill_first_half(n, res);
    } else if n & 1 == 0 {
        calc_first_quadrant(n, res);
        fill_first_half(n, res);
    } else {
        calc_first_half(n, res);
    }
}

/// Table of (cos, sin) of 2*pi*k/n. With `half` set only the first half of
/// the circle (k < (n+1)/2) is produced, which is all the real-valued
/// transforms need; twiddles are always synthesized in f64 and narrowed by
/// the consumer.
pub(crate) struct SinCos2PiByN {
    data: AlignedVec<f64>,
}

impl SinCos2PiByN {
    pub(crate) fn new(n: usize, half: bool) -> Result<SinCos2PiByN, FftError> {
        let mut data = AlignedVec::new(2 * n)?;
        sincos_2pibyn_half(n, &mut data);
        if !half {
            fill_second_half(n, &mut data);
        }
        Ok(SinCos2PiByN { data })
    }

    #[inline]
    pub(crate) fn cs(&self, k: usize) -> (f64, f64) {
        (self.data[2 * k], self.data[2 * k + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::{sincosm1pi, SinCos2PiByN};

    #[test]
    fn small_angle_polynomial() {
        for i in -25..=25 {
            let a = i as f64 / 100.;
            let (c, s) = sincosm1pi(a);
            let arg = std::f64::consts::PI * a;
            assert!((c - (arg.cos() - 1.)).abs() < 1e-16, "cos mismatch at {a}");
            assert!((s - arg.sin()).abs() < 1e-16, "sin mismatch at {a}");
        }
    }

    fn check_table(n: usize, step: usize) {
        let full = SinCos2PiByN::new(n, false).unwrap();
        let half = SinCos2PiByN::new(n, true).unwrap();
        let mut k = 0;
        while k < n {
            let arg = 2. * std::f64::consts::PI * k as f64 / n as f64;
            let (c, s) = full.cs(k);
            assert!(
                (c - arg.cos()).abs() < 1e-13,
                "cos error at k={k}, n={n}: {c} vs {}",
                arg.cos()
            );
            assert!(
                (s - arg.sin()).abs() < 1e-13,
                "sin error at k={k}, n={n}: {s} vs {}",
                arg.sin()
            );
            if k < (n + 1) / 2 {
                let (hc, hs) = half.cs(k);
                assert_eq!(hc, c, "half table diverges at k={k}, n={n}");
                assert_eq!(hs, s, "half table diverges at k={k}, n={n}");
            }
            k += step;
        }
    }

    #[test]
    fn single_entry_table() {
        let t = SinCos2PiByN::new(1, false).unwrap();
        assert_eq!(t.cs(0), (1., 0.));
    }

    #[test]
    fn table_accuracy_small() {
        for n in 2..200 {
            check_table(n, 1);
        }
    }

    #[test]
    fn table_accuracy_mixed_residues() {
        // one size per residue class mod 4, plus multiples of 8
        for n in [256, 1000, 1024, 4097, 4098, 4099, 4100, 30000, 65536] {
            check_table(n, 1);
        }
    }

    #[test]
    fn table_accuracy_large() {
        check_table(999_983, 101);
        check_table(1_000_000, 97);
    }
}
