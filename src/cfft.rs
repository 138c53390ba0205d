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
use crate::err::FftError;
use crate::trig::SinCos2PiByN;
use crate::util::{factorize, pmc, rot90, rotm90, special_mul};
use crate::FftSample;
use num_complex::Complex;
use num_traits::AsPrimitive;

#[derive(Clone, Copy, Default)]
struct FactorData {
    fct: usize,
    tw: usize,
    tws: usize,
}

/// Mixed-radix FFTPACK-style plan for complex data. Twiddles for all
/// stages live in one aligned block; each factor gets a slice of it.
pub(crate) struct CfftPlan<T> {
    length: usize,
    factors: Vec<FactorData>,
    mem: AlignedVec<Complex<T>>,
}

impl<T: FftSample> CfftPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(length: usize) -> Result<CfftPlan<T>, FftError> {
        if length == 0 {
            return Err(FftError::ZeroSizedFft);
        }
        let mut plan = CfftPlan {
            length,
            factors: Vec::new(),
            mem: AlignedVec::new(0)?,
        };
        if length == 1 {
            return Ok(plan);
        }
        plan.factors = factorize(length)?
            .into_iter()
            .map(|fct| FactorData { fct, tw: 0, tws: 0 })
            .collect();
        plan.mem = AlignedVec::new(plan.twsize())?;
        plan.comp_twiddle()?;
        Ok(plan)
    }

    pub(crate) fn length(&self) -> usize {
        self.length
    }

    fn twsize(&self) -> usize {
        let mut twsize = 0;
        let mut l1 = 1;
        for f in self.factors.iter() {
            let ip = f.fct;
            let ido = self.length / (l1 * ip);
            twsize += (ip - 1) * (ido - 1);
            if ip > 11 {
                twsize += ip;
            }
            l1 *= ip;
        }
        twsize
    }

    fn comp_twiddle(&mut self) -> Result<(), FftError> {
        let twid = SinCos2PiByN::new(self.length, false)?;
        let mut l1 = 1;
        let mut memofs = 0;
        let length = self.length;
        for f in self.factors.iter_mut() {
            let ip = f.fct;
            let ido = length / (l1 * ip);
            f.tw = memofs;
            memofs += (ip - 1) * (ido - 1);
            for j in 1..ip {
                for i in 1..ido {
                    let (c, s) = twid.cs(j * l1 * i);
                    self.mem[f.tw + (j - 1) * (ido - 1) + i - 1] = Complex::new(c.as_(), s.as_());
                }
            }
            if ip > 11 {
                f.tws = memofs;
                memofs += ip;
                for j in 0..ip {
                    let (c, s) = twid.cs(j * l1 * ido);
                    self.mem[f.tws + j] = Complex::new(c.as_(), s.as_());
                }
            }
            l1 *= ip;
        }
        Ok(())
    }

    pub(crate) fn forward(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        self.pass_all::<false>(c, fct)
    }

    pub(crate) fn backward(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        self.pass_all::<true>(c, fct)
    }

    fn pass_all<const BWD: bool>(&self, c: &mut [Complex<T>], fct: T) -> Result<(), FftError> {
        if c.len() != self.length {
            return Err(FftError::InvalidInPlaceLength(self.length, c.len()));
        }
        let one: T = 1f64.as_();
        if self.length == 1 {
            c[0] = c[0] * fct;
            return Ok(());
        }
        let mut ch: AlignedVec<Complex<T>> = AlignedVec::new(self.length)?;
        let mut l1 = 1;
        let mut in_c = true;
        for f in self.factors.iter() {
            let ip = f.fct;
            let l2 = ip * l1;
            let ido = self.length / l2;
            let tw = &self.mem[f.tw..f.tw + (ip - 1) * (ido - 1)];
            let (src, dst): (&mut [Complex<T>], &mut [Complex<T>]) = if in_c {
                (&mut *c, &mut ch[..])
            } else {
                (&mut ch[..], &mut *c)
            };
            let swapped = match ip {
                4 => {
                    pass4::<T, BWD>(ido, l1, src, dst, tw);
                    true
                }
                2 => {
                    pass2::<T, BWD>(ido, l1, src, dst, tw);
                    true
                }
                3 => {
                    pass3::<T, BWD>(ido, l1, src, dst, tw);
                    true
                }
                5 => {
                    pass5::<T, BWD>(ido, l1, src, dst, tw);
                    true
                }
                7 => {
                    pass7::<T, BWD>(ido, l1, src, dst, tw);
                    true
                }
                11 => {
                    pass11::<T, BWD>(ido, l1, src, dst, tw);
                    true
                }
                _ => {
                    let tws = &self.mem[f.tws..f.tws + ip];
                    passg::<T, BWD>(ido, ip, l1, src, dst, tw, tws);
                    false
                }
            };
            if swapped {
                in_c = !in_c;
            }
            l1 = l2;
        }
        if !in_c {
            if fct != one {
                for (dst, src) in c.iter_mut().zip(ch.iter()) {
                    *dst = *src * fct;
                }
            } else {
                c.copy_from_slice(&ch);
            }
        } else if fct != one {
            for v in c.iter_mut() {
                *v = *v * fct;
            }
        }
        Ok(())
    }
}

fn pass2<T: FftSample, const BWD: bool>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
) {
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 2 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| (i - 1) + x * (ido - 1);

    for k in 0..l1 {
        let (a, b) = pmc(cc[cc_i(0, 0, k)], cc[cc_i(0, 1, k)]);
        ch[ch_i(0, k, 0)] = a;
        ch[ch_i(0, k, 1)] = b;
        for i in 1..ido {
            ch[ch_i(i, k, 0)] = cc[cc_i(i, 0, k)] + cc[cc_i(i, 1, k)];
            ch[ch_i(i, k, 1)] = special_mul(
                cc[cc_i(i, 0, k)] - cc[cc_i(i, 1, k)],
                wa[wa_i(0, i)],
                BWD,
            );
        }
    }
}

fn pass3<T: FftSample, const BWD: bool>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 3 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| (i - 1) + x * (ido - 1);

    let tw1r: T = (-0.5f64).as_();
    let tw1i: T = (if BWD { 1. } else { -1. } * 0.86602540378443864676).as_();

    for k in 0..l1 {
        for i in 0..ido {
            let t0 = cc[cc_i(i, 0, k)];
            let (t1, t2) = pmc(cc[cc_i(i, 1, k)], cc[cc_i(i, 2, k)]);
            ch[ch_i(i, k, 0)] = t0 + t1;
            let ca = t0 + t1 * tw1r;
            let cb = rot90(t2 * tw1i);
            let (da, db) = pmc(ca, cb);
            if i == 0 {
                ch[ch_i(0, k, 1)] = da;
                ch[ch_i(0, k, 2)] = db;
            } else {
                ch[ch_i(i, k, 1)] = special_mul(da, wa[wa_i(0, i)], BWD);
                ch[ch_i(i, k, 2)] = special_mul(db, wa[wa_i(1, i)], BWD);
            }
        }
    }
}

fn pass4<T: FftSample, const BWD: bool>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
) {
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 4 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| (i - 1) + x * (ido - 1);

    for k in 0..l1 {
        for i in 0..ido {
            let (t2, t1) = pmc(cc[cc_i(i, 0, k)], cc[cc_i(i, 2, k)]);
            let (t3, mut t4) = pmc(cc[cc_i(i, 1, k)], cc[cc_i(i, 3, k)]);
            t4 = if BWD { rot90(t4) } else { rotm90(t4) };
            let (a0, c3) = pmc(t2, t3);
            let (c2, c4) = pmc(t1, t4);
            ch[ch_i(i, k, 0)] = a0;
            if i == 0 {
                ch[ch_i(0, k, 1)] = c2;
                ch[ch_i(0, k, 2)] = c3;
                ch[ch_i(0, k, 3)] = c4;
            } else {
                ch[ch_i(i, k, 1)] = special_mul(c2, wa[wa_i(0, i)], BWD);
                ch[ch_i(i, k, 2)] = special_mul(c3, wa[wa_i(1, i)], BWD);
                ch[ch_i(i, k, 3)] = special_mul(c4, wa[wa_i(2, i)], BWD);
            }
        }
    }
}

#[inline(always)]
fn partstep5<T: FftSample>(
    t0: Complex<T>,
    t1: Complex<T>,
    t2: Complex<T>,
    t3: Complex<T>,
    t4: Complex<T>,
    twar: T,
    twbr: T,
    twai: T,
    twbi: T,
) -> (Complex<T>, Complex<T>) {
    let ca = t0 + t1 * twar + t2 * twbr;
    let cb = Complex::new(-(twai * t4.im + twbi * t3.im), twai * t4.re + twbi * t3.re);
    pmc(ca, cb)
}

fn pass5<T: FftSample, const BWD: bool>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 5 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| (i - 1) + x * (ido - 1);

    let sgn = if BWD { 1. } else { -1. };
    let tw1r: T = 0.3090169943749474241f64.as_();
    let tw1i: T = (sgn * 0.95105651629515357212).as_();
    let tw2r: T = (-0.8090169943749474241f64).as_();
    let tw2i: T = (sgn * 0.58778525229247312917).as_();

    for k in 0..l1 {
        for i in 0..ido {
            let t0 = cc[cc_i(i, 0, k)];
            let (t1, t4) = pmc(cc[cc_i(i, 1, k)], cc[cc_i(i, 4, k)]);
            let (t2, t3) = pmc(cc[cc_i(i, 2, k)], cc[cc_i(i, 3, k)]);
            ch[ch_i(i, k, 0)] = t0 + t1 + t2;
            let (d1, d4) = partstep5(t0, t1, t2, t3, t4, tw1r, tw2r, tw1i, tw2i);
            let (d2, d3) = partstep5(t0, t1, t2, t3, t4, tw2r, tw1r, tw2i, -tw1i);
            if i == 0 {
                ch[ch_i(0, k, 1)] = d1;
                ch[ch_i(0, k, 4)] = d4;
                ch[ch_i(0, k, 2)] = d2;
                ch[ch_i(0, k, 3)] = d3;
            } else {
                ch[ch_i(i, k, 1)] = special_mul(d1, wa[wa_i(0, i)], BWD);
                ch[ch_i(i, k, 4)] = special_mul(d4, wa[wa_i(3, i)], BWD);
                ch[ch_i(i, k, 2)] = special_mul(d2, wa[wa_i(1, i)], BWD);
                ch[ch_i(i, k, 3)] = special_mul(d3, wa[wa_i(2, i)], BWD);
            }
        }
    }
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn partstep7<T: FftSample>(
    t1: Complex<T>,
    t2: Complex<T>,
    t3: Complex<T>,
    t4: Complex<T>,
    t5: Complex<T>,
    t6: Complex<T>,
    t7: Complex<T>,
    x1: T,
    x2: T,
    x3: T,
    y1: T,
    y2: T,
    y3: T,
) -> (Complex<T>, Complex<T>) {
    let ca = t1 + t2 * x1 + t3 * x2 + t4 * x3;
    let cb = Complex::new(
        -(y1 * t7.im + y2 * t6.im + y3 * t5.im),
        y1 * t7.re + y2 * t6.re + y3 * t5.re,
    );
    pmc(ca, cb)
}

fn pass7<T: FftSample, const BWD: bool>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 7 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| (i - 1) + x * (ido - 1);

    let sgn = if BWD { 1. } else { -1. };
    let tw1r: T = 0.623489801858733530525f64.as_();
    let tw1i: T = (sgn * 0.7818314824680298087084).as_();
    let tw2r: T = (-0.222520933956314404289f64).as_();
    let tw2i: T = (sgn * 0.9749279121818236070181).as_();
    let tw3r: T = (-0.9009688679024191262361f64).as_();
    let tw3i: T = (sgn * 0.4338837391175581204758).as_();

    for k in 0..l1 {
        for i in 0..ido {
            let t1 = cc[cc_i(i, 0, k)];
            let (t2, t7) = pmc(cc[cc_i(i, 1, k)], cc[cc_i(i, 6, k)]);
            let (t3, t6) = pmc(cc[cc_i(i, 2, k)], cc[cc_i(i, 5, k)]);
            let (t4, t5) = pmc(cc[cc_i(i, 3, k)], cc[cc_i(i, 4, k)]);
            ch[ch_i(i, k, 0)] = t1 + t2 + t3 + t4;
            let (d1, d6) = partstep7(t1, t2, t3, t4, t5, t6, t7, tw1r, tw2r, tw3r, tw1i, tw2i, tw3i);
            let (d2, d5) =
                partstep7(t1, t2, t3, t4, t5, t6, t7, tw2r, tw3r, tw1r, tw2i, -tw3i, -tw1i);
            let (d3, d4) =
                partstep7(t1, t2, t3, t4, t5, t6, t7, tw3r, tw1r, tw2r, tw3i, -tw1i, tw2i);
            if i == 0 {
                ch[ch_i(0, k, 1)] = d1;
                ch[ch_i(0, k, 6)] = d6;
                ch[ch_i(0, k, 2)] = d2;
                ch[ch_i(0, k, 5)] = d5;
                ch[ch_i(0, k, 3)] = d3;
                ch[ch_i(0, k, 4)] = d4;
            } else {
                ch[ch_i(i, k, 1)] = special_mul(d1, wa[wa_i(0, i)], BWD);
                ch[ch_i(i, k, 6)] = special_mul(d6, wa[wa_i(5, i)], BWD);
                ch[ch_i(i, k, 2)] = special_mul(d2, wa[wa_i(1, i)], BWD);
                ch[ch_i(i, k, 5)] = special_mul(d5, wa[wa_i(4, i)], BWD);
                ch[ch_i(i, k, 3)] = special_mul(d3, wa[wa_i(2, i)], BWD);
                ch[ch_i(i, k, 4)] = special_mul(d4, wa[wa_i(3, i)], BWD);
            }
        }
    }
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn partstep11<T: FftSample>(
    t: &[Complex<T>; 11],
    x1: T,
    x2: T,
    x3: T,
    x4: T,
    x5: T,
    y1: T,
    y2: T,
    y3: T,
    y4: T,
    y5: T,
) -> (Complex<T>, Complex<T>) {
    let ca = t[0] + t[1] * x1 + t[2] * x2 + t[3] * x3 + t[4] * x4 + t[5] * x5;
    let cb = Complex::new(
        -(y1 * t[10].im + y2 * t[9].im + y3 * t[8].im + y4 * t[7].im + y5 * t[6].im),
        y1 * t[10].re + y2 * t[9].re + y3 * t[8].re + y4 * t[7].re + y5 * t[6].re,
    );
    pmc(ca, cb)
}

fn pass11<T: FftSample, const BWD: bool>(
    ido: usize,
    l1: usize,
    cc: &[Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
) where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 11 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| (i - 1) + x * (ido - 1);

    let sgn = if BWD { 1. } else { -1. };
    let tw1r: T = 0.8412535328311811688618f64.as_();
    let tw1i: T = (sgn * 0.5406408174555975821076).as_();
    let tw2r: T = 0.4154150130018864255293f64.as_();
    let tw2i: T = (sgn * 0.9096319953545183714117).as_();
    let tw3r: T = (-0.1423148382732851404438f64).as_();
    let tw3i: T = (sgn * 0.9898214418809327323761).as_();
    let tw4r: T = (-0.6548607339452850640569f64).as_();
    let tw4i: T = (sgn * 0.755749574354258283774).as_();
    let tw5r: T = (-0.9594929736144973898904f64).as_();
    let tw5i: T = (sgn * 0.2817325568414296977114).as_();

    for k in 0..l1 {
        for i in 0..ido {
            let t1 = cc[cc_i(i, 0, k)];
            let (t2, t11) = pmc(cc[cc_i(i, 1, k)], cc[cc_i(i, 10, k)]);
            let (t3, t10) = pmc(cc[cc_i(i, 2, k)], cc[cc_i(i, 9, k)]);
            let (t4, t9) = pmc(cc[cc_i(i, 3, k)], cc[cc_i(i, 8, k)]);
            let (t5, t8) = pmc(cc[cc_i(i, 4, k)], cc[cc_i(i, 7, k)]);
            let (t6, t7) = pmc(cc[cc_i(i, 5, k)], cc[cc_i(i, 6, k)]);
            ch[ch_i(i, k, 0)] = t1 + t2 + t3 + t4 + t5 + t6;
            let t = [t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11];
            let (d1, d10) =
                partstep11(&t, tw1r, tw2r, tw3r, tw4r, tw5r, tw1i, tw2i, tw3i, tw4i, tw5i);
            let (d2, d9) =
                partstep11(&t, tw2r, tw4r, tw5r, tw3r, tw1r, tw2i, tw4i, -tw5i, -tw3i, -tw1i);
            let (d3, d8) =
                partstep11(&t, tw3r, tw5r, tw2r, tw1r, tw4r, tw3i, -tw5i, -tw2i, tw1i, tw4i);
            let (d4, d7) =
                partstep11(&t, tw4r, tw3r, tw1r, tw5r, tw2r, tw4i, -tw3i, tw1i, tw5i, -tw2i);
            let (d5, d6) =
                partstep11(&t, tw5r, tw1r, tw4r, tw2r, tw3r, tw5i, -tw1i, tw4i, -tw2i, tw3i);
            let d = [d1, d2, d3, d4, d5, d6, d7, d8, d9, d10];
            if i == 0 {
                for (u, &val) in d.iter().enumerate() {
                    ch[ch_i(0, k, u + 1)] = val;
                }
            } else {
                for (u, &val) in d.iter().enumerate() {
                    ch[ch_i(i, k, u + 1)] = special_mul(val, wa[wa_i(u, i)], BWD);
                }
            }
        }
    }
}

/// Generic-radix pass for a prime factor `ip` outside the hand-fused set.
/// Accumulates the ip-1 nonzero frequencies from the stored roots of unity
/// and leaves its result in `cc`.
#[allow(clippy::too_many_arguments)]
fn passg<T: FftSample, const BWD: bool>(
    ido: usize,
    ip: usize,
    l1: usize,
    cc: &mut [Complex<T>],
    ch: &mut [Complex<T>],
    wa: &[Complex<T>],
    csarr: &[Complex<T>],
) {
    let cdim = ip;
    let ipph = (ip + 1) / 2;
    let idl1 = ido * l1;
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + cdim * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let cx_i = ch_i;
    let wal = |i: usize| -> Complex<T> {
        let w = csarr[i];
        if BWD {
            w
        } else {
            w.conj()
        }
    };

    for k in 0..l1 {
        for i in 0..ido {
            ch[ch_i(i, k, 0)] = cc[cc_i(i, 0, k)];
        }
    }
    let mut jc = ip - 1;
    for j in 1..ipph {
        for k in 0..l1 {
            for i in 0..ido {
                let (a, b) = pmc(cc[cc_i(i, j, k)], cc[cc_i(i, jc, k)]);
                ch[ch_i(i, k, j)] = a;
                ch[ch_i(i, k, jc)] = b;
            }
        }
        jc -= 1;
    }
    for k in 0..l1 {
        for i in 0..ido {
            let mut tmp = ch[ch_i(i, k, 0)];
            for j in 1..ipph {
                tmp = tmp + ch[ch_i(i, k, j)];
            }
            cc[cx_i(i, k, 0)] = tmp;
        }
    }

    let mut lc = ip - 1;
    for l in 1..ipph {
        let wl = wal(l);
        let w2l = wal(2 * l);
        for ik in 0..idl1 {
            let a0 = ch[ik];
            let a1 = ch[ik + idl1];
            let a2 = ch[ik + 2 * idl1];
            cc[ik + idl1 * l] = Complex::new(
                a0.re + wl.re * a1.re + w2l.re * a2.re,
                a0.im + wl.re * a1.im + w2l.re * a2.im,
            );
            let am1 = ch[ik + idl1 * (ip - 1)];
            let am2 = ch[ik + idl1 * (ip - 2)];
            cc[ik + idl1 * lc] = Complex::new(
                -(wl.im * am1.im + w2l.im * am2.im),
                wl.im * am1.re + w2l.im * am2.re,
            );
        }
        let mut iwal = 2 * l;
        let mut j = 3;
        let mut jc = ip - 3;
        while j + 1 < ipph {
            iwal += l;
            if iwal >= ip {
                iwal -= ip;
            }
            let xwal = wal(iwal);
            iwal += l;
            if iwal >= ip {
                iwal -= ip;
            }
            let xwal2 = wal(iwal);
            for ik in 0..idl1 {
                let aj = ch[ik + idl1 * j];
                let aj1 = ch[ik + idl1 * (j + 1)];
                let ajc = ch[ik + idl1 * jc];
                let ajc1 = ch[ik + idl1 * (jc - 1)];
                let vl = cc[ik + idl1 * l];
                cc[ik + idl1 * l] = Complex::new(
                    vl.re + aj.re * xwal.re + aj1.re * xwal2.re,
                    vl.im + aj.im * xwal.re + aj1.im * xwal2.re,
                );
                let vlc = cc[ik + idl1 * lc];
                cc[ik + idl1 * lc] = Complex::new(
                    vlc.re - (ajc.im * xwal.im + ajc1.im * xwal2.im),
                    vlc.im + ajc.re * xwal.im + ajc1.re * xwal2.im,
                );
            }
            j += 2;
            jc -= 2;
        }
        while j < ipph {
            iwal += l;
            if iwal >= ip {
                iwal -= ip;
            }
            let xwal = wal(iwal);
            for ik in 0..idl1 {
                let aj = ch[ik + idl1 * j];
                let ajc = ch[ik + idl1 * jc];
                let vl = cc[ik + idl1 * l];
                cc[ik + idl1 * l] =
                    Complex::new(vl.re + aj.re * xwal.re, vl.im + aj.im * xwal.re);
                let vlc = cc[ik + idl1 * lc];
                cc[ik + idl1 * lc] =
                    Complex::new(vlc.re - ajc.im * xwal.im, vlc.im + ajc.re * xwal.im);
            }
            j += 1;
            jc -= 1;
        }
        lc -= 1;
    }

    // shuffling and twiddling
    if ido == 1 {
        let mut jc = ip - 1;
        for j in 1..ipph {
            for ik in 0..idl1 {
                let (a, b) = pmc(cc[ik + idl1 * j], cc[ik + idl1 * jc]);
                cc[ik + idl1 * j] = a;
                cc[ik + idl1 * jc] = b;
            }
            jc -= 1;
        }
    } else {
        let mut jc = ip - 1;
        for j in 1..ipph {
            for k in 0..l1 {
                let (a, b) = pmc(cc[cx_i(0, k, j)], cc[cx_i(0, k, jc)]);
                cc[cx_i(0, k, j)] = a;
                cc[cx_i(0, k, jc)] = b;
                for i in 1..ido {
                    let (x1, x2) = pmc(cc[cx_i(i, k, j)], cc[cx_i(i, k, jc)]);
                    let idij = (j - 1) * (ido - 1) + i - 1;
                    cc[cx_i(i, k, j)] = special_mul(x1, wa[idij], BWD);
                    let idij = (jc - 1) * (ido - 1) + i - 1;
                    cc[cx_i(i, k, jc)] = special_mul(x2, wa[idij], BWD);
                }
            }
            jc -= 1;
        }
    }
}
