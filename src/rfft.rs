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
use crate::util::factorize;
use crate::FftSample;
use num_traits::AsPrimitive;

#[derive(Clone, Copy, Default)]
struct FactorData {
    fct: usize,
    tw: usize,
    tws: usize,
}

/// Mixed-radix plan for real input. The forward transform produces the
/// conjugate-even (CCE) packing: DC, then interleaved re/im of the
/// positive frequencies, with a lone real Nyquist slot for even lengths.
/// Twiddles are stored as interleaved (cos, sin) scalar pairs.
pub(crate) struct RfftPlan<T> {
    length: usize,
    factors: Vec<FactorData>,
    mem: AlignedVec<T>,
}

impl<T: FftSample> RfftPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(length: usize) -> Result<RfftPlan<T>, FftError> {
        if length == 0 {
            return Err(FftError::ZeroSizedFft);
        }
        let mut plan = RfftPlan {
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
        let mut twsz = 0;
        let mut l1 = 1;
        for f in self.factors.iter() {
            let ip = f.fct;
            let ido = self.length / (l1 * ip);
            twsz += (ip - 1) * (ido - 1);
            if ip > 5 {
                twsz += 2 * ip;
            }
            l1 *= ip;
        }
        twsz
    }

    fn comp_twiddle(&mut self) -> Result<(), FftError> {
        let twid = SinCos2PiByN::new(self.length, true)?;
        let length = self.length;
        let nfct = self.factors.len();
        let mut l1 = 1;
        let mut ptr = 0;
        for (k, f) in self.factors.iter_mut().enumerate() {
            let ip = f.fct;
            let ido = length / (l1 * ip);
            // the last factor runs with ido == 1 and needs no stage twiddles
            if k < nfct - 1 {
                f.tw = ptr;
                ptr += (ip - 1) * (ido - 1);
                for j in 1..ip {
                    for i in 1..=(ido - 1) / 2 {
                        let (c, s) = twid.cs(j * l1 * i);
                        self.mem[f.tw + (j - 1) * (ido - 1) + 2 * i - 2] = c.as_();
                        self.mem[f.tw + (j - 1) * (ido - 1) + 2 * i - 1] = s.as_();
                    }
                }
            }
            if ip > 5 {
                f.tws = ptr;
                ptr += 2 * ip;
                self.mem[f.tws] = 1f64.as_();
                self.mem[f.tws + 1] = 0f64.as_();
                for i in 1..=ip >> 1 {
                    let (c, s) = twid.cs(i * (length / ip));
                    self.mem[f.tws + 2 * i] = c.as_();
                    self.mem[f.tws + 2 * i + 1] = s.as_();
                    self.mem[f.tws + 2 * (ip - i)] = c.as_();
                    self.mem[f.tws + 2 * (ip - i) + 1] = (-s).as_();
                }
            }
            l1 *= ip;
        }
        Ok(())
    }

    /// Real-to-CCE transform, factors iterated from the last to the first.
    pub(crate) fn forward(&self, c: &mut [T], fct: T) -> Result<(), FftError> {
        if c.len() != self.length {
            return Err(FftError::InvalidInPlaceLength(self.length, c.len()));
        }
        let one: T = 1f64.as_();
        if self.length == 1 {
            c[0] = c[0] * fct;
            return Ok(());
        }
        let n = self.length;
        let mut ch: AlignedVec<T> = AlignedVec::new(n)?;
        let nf = self.factors.len();
        let mut l1 = n;
        let mut in_c = true;
        for k1 in 0..nf {
            let k = nf - k1 - 1;
            let f = self.factors[k];
            let ip = f.fct;
            let ido = n / l1;
            l1 /= ip;
            let tw = if k < nf - 1 {
                &self.mem[f.tw..f.tw + (ip - 1) * (ido - 1)]
            } else {
                &self.mem[0..0]
            };
            let (src, dst): (&mut [T], &mut [T]) = if in_c {
                (&mut *c, &mut ch[..])
            } else {
                (&mut ch[..], &mut *c)
            };
            let swapped = match ip {
                4 => {
                    radf4(ido, l1, src, dst, tw);
                    true
                }
                2 => {
                    radf2(ido, l1, src, dst, tw);
                    true
                }
                3 => {
                    radf3(ido, l1, src, dst, tw);
                    true
                }
                5 => {
                    radf5(ido, l1, src, dst, tw);
                    true
                }
                _ => {
                    let tws = &self.mem[f.tws..f.tws + 2 * ip];
                    radfg(ido, ip, l1, src, dst, tw, tws);
                    false
                }
            };
            if swapped {
                in_c = !in_c;
            }
        }
        copy_and_norm(c, &ch, in_c, fct, one);
        Ok(())
    }

    /// CCE-to-real transform, factors iterated from the first to the last.
    pub(crate) fn backward(&self, c: &mut [T], fct: T) -> Result<(), FftError> {
        if c.len() != self.length {
            return Err(FftError::InvalidInPlaceLength(self.length, c.len()));
        }
        let one: T = 1f64.as_();
        if self.length == 1 {
            c[0] = c[0] * fct;
            return Ok(());
        }
        let n = self.length;
        let mut ch: AlignedVec<T> = AlignedVec::new(n)?;
        let nf = self.factors.len();
        let mut l1 = 1;
        let mut in_c = true;
        for k in 0..nf {
            let f = self.factors[k];
            let ip = f.fct;
            let ido = n / (ip * l1);
            let tw = if k < nf - 1 {
                &self.mem[f.tw..f.tw + (ip - 1) * (ido - 1)]
            } else {
                &self.mem[0..0]
            };
            let (src, dst): (&mut [T], &mut [T]) = if in_c {
                (&mut *c, &mut ch[..])
            } else {
                (&mut ch[..], &mut *c)
            };
            match ip {
                4 => radb4(ido, l1, src, dst, tw),
                2 => radb2(ido, l1, src, dst, tw),
                3 => radb3(ido, l1, src, dst, tw),
                5 => radb5(ido, l1, src, dst, tw),
                _ => {
                    let tws = &self.mem[f.tws..f.tws + 2 * ip];
                    radbg(ido, ip, l1, src, dst, tw, tws);
                }
            }
            in_c = !in_c;
            l1 *= ip;
        }
        copy_and_norm(c, &ch, in_c, fct, one);
        Ok(())
    }
}

fn copy_and_norm<T: FftSample>(c: &mut [T], ch: &[T], in_c: bool, fct: T, one: T) {
    if !in_c {
        if fct != one {
            for (dst, src) in c.iter_mut().zip(ch.iter()) {
                *dst = *src * fct;
            }
        } else {
            c.copy_from_slice(ch);
        }
    } else if fct != one {
        for v in c.iter_mut() {
            *v = *v * fct;
        }
    }
}

#[inline(always)]
fn pm<T: FftSample>(c: T, d: T) -> (T, T) {
    (c + d, c - d)
}

/// (a, b) = conj(c + i d) * (e + i f)
#[inline(always)]
fn mulpm<T: FftSample>(c: T, d: T, e: T, f: T) -> (T, T) {
    (c * e + d * f, c * f - d * e)
}

fn radf2<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T]) {
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + 2 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);

    for k in 0..l1 {
        let (a, b) = pm(cc[cc_i(0, k, 0)], cc[cc_i(0, k, 1)]);
        ch[ch_i(0, 0, k)] = a;
        ch[ch_i(ido - 1, 1, k)] = b;
    }
    if ido & 1 == 0 {
        for k in 0..l1 {
            ch[ch_i(0, 1, k)] = -cc[cc_i(ido - 1, k, 1)];
            ch[ch_i(ido - 1, 0, k)] = cc[cc_i(ido - 1, k, 0)];
        }
    }
    if ido <= 2 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let (tr2, ti2) = mulpm(
                wa[wa_i(0, i - 2)],
                wa[wa_i(0, i - 1)],
                cc[cc_i(i - 1, k, 1)],
                cc[cc_i(i, k, 1)],
            );
            let (a, b) = pm(cc[cc_i(i - 1, k, 0)], tr2);
            ch[ch_i(i - 1, 0, k)] = a;
            ch[ch_i(ic - 1, 1, k)] = b;
            let (a, b) = pm(ti2, cc[cc_i(i, k, 0)]);
            ch[ch_i(i, 0, k)] = a;
            ch[ch_i(ic, 1, k)] = b;
            i += 2;
        }
    }
}

fn radf3<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T])
where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + 3 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);
    let taur: T = (-0.5f64).as_();
    let taui: T = 0.86602540378443864676f64.as_();

    for k in 0..l1 {
        let cr2 = cc[cc_i(0, k, 1)] + cc[cc_i(0, k, 2)];
        ch[ch_i(0, 0, k)] = cc[cc_i(0, k, 0)] + cr2;
        ch[ch_i(0, 2, k)] = taui * (cc[cc_i(0, k, 2)] - cc[cc_i(0, k, 1)]);
        ch[ch_i(ido - 1, 1, k)] = cc[cc_i(0, k, 0)] + taur * cr2;
    }
    if ido == 1 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let (dr2, di2) = mulpm(
                wa[wa_i(0, i - 2)],
                wa[wa_i(0, i - 1)],
                cc[cc_i(i - 1, k, 1)],
                cc[cc_i(i, k, 1)],
            );
            let (dr3, di3) = mulpm(
                wa[wa_i(1, i - 2)],
                wa[wa_i(1, i - 1)],
                cc[cc_i(i - 1, k, 2)],
                cc[cc_i(i, k, 2)],
            );
            let cr2 = dr2 + dr3;
            let ci2 = di2 + di3;
            ch[ch_i(i - 1, 0, k)] = cc[cc_i(i - 1, k, 0)] + cr2;
            ch[ch_i(i, 0, k)] = cc[cc_i(i, k, 0)] + ci2;
            let tr2 = cc[cc_i(i - 1, k, 0)] + taur * cr2;
            let ti2 = cc[cc_i(i, k, 0)] + taur * ci2;
            let tr3 = taui * (di2 - di3);
            let ti3 = taui * (dr3 - dr2);
            let (a, b) = pm(tr2, tr3);
            ch[ch_i(i - 1, 2, k)] = a;
            ch[ch_i(ic - 1, 1, k)] = b;
            let (a, b) = pm(ti3, ti2);
            ch[ch_i(i, 2, k)] = a;
            ch[ch_i(ic, 1, k)] = b;
            i += 2;
        }
    }
}

fn radf4<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T])
where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + 4 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);
    let hsqt2: T = 0.70710678118654752440f64.as_();

    for k in 0..l1 {
        let (tr1, b1) = pm(cc[cc_i(0, k, 3)], cc[cc_i(0, k, 1)]);
        ch[ch_i(0, 2, k)] = b1;
        let (tr2, b2) = pm(cc[cc_i(0, k, 0)], cc[cc_i(0, k, 2)]);
        ch[ch_i(ido - 1, 1, k)] = b2;
        let (a, b) = pm(tr2, tr1);
        ch[ch_i(0, 0, k)] = a;
        ch[ch_i(ido - 1, 3, k)] = b;
    }
    if ido & 1 == 0 {
        for k in 0..l1 {
            let ti1 = -hsqt2 * (cc[cc_i(ido - 1, k, 1)] + cc[cc_i(ido - 1, k, 3)]);
            let tr1 = hsqt2 * (cc[cc_i(ido - 1, k, 1)] - cc[cc_i(ido - 1, k, 3)]);
            let (a, b) = pm(cc[cc_i(ido - 1, k, 0)], tr1);
            ch[ch_i(ido - 1, 0, k)] = a;
            ch[ch_i(ido - 1, 2, k)] = b;
            let (a, b) = pm(ti1, cc[cc_i(ido - 1, k, 2)]);
            ch[ch_i(0, 3, k)] = a;
            ch[ch_i(0, 1, k)] = b;
        }
    }
    if ido <= 2 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let (cr2, ci2) = mulpm(
                wa[wa_i(0, i - 2)],
                wa[wa_i(0, i - 1)],
                cc[cc_i(i - 1, k, 1)],
                cc[cc_i(i, k, 1)],
            );
            let (cr3, ci3) = mulpm(
                wa[wa_i(1, i - 2)],
                wa[wa_i(1, i - 1)],
                cc[cc_i(i - 1, k, 2)],
                cc[cc_i(i, k, 2)],
            );
            let (cr4, ci4) = mulpm(
                wa[wa_i(2, i - 2)],
                wa[wa_i(2, i - 1)],
                cc[cc_i(i - 1, k, 3)],
                cc[cc_i(i, k, 3)],
            );
            let (tr1, tr4) = pm(cr4, cr2);
            let (ti1, ti4) = pm(ci2, ci4);
            let (tr2, tr3) = pm(cc[cc_i(i - 1, k, 0)], cr3);
            let (ti2, ti3) = pm(cc[cc_i(i, k, 0)], ci3);
            let (a, b) = pm(tr2, tr1);
            ch[ch_i(i - 1, 0, k)] = a;
            ch[ch_i(ic - 1, 3, k)] = b;
            let (a, b) = pm(ti1, ti2);
            ch[ch_i(i, 0, k)] = a;
            ch[ch_i(ic, 3, k)] = b;
            let (a, b) = pm(tr3, ti4);
            ch[ch_i(i - 1, 2, k)] = a;
            ch[ch_i(ic - 1, 1, k)] = b;
            let (a, b) = pm(tr4, ti3);
            ch[ch_i(i, 2, k)] = a;
            ch[ch_i(ic, 1, k)] = b;
            i += 2;
        }
    }
}

fn radf5<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T])
where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + 5 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);
    let tr11: T = 0.3090169943749474241f64.as_();
    let ti11: T = 0.95105651629515357212f64.as_();
    let tr12: T = (-0.8090169943749474241f64).as_();
    let ti12: T = 0.58778525229247312917f64.as_();

    for k in 0..l1 {
        let (cr2, ci5) = pm(cc[cc_i(0, k, 4)], cc[cc_i(0, k, 1)]);
        let (cr3, ci4) = pm(cc[cc_i(0, k, 3)], cc[cc_i(0, k, 2)]);
        ch[ch_i(0, 0, k)] = cc[cc_i(0, k, 0)] + cr2 + cr3;
        ch[ch_i(ido - 1, 1, k)] = cc[cc_i(0, k, 0)] + tr11 * cr2 + tr12 * cr3;
        ch[ch_i(0, 2, k)] = ti11 * ci5 + ti12 * ci4;
        ch[ch_i(ido - 1, 3, k)] = cc[cc_i(0, k, 0)] + tr12 * cr2 + tr11 * cr3;
        ch[ch_i(0, 4, k)] = ti12 * ci5 - ti11 * ci4;
    }
    if ido == 1 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let (dr2, di2) = mulpm(
                wa[wa_i(0, i - 2)],
                wa[wa_i(0, i - 1)],
                cc[cc_i(i - 1, k, 1)],
                cc[cc_i(i, k, 1)],
            );
            let (dr3, di3) = mulpm(
                wa[wa_i(1, i - 2)],
                wa[wa_i(1, i - 1)],
                cc[cc_i(i - 1, k, 2)],
                cc[cc_i(i, k, 2)],
            );
            let (dr4, di4) = mulpm(
                wa[wa_i(2, i - 2)],
                wa[wa_i(2, i - 1)],
                cc[cc_i(i - 1, k, 3)],
                cc[cc_i(i, k, 3)],
            );
            let (dr5, di5) = mulpm(
                wa[wa_i(3, i - 2)],
                wa[wa_i(3, i - 1)],
                cc[cc_i(i - 1, k, 4)],
                cc[cc_i(i, k, 4)],
            );
            let (cr2, ci5) = pm(dr5, dr2);
            let (ci2, cr5) = pm(di2, di5);
            let (cr3, ci4) = pm(dr4, dr3);
            let (ci3, cr4) = pm(di3, di4);
            ch[ch_i(i - 1, 0, k)] = cc[cc_i(i - 1, k, 0)] + cr2 + cr3;
            ch[ch_i(i, 0, k)] = cc[cc_i(i, k, 0)] + ci2 + ci3;
            let tr2 = cc[cc_i(i - 1, k, 0)] + tr11 * cr2 + tr12 * cr3;
            let ti2 = cc[cc_i(i, k, 0)] + tr11 * ci2 + tr12 * ci3;
            let tr3 = cc[cc_i(i - 1, k, 0)] + tr12 * cr2 + tr11 * cr3;
            let ti3 = cc[cc_i(i, k, 0)] + tr12 * ci2 + tr11 * ci3;
            let (tr5, tr4) = mulpm(cr5, cr4, ti11, ti12);
            let (ti5, ti4) = mulpm(ci5, ci4, ti11, ti12);
            let (a, b) = pm(tr2, tr5);
            ch[ch_i(i - 1, 2, k)] = a;
            ch[ch_i(ic - 1, 1, k)] = b;
            let (a, b) = pm(ti5, ti2);
            ch[ch_i(i, 2, k)] = a;
            ch[ch_i(ic, 1, k)] = b;
            let (a, b) = pm(tr3, tr4);
            ch[ch_i(i - 1, 4, k)] = a;
            ch[ch_i(ic - 1, 3, k)] = b;
            let (a, b) = pm(ti4, ti3);
            ch[ch_i(i, 4, k)] = a;
            ch[ch_i(ic, 3, k)] = b;
            i += 2;
        }
    }
}

/// Generic real forward radix. Works across both buffers and leaves the
/// packed result in `cc`.
#[allow(clippy::too_many_arguments)]
fn radfg<T: FftSample>(
    ido: usize,
    ip: usize,
    l1: usize,
    cc: &mut [T],
    ch: &mut [T],
    wa: &[T],
    csarr: &[T],
) {
    let cdim = ip;
    let ipph = (ip + 1) / 2;
    let idl1 = ido * l1;
    let c1 = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + cdim * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);

    if ido > 1 {
        let mut jc = ip - 1;
        for j in 1..ipph {
            let is = (j - 1) * (ido - 1);
            let is2 = (jc - 1) * (ido - 1);
            for k in 0..l1 {
                let mut idij = is;
                let mut idij2 = is2;
                let mut i = 1;
                while i <= ido - 2 {
                    let t1 = cc[c1(i, k, j)];
                    let t2 = cc[c1(i + 1, k, j)];
                    let t3 = cc[c1(i, k, jc)];
                    let t4 = cc[c1(i + 1, k, jc)];
                    let x1 = wa[idij] * t1 + wa[idij + 1] * t2;
                    let x2 = wa[idij] * t2 - wa[idij + 1] * t1;
                    let x3 = wa[idij2] * t3 + wa[idij2 + 1] * t4;
                    let x4 = wa[idij2] * t4 - wa[idij2 + 1] * t3;
                    cc[c1(i, k, j)] = x1 + x3;
                    cc[c1(i, k, jc)] = x2 - x4;
                    cc[c1(i + 1, k, j)] = x2 + x4;
                    cc[c1(i + 1, k, jc)] = x3 - x1;
                    idij += 2;
                    idij2 += 2;
                    i += 2;
                }
            }
            jc -= 1;
        }
    }

    let mut jc = ip - 1;
    for j in 1..ipph {
        for k in 0..l1 {
            let t1 = cc[c1(0, k, j)];
            let t2 = cc[c1(0, k, jc)];
            cc[c1(0, k, j)] = t1 + t2;
            cc[c1(0, k, jc)] = t2 - t1;
        }
        jc -= 1;
    }

    let mut lc = ip - 1;
    for l in 1..ipph {
        for ik in 0..idl1 {
            ch[ik + idl1 * l] =
                cc[ik] + csarr[2 * l] * cc[ik + idl1] + csarr[4 * l] * cc[ik + 2 * idl1];
            ch[ik + idl1 * lc] = csarr[2 * l + 1] * cc[ik + idl1 * (ip - 1)]
                + csarr[4 * l + 1] * cc[ik + idl1 * (ip - 2)];
        }
        let mut iang = 2 * l;
        let mut j = 3;
        let mut jc = ip - 3;
        while j + 3 < ipph {
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar1 = csarr[2 * iang];
            let ai1 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar2 = csarr[2 * iang];
            let ai2 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar3 = csarr[2 * iang];
            let ai3 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar4 = csarr[2 * iang];
            let ai4 = csarr[2 * iang + 1];
            for ik in 0..idl1 {
                ch[ik + idl1 * l] = ch[ik + idl1 * l]
                    + ar1 * cc[ik + idl1 * j]
                    + ar2 * cc[ik + idl1 * (j + 1)]
                    + ar3 * cc[ik + idl1 * (j + 2)]
                    + ar4 * cc[ik + idl1 * (j + 3)];
                ch[ik + idl1 * lc] = ch[ik + idl1 * lc]
                    + ai1 * cc[ik + idl1 * jc]
                    + ai2 * cc[ik + idl1 * (jc - 1)]
                    + ai3 * cc[ik + idl1 * (jc - 2)]
                    + ai4 * cc[ik + idl1 * (jc - 3)];
            }
            j += 4;
            jc -= 4;
        }
        while j + 1 < ipph {
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar1 = csarr[2 * iang];
            let ai1 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar2 = csarr[2 * iang];
            let ai2 = csarr[2 * iang + 1];
            for ik in 0..idl1 {
                ch[ik + idl1 * l] = ch[ik + idl1 * l]
                    + ar1 * cc[ik + idl1 * j]
                    + ar2 * cc[ik + idl1 * (j + 1)];
                ch[ik + idl1 * lc] = ch[ik + idl1 * lc]
                    + ai1 * cc[ik + idl1 * jc]
                    + ai2 * cc[ik + idl1 * (jc - 1)];
            }
            j += 2;
            jc -= 2;
        }
        while j < ipph {
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let war = csarr[2 * iang];
            let wai = csarr[2 * iang + 1];
            for ik in 0..idl1 {
                ch[ik + idl1 * l] = ch[ik + idl1 * l] + war * cc[ik + idl1 * j];
                ch[ik + idl1 * lc] = ch[ik + idl1 * lc] + wai * cc[ik + idl1 * jc];
            }
            j += 1;
            jc -= 1;
        }
        lc -= 1;
    }

    for ik in 0..idl1 {
        ch[ik] = cc[ik];
    }
    for j in 1..ipph {
        for ik in 0..idl1 {
            ch[ik] = ch[ik] + cc[ik + idl1 * j];
        }
    }

    for k in 0..l1 {
        for i in 0..ido {
            cc[cc_i(i, 0, k)] = ch[ch_i(i, k, 0)];
        }
    }

    let mut jc = ip - 1;
    for j in 1..ipph {
        let j2 = 2 * j - 1;
        for k in 0..l1 {
            cc[cc_i(ido - 1, j2, k)] = ch[ch_i(0, k, j)];
            cc[cc_i(0, j2 + 1, k)] = ch[ch_i(0, k, jc)];
        }
        jc -= 1;
    }

    if ido == 1 {
        return;
    }

    let mut jc = ip - 1;
    for j in 1..ipph {
        let j2 = 2 * j - 1;
        for k in 0..l1 {
            let mut i = 1;
            while i <= ido - 2 {
                let ic = ido - i - 2;
                cc[cc_i(i, j2 + 1, k)] = ch[ch_i(i, k, j)] + ch[ch_i(i, k, jc)];
                cc[cc_i(ic, j2, k)] = ch[ch_i(i, k, j)] - ch[ch_i(i, k, jc)];
                cc[cc_i(i + 1, j2 + 1, k)] = ch[ch_i(i + 1, k, j)] + ch[ch_i(i + 1, k, jc)];
                cc[cc_i(ic + 1, j2, k)] = ch[ch_i(i + 1, k, jc)] - ch[ch_i(i + 1, k, j)];
                i += 2;
            }
        }
        jc -= 1;
    }
}

fn radb2<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T])
where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 2 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);
    let two: T = 2f64.as_();

    for k in 0..l1 {
        let (a, b) = pm(cc[cc_i(0, 0, k)], cc[cc_i(ido - 1, 1, k)]);
        ch[ch_i(0, k, 0)] = a;
        ch[ch_i(0, k, 1)] = b;
    }
    if ido & 1 == 0 {
        for k in 0..l1 {
            ch[ch_i(ido - 1, k, 0)] = two * cc[cc_i(ido - 1, 0, k)];
            ch[ch_i(ido - 1, k, 1)] = -two * cc[cc_i(0, 1, k)];
        }
    }
    if ido <= 2 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let (a, tr2) = pm(cc[cc_i(i - 1, 0, k)], cc[cc_i(ic - 1, 1, k)]);
            ch[ch_i(i - 1, k, 0)] = a;
            let (ti2, b) = pm(cc[cc_i(i, 0, k)], cc[cc_i(ic, 1, k)]);
            ch[ch_i(i, k, 0)] = b;
            let (x, y) = mulpm(wa[wa_i(0, i - 2)], wa[wa_i(0, i - 1)], ti2, tr2);
            ch[ch_i(i, k, 1)] = x;
            ch[ch_i(i - 1, k, 1)] = y;
            i += 2;
        }
    }
}

fn radb3<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T])
where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 3 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);
    let two: T = 2f64.as_();
    let taur: T = (-0.5f64).as_();
    let taui: T = 0.86602540378443864676f64.as_();

    for k in 0..l1 {
        let tr2 = two * cc[cc_i(ido - 1, 1, k)];
        let cr2 = cc[cc_i(0, 0, k)] + taur * tr2;
        ch[ch_i(0, k, 0)] = cc[cc_i(0, 0, k)] + tr2;
        let ci3 = two * taui * cc[cc_i(0, 2, k)];
        let (a, b) = pm(cr2, ci3);
        ch[ch_i(0, k, 2)] = a;
        ch[ch_i(0, k, 1)] = b;
    }
    if ido == 1 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let tr2 = cc[cc_i(i - 1, 2, k)] + cc[cc_i(ic - 1, 1, k)];
            let ti2 = cc[cc_i(i, 2, k)] - cc[cc_i(ic, 1, k)];
            let cr2 = cc[cc_i(i - 1, 0, k)] + taur * tr2;
            let ci2 = cc[cc_i(i, 0, k)] + taur * ti2;
            ch[ch_i(i - 1, k, 0)] = cc[cc_i(i - 1, 0, k)] + tr2;
            ch[ch_i(i, k, 0)] = cc[cc_i(i, 0, k)] + ti2;
            let cr3 = taui * (cc[cc_i(i - 1, 2, k)] - cc[cc_i(ic - 1, 1, k)]);
            let ci3 = taui * (cc[cc_i(i, 2, k)] + cc[cc_i(ic, 1, k)]);
            let (dr3, dr2) = pm(cr2, ci3);
            let (di2, di3) = pm(ci2, cr3);
            let (x, y) = mulpm(wa[wa_i(0, i - 2)], wa[wa_i(0, i - 1)], di2, dr2);
            ch[ch_i(i, k, 1)] = x;
            ch[ch_i(i - 1, k, 1)] = y;
            let (x, y) = mulpm(wa[wa_i(1, i - 2)], wa[wa_i(1, i - 1)], di3, dr3);
            ch[ch_i(i, k, 2)] = x;
            ch[ch_i(i - 1, k, 2)] = y;
            i += 2;
        }
    }
}

fn radb4<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T])
where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 4 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);
    let two: T = 2f64.as_();
    let sqrt2: T = 1.41421356237309504880f64.as_();

    for k in 0..l1 {
        let (tr2, tr1) = pm(cc[cc_i(0, 0, k)], cc[cc_i(ido - 1, 3, k)]);
        let tr3 = two * cc[cc_i(ido - 1, 1, k)];
        let tr4 = two * cc[cc_i(0, 2, k)];
        let (a, b) = pm(tr2, tr3);
        ch[ch_i(0, k, 0)] = a;
        ch[ch_i(0, k, 2)] = b;
        let (a, b) = pm(tr1, tr4);
        ch[ch_i(0, k, 3)] = a;
        ch[ch_i(0, k, 1)] = b;
    }
    if ido & 1 == 0 {
        for k in 0..l1 {
            let (ti1, ti2) = pm(cc[cc_i(0, 3, k)], cc[cc_i(0, 1, k)]);
            let (tr2, tr1) = pm(cc[cc_i(ido - 1, 0, k)], cc[cc_i(ido - 1, 2, k)]);
            ch[ch_i(ido - 1, k, 0)] = tr2 + tr2;
            ch[ch_i(ido - 1, k, 1)] = sqrt2 * (tr1 - ti1);
            ch[ch_i(ido - 1, k, 2)] = ti2 + ti2;
            ch[ch_i(ido - 1, k, 3)] = -sqrt2 * (tr1 + ti1);
        }
    }
    if ido <= 2 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let (tr2, tr1) = pm(cc[cc_i(i - 1, 0, k)], cc[cc_i(ic - 1, 3, k)]);
            let (ti1, ti2) = pm(cc[cc_i(i, 0, k)], cc[cc_i(ic, 3, k)]);
            let (tr4, ti3) = pm(cc[cc_i(i, 2, k)], cc[cc_i(ic, 1, k)]);
            let (tr3, ti4) = pm(cc[cc_i(i - 1, 2, k)], cc[cc_i(ic - 1, 1, k)]);
            let (a, cr3) = pm(tr2, tr3);
            ch[ch_i(i - 1, k, 0)] = a;
            let (b, ci3) = pm(ti2, ti3);
            ch[ch_i(i, k, 0)] = b;
            let (cr4, cr2) = pm(tr1, tr4);
            let (ci2, ci4) = pm(ti1, ti4);
            let (x, y) = mulpm(wa[wa_i(0, i - 2)], wa[wa_i(0, i - 1)], ci2, cr2);
            ch[ch_i(i, k, 1)] = x;
            ch[ch_i(i - 1, k, 1)] = y;
            let (x, y) = mulpm(wa[wa_i(1, i - 2)], wa[wa_i(1, i - 1)], ci3, cr3);
            ch[ch_i(i, k, 2)] = x;
            ch[ch_i(i - 1, k, 2)] = y;
            let (x, y) = mulpm(wa[wa_i(2, i - 2)], wa[wa_i(2, i - 1)], ci4, cr4);
            ch[ch_i(i, k, 3)] = x;
            ch[ch_i(i - 1, k, 3)] = y;
            i += 2;
        }
    }
}

fn radb5<T: FftSample>(ido: usize, l1: usize, cc: &[T], ch: &mut [T], wa: &[T])
where
    f64: AsPrimitive<T>,
{
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + 5 * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let wa_i = |x: usize, i: usize| i + x * (ido - 1);
    let tr11: T = 0.3090169943749474241f64.as_();
    let ti11: T = 0.95105651629515357212f64.as_();
    let tr12: T = (-0.8090169943749474241f64).as_();
    let ti12: T = 0.58778525229247312917f64.as_();

    for k in 0..l1 {
        let ti5 = cc[cc_i(0, 2, k)] + cc[cc_i(0, 2, k)];
        let ti4 = cc[cc_i(0, 4, k)] + cc[cc_i(0, 4, k)];
        let tr2 = cc[cc_i(ido - 1, 1, k)] + cc[cc_i(ido - 1, 1, k)];
        let tr3 = cc[cc_i(ido - 1, 3, k)] + cc[cc_i(ido - 1, 3, k)];
        ch[ch_i(0, k, 0)] = cc[cc_i(0, 0, k)] + tr2 + tr3;
        let cr2 = cc[cc_i(0, 0, k)] + tr11 * tr2 + tr12 * tr3;
        let cr3 = cc[cc_i(0, 0, k)] + tr12 * tr2 + tr11 * tr3;
        let (ci5, ci4) = mulpm(ti5, ti4, ti11, ti12);
        let (a, b) = pm(cr2, ci5);
        ch[ch_i(0, k, 4)] = a;
        ch[ch_i(0, k, 1)] = b;
        let (a, b) = pm(cr3, ci4);
        ch[ch_i(0, k, 3)] = a;
        ch[ch_i(0, k, 2)] = b;
    }
    if ido == 1 {
        return;
    }
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let (tr2, tr5) = pm(cc[cc_i(i - 1, 2, k)], cc[cc_i(ic - 1, 1, k)]);
            let (ti5, ti2) = pm(cc[cc_i(i, 2, k)], cc[cc_i(ic, 1, k)]);
            let (tr3, tr4) = pm(cc[cc_i(i - 1, 4, k)], cc[cc_i(ic - 1, 3, k)]);
            let (ti4, ti3) = pm(cc[cc_i(i, 4, k)], cc[cc_i(ic, 3, k)]);
            ch[ch_i(i - 1, k, 0)] = cc[cc_i(i - 1, 0, k)] + tr2 + tr3;
            ch[ch_i(i, k, 0)] = cc[cc_i(i, 0, k)] + ti2 + ti3;
            let cr2 = cc[cc_i(i - 1, 0, k)] + tr11 * tr2 + tr12 * tr3;
            let ci2 = cc[cc_i(i, 0, k)] + tr11 * ti2 + tr12 * ti3;
            let cr3 = cc[cc_i(i - 1, 0, k)] + tr12 * tr2 + tr11 * tr3;
            let ci3 = cc[cc_i(i, 0, k)] + tr12 * ti2 + tr11 * ti3;
            let (cr5, cr4) = mulpm(tr5, tr4, ti11, ti12);
            let (ci5, ci4) = mulpm(ti5, ti4, ti11, ti12);
            let (dr4, dr3) = pm(cr3, ci4);
            let (di3, di4) = pm(ci3, cr4);
            let (dr5, dr2) = pm(cr2, ci5);
            let (di2, di5) = pm(ci2, cr5);
            let (x, y) = mulpm(wa[wa_i(0, i - 2)], wa[wa_i(0, i - 1)], di2, dr2);
            ch[ch_i(i, k, 1)] = x;
            ch[ch_i(i - 1, k, 1)] = y;
            let (x, y) = mulpm(wa[wa_i(1, i - 2)], wa[wa_i(1, i - 1)], di3, dr3);
            ch[ch_i(i, k, 2)] = x;
            ch[ch_i(i - 1, k, 2)] = y;
            let (x, y) = mulpm(wa[wa_i(2, i - 2)], wa[wa_i(2, i - 1)], di4, dr4);
            ch[ch_i(i, k, 3)] = x;
            ch[ch_i(i - 1, k, 3)] = y;
            let (x, y) = mulpm(wa[wa_i(3, i - 2)], wa[wa_i(3, i - 1)], di5, dr5);
            ch[ch_i(i, k, 4)] = x;
            ch[ch_i(i - 1, k, 4)] = y;
            i += 2;
        }
    }
}

/// Generic real backward radix. Leaves its result in `ch`.
#[allow(clippy::too_many_arguments)]
fn radbg<T: FftSample>(
    ido: usize,
    ip: usize,
    l1: usize,
    cc: &mut [T],
    ch: &mut [T],
    wa: &[T],
    csarr: &[T],
) where
    f64: AsPrimitive<T>,
{
    let cdim = ip;
    let ipph = (ip + 1) / 2;
    let idl1 = ido * l1;
    let c1 = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let cc_i = |a: usize, b: usize, c: usize| a + ido * (b + cdim * c);
    let ch_i = |a: usize, b: usize, c: usize| a + ido * (b + l1 * c);
    let two: T = 2f64.as_();

    for k in 0..l1 {
        for i in 0..ido {
            ch[ch_i(i, k, 0)] = cc[cc_i(i, 0, k)];
        }
    }
    let mut jc = ip - 1;
    for j in 1..ipph {
        let j2 = 2 * j - 1;
        for k in 0..l1 {
            ch[ch_i(0, k, j)] = two * cc[cc_i(ido - 1, j2, k)];
            ch[ch_i(0, k, jc)] = two * cc[cc_i(0, j2 + 1, k)];
        }
        jc -= 1;
    }

    if ido != 1 {
        let mut jc = ip - 1;
        for j in 1..ipph {
            let j2 = 2 * j - 1;
            for k in 0..l1 {
                let mut i = 1;
                while i <= ido - 2 {
                    let ic = ido - i - 2;
                    ch[ch_i(i, k, j)] = cc[cc_i(i, j2 + 1, k)] + cc[cc_i(ic, j2, k)];
                    ch[ch_i(i, k, jc)] = cc[cc_i(i, j2 + 1, k)] - cc[cc_i(ic, j2, k)];
                    ch[ch_i(i + 1, k, j)] = cc[cc_i(i + 1, j2 + 1, k)] - cc[cc_i(ic + 1, j2, k)];
                    ch[ch_i(i + 1, k, jc)] = cc[cc_i(i + 1, j2 + 1, k)] + cc[cc_i(ic + 1, j2, k)];
                    i += 2;
                }
            }
            jc -= 1;
        }
    }

    let mut lc = ip - 1;
    for l in 1..ipph {
        for ik in 0..idl1 {
            cc[ik + idl1 * l] =
                ch[ik] + csarr[2 * l] * ch[ik + idl1] + csarr[4 * l] * ch[ik + 2 * idl1];
            cc[ik + idl1 * lc] = csarr[2 * l + 1] * ch[ik + idl1 * (ip - 1)]
                + csarr[4 * l + 1] * ch[ik + idl1 * (ip - 2)];
        }
        let mut iang = 2 * l;
        let mut j = 3;
        let mut jc = ip - 3;
        while j + 3 < ipph {
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar1 = csarr[2 * iang];
            let ai1 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar2 = csarr[2 * iang];
            let ai2 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar3 = csarr[2 * iang];
            let ai3 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar4 = csarr[2 * iang];
            let ai4 = csarr[2 * iang + 1];
            for ik in 0..idl1 {
                cc[ik + idl1 * l] = cc[ik + idl1 * l]
                    + ar1 * ch[ik + idl1 * j]
                    + ar2 * ch[ik + idl1 * (j + 1)]
                    + ar3 * ch[ik + idl1 * (j + 2)]
                    + ar4 * ch[ik + idl1 * (j + 3)];
                cc[ik + idl1 * lc] = cc[ik + idl1 * lc]
                    + ai1 * ch[ik + idl1 * jc]
                    + ai2 * ch[ik + idl1 * (jc - 1)]
                    + ai3 * ch[ik + idl1 * (jc - 2)]
                    + ai4 * ch[ik + idl1 * (jc - 3)];
            }
            j += 4;
            jc -= 4;
        }
        while j + 1 < ipph {
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar1 = csarr[2 * iang];
            let ai1 = csarr[2 * iang + 1];
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let ar2 = csarr[2 * iang];
            let ai2 = csarr[2 * iang + 1];
            for ik in 0..idl1 {
                cc[ik + idl1 * l] = cc[ik + idl1 * l]
                    + ar1 * ch[ik + idl1 * j]
                    + ar2 * ch[ik + idl1 * (j + 1)];
                cc[ik + idl1 * lc] = cc[ik + idl1 * lc]
                    + ai1 * ch[ik + idl1 * jc]
                    + ai2 * ch[ik + idl1 * (jc - 1)];
            }
            j += 2;
            jc -= 2;
        }
        while j < ipph {
            iang += l;
            if iang >= ip {
                iang -= ip;
            }
            let war = csarr[2 * iang];
            let wai = csarr[2 * iang + 1];
            for ik in 0..idl1 {
                cc[ik + idl1 * l] = cc[ik + idl1 * l] + war * ch[ik + idl1 * j];
                cc[ik + idl1 * lc] = cc[ik + idl1 * lc] + wai * ch[ik + idl1 * jc];
            }
            j += 1;
            jc -= 1;
        }
        lc -= 1;
    }

    for j in 1..ipph {
        for ik in 0..idl1 {
            ch[ik] = ch[ik] + ch[ik + idl1 * j];
        }
    }
    let mut jc = ip - 1;
    for j in 1..ipph {
        for k in 0..l1 {
            let t1 = cc[c1(0, k, j)];
            let t2 = cc[c1(0, k, jc)];
            ch[ch_i(0, k, j)] = t1 - t2;
            ch[ch_i(0, k, jc)] = t1 + t2;
        }
        jc -= 1;
    }

    if ido == 1 {
        return;
    }

    let mut jc = ip - 1;
    for j in 1..ipph {
        for k in 0..l1 {
            let mut i = 1;
            while i <= ido - 2 {
                ch[ch_i(i, k, j)] = cc[c1(i, k, j)] - cc[c1(i + 1, k, jc)];
                ch[ch_i(i, k, jc)] = cc[c1(i, k, j)] + cc[c1(i + 1, k, jc)];
                ch[ch_i(i + 1, k, j)] = cc[c1(i + 1, k, j)] + cc[c1(i, k, jc)];
                ch[ch_i(i + 1, k, jc)] = cc[c1(i + 1, k, j)] - cc[c1(i, k, jc)];
                i += 2;
            }
        }
        jc -= 1;
    }

    for j in 1..ip {
        let is = (j - 1) * (ido - 1);
        for k in 0..l1 {
            let mut idij = is;
            let mut i = 1;
            while i <= ido - 2 {
                let t1 = ch[ch_i(i, k, j)];
                let t2 = ch[ch_i(i + 1, k, j)];
                ch[ch_i(i, k, j)] = wa[idij] * t1 - wa[idij + 1] * t2;
                ch[ch_i(i + 1, k, j)] = wa[idij] * t2 + wa[idij + 1] * t1;
                idij += 2;
                i += 2;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RfftPlan;
    use num_complex::Complex;
    use rand::Rng;

    // forward DFT of real input, packed the way the plan packs it
    fn naive_r2c_packed(src: &[f64]) -> Vec<f64> {
        let n = src.len();
        let spec: Vec<Complex<f64>> = (0..n)
            .map(|k| {
                let mut sum = Complex::new(0., 0.);
                for (j, &x) in src.iter().enumerate() {
                    let ang = -2. * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                    sum += Complex::new(ang.cos(), ang.sin()) * x;
                }
                sum
            })
            .collect();
        let mut out = vec![0.; n];
        out[0] = spec[0].re;
        for m in 1..n {
            let half = (m + 1) / 2;
            out[m] = if m & 1 == 1 { spec[half].re } else { spec[half].im };
        }
        out
    }

    fn check_forward(n: usize) {
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();
        let plan = RfftPlan::new(n).unwrap();
        let mut data = src.clone();
        plan.forward(&mut data, 1.).unwrap();
        let reference = naive_r2c_packed(&src);
        let tol = 1e-11 * n as f64 + 1e-12;
        for (idx, (a, b)) in data.iter().zip(reference.iter()).enumerate() {
            assert!((a - b).abs() < tol, "n={n}: {a} != {b} at {idx}");
        }
    }

    #[test]
    fn forward_matches_naive() {
        for n in 1..=32 {
            check_forward(n);
        }
        for n in [45, 49, 50, 60, 77, 121, 125, 128, 210, 243, 256] {
            check_forward(n);
        }
    }

    #[test]
    fn roundtrip_f64() {
        let mut rng = rand::rng();
        for n in 1..=150usize {
            let src: Vec<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();
            let plan = RfftPlan::new(n).unwrap();
            let mut data = src.clone();
            plan.forward(&mut data, 1.).unwrap();
            plan.backward(&mut data, 1. / n as f64).unwrap();
            for (idx, (a, b)) in data.iter().zip(src.iter()).enumerate() {
                assert!((a - b).abs() < 1e-11, "n={n}: {a} != {b} at {idx}");
            }
        }
    }

    #[test]
    fn roundtrip_f32() {
        let mut rng = rand::rng();
        for n in [5usize, 8, 27, 49, 100, 147] {
            let src: Vec<f32> = (0..n).map(|_| rng.random::<f32>() - 0.5).collect();
            let plan = RfftPlan::new(n).unwrap();
            let mut data = src.clone();
            plan.forward(&mut data, 1.).unwrap();
            plan.backward(&mut data, 1. / n as f32).unwrap();
            for (a, b) in data.iter().zip(src.iter()) {
                assert!((a - b).abs() < 1e-3, "mismatch for size {n}");
            }
        }
    }

    #[test]
    fn constant_input_length_five() {
        let plan = RfftPlan::<f64>::new(5).unwrap();
        let mut data = vec![1.; 5];
        plan.forward(&mut data, 1.).unwrap();
        assert!((data[0] - 5.).abs() < 1e-14);
        for v in &data[1..] {
            assert!(v.abs() < 1e-14);
        }
    }

    #[test]
    fn impulse_input_length_eight() {
        let plan = RfftPlan::<f64>::new(8).unwrap();
        let mut data = vec![0.; 8];
        data[0] = 1.;
        plan.forward(&mut data, 1.).unwrap();
        let expected = [1., 1., 0., 1., 0., 1., 0., 1.];
        for (a, b) in data.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-14);
        }
    }

    #[test]
    fn rejects_zero_length() {
        assert!(RfftPlan::<f64>::new(0).is_err());
    }
}
