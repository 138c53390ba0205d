/*
 * // Copyright (c) Radzivon Bartoshyk 1/2026. All rights reserved.
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

//! Multi-axis driver. Strides are signed and given in elements; an axis
//! with negative stride runs backward through its buffer, with the whole
//! layout anchored so that the lowest reachable offset is slice start.
//! A zero input stride broadcasts a non-transformed dimension. Each 1-D
//! lane is gathered into an aligned contiguous scratch, transformed with a
//! plan that is reused while the length repeats, and scattered back; after
//! the first transformed axis the driver reads from the output array and
//! the scale factor collapses to 1.

use crate::align::AlignedVec;
use crate::err::FftError;
use crate::plan::{FftPlan, RealFftPlan};
use crate::FftSample;
use num_complex::Complex;
use num_traits::AsPrimitive;

#[derive(Clone, Copy)]
struct DimInfo {
    n: usize,
    s: isize,
}

/// Odometer over every position of the non-transformed dimensions,
/// yielding the base offset of each 1-D lane.
struct MultiIter {
    dim: Vec<DimInfo>,
    pos: Vec<usize>,
    ofs: isize,
    stride: isize,
    rem: u64,
}

impl MultiIter {
    fn new(shape: &[usize], stride: &[isize], idim: usize) -> MultiIter {
        let mut dim = Vec::with_capacity(shape.len().saturating_sub(1));
        let mut rem: u64 = 1;
        for i in 0..shape.len() {
            if i != idim {
                dim.push(DimInfo {
                    n: shape[i],
                    s: stride[i],
                });
                rem *= shape[i] as u64;
            }
        }
        MultiIter {
            pos: vec![0; dim.len()],
            dim,
            ofs: origin(shape, stride),
            stride: stride[idim],
            rem,
        }
    }

    #[inline]
    fn offset(&self) -> isize {
        self.ofs
    }

    #[inline]
    fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    fn remaining(&self) -> u64 {
        self.rem
    }

    fn advance(&mut self) {
        self.rem -= 1;
        if self.rem == 0 {
            return;
        }
        for i in (0..self.pos.len()).rev() {
            self.pos[i] += 1;
            self.ofs += self.dim[i].s;
            if self.pos[i] < self.dim[i].n {
                return;
            }
            self.pos[i] = 0;
            self.ofs -= self.dim[i].n as isize * self.dim[i].s;
        }
    }
}

/// Offset of the logical element (0, ..., 0) from the slice start; zero
/// for non-negative strides, positive when some axis runs backward.
fn origin(shape: &[usize], stride: &[isize]) -> isize {
    let mut lo = 0;
    for (&n, &s) in shape.iter().zip(stride.iter()) {
        let span = (n as isize - 1) * s;
        if span < 0 {
            lo += span;
        }
    }
    -lo
}

fn check_geometry(
    shape: &[usize],
    stride_in: &[isize],
    stride_out: &[isize],
    axes: &[usize],
) -> Result<(), FftError> {
    let ndim = shape.len();
    if stride_in.len() != ndim {
        return Err(FftError::ShapeMismatch(stride_in.len(), ndim));
    }
    if stride_out.len() != ndim {
        return Err(FftError::ShapeMismatch(stride_out.len(), ndim));
    }
    if axes.len() > ndim {
        return Err(FftError::TooManyAxes(axes.len(), ndim));
    }
    for &axis in axes {
        if axis >= ndim {
            return Err(FftError::InvalidAxis(axis, ndim));
        }
        if shape[axis] == 0 {
            return Err(FftError::ZeroSizedFft);
        }
        if shape[axis] > 1 && (stride_in[axis] == 0 || stride_out[axis] == 0) {
            return Err(FftError::ZeroStrideAxis(axis));
        }
    }
    Ok(())
}

fn check_bounds(shape: &[usize], stride: &[isize], len: usize) -> Result<(), FftError> {
    if shape.iter().any(|&n| n == 0) {
        return Ok(());
    }
    let mut span_total: isize = 0;
    for (&n, &s) in shape.iter().zip(stride.iter()) {
        span_total += ((n as isize - 1) * s).abs();
    }
    if span_total as usize >= len {
        return Err(FftError::StrideOutOfBounds(span_total, len));
    }
    Ok(())
}

#[inline]
fn at(base: isize, i: usize, stride: isize) -> usize {
    (base + i as isize * stride) as usize
}

/// Complex multi-axis transform. `fct` is applied with the first axis.
#[allow(clippy::too_many_arguments)]
pub fn c2c<T: FftSample>(
    shape: &[usize],
    stride_in: &[isize],
    stride_out: &[isize],
    axes: &[usize],
    forward: bool,
    data_in: &[Complex<T>],
    data_out: &mut [Complex<T>],
    fct: T,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    check_geometry(shape, stride_in, stride_out, axes)?;
    check_bounds(shape, stride_in, data_in.len())?;
    check_bounds(shape, stride_out, data_out.len())?;
    if axes.is_empty() {
        return Ok(());
    }
    let tmpsize = axes.iter().map(|&a| shape[a]).max().unwrap_or(0);
    let mut tdata: AlignedVec<Complex<T>> = AlignedVec::new(tmpsize)?;
    let mut plan: Option<FftPlan<T>> = None;
    let one: T = 1f64.as_();
    let mut fct = fct;
    for (iax, &axis) in axes.iter().enumerate() {
        let len = shape[axis];
        if plan.as_ref().map(|p| p.length() != len).unwrap_or(true) {
            plan = Some(FftPlan::new(len)?);
        }
        let plan = plan.as_ref().unwrap();
        let first = iax == 0;
        let mut it_in = MultiIter::new(shape, if first { stride_in } else { stride_out }, axis);
        let mut it_out = MultiIter::new(shape, stride_out, axis);
        while it_in.remaining() > 0 {
            for i in 0..len {
                tdata[i] = if first {
                    data_in[at(it_in.offset(), i, it_in.stride())]
                } else {
                    data_out[at(it_in.offset(), i, it_in.stride())]
                };
            }
            if forward {
                plan.forward(&mut tdata[..len], fct)?;
            } else {
                plan.backward(&mut tdata[..len], fct)?;
            }
            for i in 0..len {
                data_out[at(it_out.offset(), i, it_out.stride())] = tdata[i];
            }
            it_in.advance();
            it_out.advance();
        }
        fct = one;
    }
    Ok(())
}

/// Real input to the non-negative half spectrum: the complex output has
/// extent n/2 + 1 on the transformed axis.
#[allow(clippy::too_many_arguments)]
pub fn r2c<T: FftSample>(
    shape: &[usize],
    stride_in: &[isize],
    stride_out: &[isize],
    axis: usize,
    data_in: &[T],
    data_out: &mut [Complex<T>],
    fct: T,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    check_geometry(shape, stride_in, stride_out, &[axis])?;
    check_bounds(shape, stride_in, data_in.len())?;
    let mut shape_c = shape.to_vec();
    shape_c[axis] = shape[axis] / 2 + 1;
    check_bounds(&shape_c, stride_out, data_out.len())?;

    let len = shape[axis];
    let plan = RealFftPlan::new(len)?;
    let mut tdata: AlignedVec<T> = AlignedVec::new(len)?;
    let zero: T = 0f64.as_();
    let mut it_in = MultiIter::new(shape, stride_in, axis);
    let mut it_out = MultiIter::new(&shape_c, stride_out, axis);
    while it_in.remaining() > 0 {
        for i in 0..len {
            tdata[i] = data_in[at(it_in.offset(), i, it_in.stride())];
        }
        plan.forward(&mut tdata[..len], fct)?;
        let (ofs_o, s_o) = (it_out.offset(), it_out.stride());
        data_out[at(ofs_o, 0, s_o)] = Complex::new(tdata[0], zero);
        let mut i = 1;
        while i + 1 < len {
            data_out[at(ofs_o, (i + 1) / 2, s_o)] = Complex::new(tdata[i], tdata[i + 1]);
            i += 2;
        }
        if i < len {
            data_out[at(ofs_o, (i + 1) / 2, s_o)] = Complex::new(tdata[i], zero);
        }
        it_in.advance();
        it_out.advance();
    }
    Ok(())
}

/// Inverse of [`r2c`]; `shape_out` names the real (output) extents.
#[allow(clippy::too_many_arguments)]
pub fn c2r<T: FftSample>(
    shape_out: &[usize],
    stride_in: &[isize],
    stride_out: &[isize],
    axis: usize,
    data_in: &[Complex<T>],
    data_out: &mut [T],
    fct: T,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    check_geometry(shape_out, stride_in, stride_out, &[axis])?;
    let mut shape_c = shape_out.to_vec();
    shape_c[axis] = shape_out[axis] / 2 + 1;
    check_bounds(&shape_c, stride_in, data_in.len())?;
    check_bounds(shape_out, stride_out, data_out.len())?;

    let len = shape_out[axis];
    let plan = RealFftPlan::new(len)?;
    let mut tdata: AlignedVec<T> = AlignedVec::new(len)?;
    let mut it_in = MultiIter::new(&shape_c, stride_in, axis);
    let mut it_out = MultiIter::new(shape_out, stride_out, axis);
    while it_in.remaining() > 0 {
        let (ofs_i, s_i) = (it_in.offset(), it_in.stride());
        tdata[0] = data_in[at(ofs_i, 0, s_i)].re;
        let mut i = 1;
        while i + 1 < len {
            let v = data_in[at(ofs_i, (i + 1) / 2, s_i)];
            tdata[i] = v.re;
            tdata[i + 1] = v.im;
            i += 2;
        }
        if i < len {
            tdata[i] = data_in[at(ofs_i, (i + 1) / 2, s_i)].re;
        }
        plan.backward(&mut tdata[..len], fct)?;
        for i in 0..len {
            data_out[at(it_out.offset(), i, it_out.stride())] = tdata[i];
        }
        it_in.advance();
        it_out.advance();
    }
    Ok(())
}

/// Real multi-axis transform, conjugate-even packed per axis, and its
/// inverse.
#[allow(clippy::too_many_arguments)]
pub fn r2r<T: FftSample>(
    shape: &[usize],
    stride_in: &[isize],
    stride_out: &[isize],
    axes: &[usize],
    forward: bool,
    data_in: &[T],
    data_out: &mut [T],
    fct: T,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    check_geometry(shape, stride_in, stride_out, axes)?;
    check_bounds(shape, stride_in, data_in.len())?;
    check_bounds(shape, stride_out, data_out.len())?;
    if axes.is_empty() {
        return Ok(());
    }
    let tmpsize = axes.iter().map(|&a| shape[a]).max().unwrap_or(0);
    let mut tdata: AlignedVec<T> = AlignedVec::new(tmpsize)?;
    let mut plan: Option<RealFftPlan<T>> = None;
    let one: T = 1f64.as_();
    let mut fct = fct;
    for (iax, &axis) in axes.iter().enumerate() {
        let len = shape[axis];
        if plan.as_ref().map(|p| p.length() != len).unwrap_or(true) {
            plan = Some(RealFftPlan::new(len)?);
        }
        let plan = plan.as_ref().unwrap();
        let first = iax == 0;
        let mut it_in = MultiIter::new(shape, if first { stride_in } else { stride_out }, axis);
        let mut it_out = MultiIter::new(shape, stride_out, axis);
        while it_in.remaining() > 0 {
            for i in 0..len {
                tdata[i] = if first {
                    data_in[at(it_in.offset(), i, it_in.stride())]
                } else {
                    data_out[at(it_in.offset(), i, it_in.stride())]
                };
            }
            if forward {
                plan.forward(&mut tdata[..len], fct)?;
            } else {
                plan.backward(&mut tdata[..len], fct)?;
            }
            for i in 0..len {
                data_out[at(it_out.offset(), i, it_out.stride())] = tdata[i];
            }
            it_in.advance();
            it_out.advance();
        }
        fct = one;
    }
    Ok(())
}

/// Separable real-to-Hartley transform: along each axis,
/// H[k] = sum x[j] * (cos + sin)(2 pi j k / n).
#[allow(clippy::too_many_arguments)]
pub fn hartley<T: FftSample>(
    shape: &[usize],
    stride_in: &[isize],
    stride_out: &[isize],
    axes: &[usize],
    data_in: &[T],
    data_out: &mut [T],
    fct: T,
) -> Result<(), FftError>
where
    f64: AsPrimitive<T>,
{
    check_geometry(shape, stride_in, stride_out, axes)?;
    check_bounds(shape, stride_in, data_in.len())?;
    check_bounds(shape, stride_out, data_out.len())?;
    if axes.is_empty() {
        return Ok(());
    }
    let tmpsize = axes.iter().map(|&a| shape[a]).max().unwrap_or(0);
    let mut tdata: AlignedVec<T> = AlignedVec::new(tmpsize)?;
    let mut plan: Option<RealFftPlan<T>> = None;
    let one: T = 1f64.as_();
    let mut fct = fct;
    for (iax, &axis) in axes.iter().enumerate() {
        let len = shape[axis];
        if plan.as_ref().map(|p| p.length() != len).unwrap_or(true) {
            plan = Some(RealFftPlan::new(len)?);
        }
        let plan = plan.as_ref().unwrap();
        let first = iax == 0;
        let mut it_in = MultiIter::new(shape, if first { stride_in } else { stride_out }, axis);
        let mut it_out = MultiIter::new(shape, stride_out, axis);
        while it_in.remaining() > 0 {
            for i in 0..len {
                tdata[i] = if first {
                    data_in[at(it_in.offset(), i, it_in.stride())]
                } else {
                    data_out[at(it_in.offset(), i, it_in.stride())]
                };
            }
            plan.forward(&mut tdata[..len], fct)?;
            // unpack re/im pairs into cas order
            let (ofs_o, s_o) = (it_out.offset(), it_out.stride());
            data_out[at(ofs_o, 0, s_o)] = tdata[0];
            let mut i = 1;
            let mut i1 = 1;
            let mut i2 = len - 1;
            while i + 1 < len {
                data_out[at(ofs_o, i1, s_o)] = tdata[i] + tdata[i + 1];
                data_out[at(ofs_o, i2, s_o)] = tdata[i] - tdata[i + 1];
                i += 2;
                i1 += 1;
                i2 -= 1;
            }
            if i < len {
                data_out[at(ofs_o, i1, s_o)] = tdata[i];
            }
            it_in.advance();
            it_out.advance();
        }
        fct = one;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{c2c, c2r, hartley, r2c, r2r};
    use crate::err::FftError;
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
    fn c2c_2d_matches_separable_naive() {
        let (rows, cols) = (4usize, 6usize);
        let mut rng = rand::rng();
        let src: Vec<Complex<f64>> = (0..rows * cols)
            .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
            .collect();

        // reference: rows first, then columns
        let mut reference = src.clone();
        for r in 0..rows {
            let row: Vec<_> = reference[r * cols..(r + 1) * cols].to_vec();
            reference[r * cols..(r + 1) * cols].copy_from_slice(&naive_dft(&row, false));
        }
        for c in 0..cols {
            let col: Vec<_> = (0..rows).map(|r| reference[r * cols + c]).collect();
            for (r, v) in naive_dft(&col, false).into_iter().enumerate() {
                reference[r * cols + c] = v;
            }
        }

        let mut out = vec![Complex::new(0., 0.); rows * cols];
        c2c(
            &[rows, cols],
            &[cols as isize, 1],
            &[cols as isize, 1],
            &[1, 0],
            true,
            &src,
            &mut out,
            1.,
        )
        .unwrap();
        for (a, b) in out.iter().zip(reference.iter()) {
            assert!((a.re - b.re).abs() < 1e-10 && (a.im - b.im).abs() < 1e-10);
        }
    }

    #[test]
    fn c2c_roundtrip_2d() {
        let (rows, cols) = (5usize, 13usize);
        let mut rng = rand::rng();
        let src: Vec<Complex<f64>> = (0..rows * cols)
            .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
            .collect();
        let shape = [rows, cols];
        let strides = [cols as isize, 1];
        let mut freq = vec![Complex::new(0., 0.); rows * cols];
        c2c(&shape, &strides, &strides, &[0, 1], true, &src, &mut freq, 1.).unwrap();
        let mut back = vec![Complex::new(0., 0.); rows * cols];
        let scale = 1. / (rows * cols) as f64;
        c2c(&shape, &strides, &strides, &[0, 1], false, &freq, &mut back, scale).unwrap();
        for (a, b) in back.iter().zip(src.iter()) {
            assert!((a.re - b.re).abs() < 1e-11 && (a.im - b.im).abs() < 1e-11);
        }
    }

    #[test]
    fn negative_output_stride_reverses() {
        let n = 8usize;
        let src: Vec<Complex<f64>> = (0..n).map(|i| Complex::new(i as f64, 0.)).collect();
        let mut fwd = vec![Complex::new(0., 0.); n];
        c2c(&[n], &[1], &[1], &[0], true, &src, &mut fwd, 1.).unwrap();
        let mut rev = vec![Complex::new(0., 0.); n];
        c2c(&[n], &[1], &[-1], &[0], true, &src, &mut rev, 1.).unwrap();
        for i in 0..n {
            let b = rev[n - 1 - i];
            assert!((fwd[i].re - b.re).abs() < 1e-12 && (fwd[i].im - b.im).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_stride_broadcasts_input_rows() {
        let (rows, cols) = (3usize, 8usize);
        let mut rng = rand::rng();
        let row: Vec<Complex<f64>> = (0..cols)
            .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
            .collect();
        let mut out = vec![Complex::new(0., 0.); rows * cols];
        c2c(
            &[rows, cols],
            &[0, 1],
            &[cols as isize, 1],
            &[1],
            true,
            &row,
            &mut out,
            1.,
        )
        .unwrap();
        let reference = naive_dft(&row, false);
        for r in 0..rows {
            for c in 0..cols {
                let got = out[r * cols + c];
                assert!(
                    (got.re - reference[c].re).abs() < 1e-11
                        && (got.im - reference[c].im).abs() < 1e-11
                );
            }
        }
    }

    #[test]
    fn r2c_c2r_roundtrip_2d() {
        let (rows, cols) = (3usize, 10usize);
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..rows * cols).map(|_| rng.random::<f64>() - 0.5).collect();
        let ccols = cols / 2 + 1;
        let mut freq = vec![Complex::new(0., 0.); rows * ccols];
        r2c(
            &[rows, cols],
            &[cols as isize, 1],
            &[ccols as isize, 1],
            1,
            &src,
            &mut freq,
            1.,
        )
        .unwrap();
        let mut back = vec![0.; rows * cols];
        c2r(
            &[rows, cols],
            &[ccols as isize, 1],
            &[cols as isize, 1],
            1,
            &freq,
            &mut back,
            1. / cols as f64,
        )
        .unwrap();
        for (a, b) in back.iter().zip(src.iter()) {
            assert!((a - b).abs() < 1e-11);
        }
    }

    #[test]
    fn r2c_matches_naive_half_spectrum() {
        let n = 9usize;
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();
        let mut freq = vec![Complex::new(0., 0.); n / 2 + 1];
        r2c(&[n], &[1], &[1], 0, &src, &mut freq, 1.).unwrap();
        let complex_src: Vec<Complex<f64>> = src.iter().map(|&x| Complex::new(x, 0.)).collect();
        let reference = naive_dft(&complex_src, false);
        for k in 0..n / 2 + 1 {
            assert!(
                (freq[k].re - reference[k].re).abs() < 1e-12
                    && (freq[k].im - reference[k].im).abs() < 1e-12,
                "bin {k}"
            );
        }
    }

    #[test]
    fn r2r_roundtrip_two_axes() {
        let (rows, cols) = (6usize, 7usize);
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..rows * cols).map(|_| rng.random::<f64>() - 0.5).collect();
        let shape = [rows, cols];
        let strides = [cols as isize, 1];
        let mut freq = vec![0.; rows * cols];
        r2r(&shape, &strides, &strides, &[0, 1], true, &src, &mut freq, 1.).unwrap();
        let mut back = vec![0.; rows * cols];
        let scale = 1. / (rows * cols) as f64;
        r2r(&shape, &strides, &strides, &[1, 0], false, &freq, &mut back, scale).unwrap();
        for (a, b) in back.iter().zip(src.iter()) {
            assert!((a - b).abs() < 1e-11);
        }
    }

    #[test]
    fn hartley_matches_cas_sum() {
        for n in [5usize, 8, 12] {
            let mut rng = rand::rng();
            let src: Vec<f64> = (0..n).map(|_| rng.random::<f64>() - 0.5).collect();
            let mut out = vec![0.; n];
            hartley(&[n], &[1], &[1], &[0], &src, &mut out, 1.).unwrap();
            for k in 0..n {
                let mut sum = 0.;
                for (j, &x) in src.iter().enumerate() {
                    let ang = 2. * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                    sum += x * (ang.cos() + ang.sin());
                }
                assert!((out[k] - sum).abs() < 1e-11, "n={n}, bin {k}");
            }
        }
    }

    #[test]
    fn geometry_errors() {
        let src = vec![Complex::new(0f64, 0.); 8];
        let mut out = vec![Complex::new(0f64, 0.); 8];
        assert_eq!(
            c2c(&[8], &[1, 1], &[1], &[0], true, &src, &mut out, 1.),
            Err(FftError::ShapeMismatch(2, 1))
        );
        assert_eq!(
            c2c(&[8], &[1], &[1], &[0, 0], true, &src, &mut out, 1.),
            Err(FftError::TooManyAxes(2, 1))
        );
        assert_eq!(
            c2c(&[8], &[1], &[1], &[1], true, &src, &mut out, 1.),
            Err(FftError::InvalidAxis(1, 1))
        );
        assert_eq!(
            c2c(&[8], &[0], &[1], &[0], true, &src, &mut out, 1.),
            Err(FftError::ZeroStrideAxis(0))
        );
        assert_eq!(
            c2c(&[8], &[2], &[1], &[0], true, &src, &mut out, 1.),
            Err(FftError::StrideOutOfBounds(14, 8))
        );
        assert_eq!(
            c2c(&[0], &[1], &[1], &[0], true, &src, &mut out, 1.),
            Err(FftError::ZeroSizedFft)
        );
    }

    #[test]
    fn empty_nontransformed_dim_is_a_no_op() {
        let src: Vec<Complex<f64>> = vec![];
        let mut out: Vec<Complex<f64>> = vec![];
        c2c(&[0, 4], &[4, 1], &[4, 1], &[1], true, &src, &mut out, 1.).unwrap();
    }
}
