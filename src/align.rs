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
use std::alloc::{alloc, dealloc, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

const ALIGNMENT: usize = 64;

/// Owned buffer aligned to a cache line, used for twiddle storage and
/// per-call transform scratch. Elements are default-initialized.
pub(crate) struct AlignedVec<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T: Copy + Default> AlignedVec<T> {
    pub(crate) fn new(len: usize) -> Result<AlignedVec<T>, FftError> {
        if len == 0 {
            return Ok(AlignedVec {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }
        let bytes = len
            .checked_mul(size_of::<T>())
            .ok_or(FftError::OutOfMemory(len))?;
        let layout = Layout::from_size_align(bytes, ALIGNMENT.max(align_of::<T>()))
            .map_err(|_| FftError::OutOfMemory(len))?;
        let raw = unsafe { alloc(layout) } as *mut T;
        let ptr = NonNull::new(raw).ok_or(FftError::OutOfMemory(len))?;
        for i in 0..len {
            unsafe { ptr.as_ptr().add(i).write(T::default()) }
        }
        Ok(AlignedVec { ptr, len })
    }
}

impl<T> Deref for AlignedVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for AlignedVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Drop for AlignedVec<T> {
    fn drop(&mut self) {
        if self.len != 0 {
            // Size and alignment were validated when the buffer was created.
            let layout = unsafe {
                Layout::from_size_align_unchecked(
                    self.len * size_of::<T>(),
                    ALIGNMENT.max(align_of::<T>()),
                )
            };
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) }
        }
    }
}

unsafe impl<T: Send> Send for AlignedVec<T> {}
unsafe impl<T: Sync> Sync for AlignedVec<T> {}
