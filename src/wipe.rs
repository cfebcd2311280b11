//! Best-effort memory wiping
//!
//! Limb buffers routinely hold secret key material, so they are cleared
//! before their storage is released. The stores go through
//! `ptr::write_volatile` followed by a compiler fence, which the
//! optimizer is not allowed to elide the way it may elide a plain
//! `fill(0)` ahead of a free.

use core::sync::atomic::{Ordering, compiler_fence};

use crate::mpi::Limb;

/// Overwrites a limb slice with zeros through a volatile view.
pub(crate) fn wipe_limbs(buf: &mut [Limb]) {
    for slot in buf.iter_mut() {
        unsafe { core::ptr::write_volatile(slot, 0) };
    }

    compiler_fence(Ordering::SeqCst);
}

/// Overwrites a byte slice with zeros through a volatile view.
pub(crate) fn wipe_bytes(buf: &mut [u8]) {
    for slot in buf.iter_mut() {
        unsafe { core::ptr::write_volatile(slot, 0) };
    }

    compiler_fence(Ordering::SeqCst);
}
