//! Operating system entropy (macOS)
//!
//! On macOS `arc4random_buf` is backed by the kernel and suitable for
//! cryptographic seeding.

use libc::arc4random_buf;

/// Fills a buffer with system-provided random bytes.
///
/// The buffer is fully initialized on return and the output is suitable
/// for seeding cryptographic generators.
pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }
}
