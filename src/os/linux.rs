//! Operating system entropy (Linux)
//!
//! On Linux the `getrandom` system call reads directly from the kernel
//! entropy pool, which is the right source for seeding the CSPRNG that
//! feeds prime generation.

use libc::{c_void, getrandom};

/// Fills a buffer with kernel-provided random bytes.
///
/// `getrandom` is called repeatedly until the buffer is full, so short
/// reads from signal interruptions are handled transparently.
///
/// # Panics
/// Panics if `getrandom` reports an error. That indicates a critical
/// operating system problem and is unrecoverable for cryptographic
/// seeding.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
