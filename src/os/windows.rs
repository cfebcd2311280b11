//! Operating system entropy (Windows)
//!
//! Randomness comes from the CNG system RNG through `BCryptGenRandom`.

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills a buffer with system-provided random bytes.
///
/// # Panics
/// Panics if the underlying system call fails; such a failure is a
/// critical operating system error and unrecoverable for cryptographic
/// seeding.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let status = unsafe {
        BCryptGenRandom(
            core::ptr::null_mut(),
            buf.as_mut_ptr(),
            buf.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        panic!("BCryptGenRandom failed with status {status}");
    }
}
