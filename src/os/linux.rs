//! Operating system abstraction layer (Linux)
//!
//! This module obtains cryptographically secure random bytes from the kernel
//! using the `getrandom` system call.
//!
//! On Linux, `getrandom` provides direct access to the kernel entropy pool
//! and is suitable for security-critical use cases. The call may block until
//! the pool has been initialized early at boot; that wait is owned by the
//! kernel and is not interruptible from here.

use crate::entropy::EntropyUnavailable;

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads are handled transparently by repeating the system call,
/// which can occur depending on kernel behavior or signal interruptions.
/// A negative return is reported as [`EntropyUnavailable`] rather than
/// retried: a failing kernel entropy facility is not recoverable at this
/// layer.
///
/// # Notes
/// - No heap allocation is performed.
/// - The buffer is fully initialized on success.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyUnavailable> {
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
            return Err(EntropyUnavailable);
        }

        filled += ret as usize;
    }

    Ok(())
}
