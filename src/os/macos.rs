use crate::entropy::EntropyUnavailable;

use libc::arc4random_buf;

// arc4random_buf cannot fail; the Result keeps the platform surfaces uniform.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyUnavailable> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
