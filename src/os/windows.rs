use crate::entropy::EntropyUnavailable;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyUnavailable> {
    let status = unsafe {
        BCryptGenRandom(
            std::ptr::null_mut(),
            buf.as_mut_ptr(),
            buf.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        return Err(EntropyUnavailable);
    }

    Ok(())
}
