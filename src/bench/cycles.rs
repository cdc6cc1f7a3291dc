// Wed Feb 04 2026 - Alex

//! Monotonic cycle counter read around each scan call. Uses the hardware
//! timestamp counter where one is available; elsewhere falls back to
//! nanoseconds from a process-local epoch, which keeps the ranking
//! meaningful even if the units are not literal cycles.

#[cfg(target_arch = "x86_64")]
#[inline]
pub fn now() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline]
pub fn now() -> u64 {
    let value: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) value, options(nomem, nostack));
    }
    value
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
pub fn now() -> u64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
    EPOCH.elapsed().as_nanos() as u64
}
