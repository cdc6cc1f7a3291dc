// Mon Feb 02 2026 - Alex

use crate::memory::{align_up, page_size, MemoryError};
use rand::rngs::StdRng;
use rand::Rng;
use std::ptr;

/// One anonymous mapping holding a page of inaccessible memory, a data zone,
/// and a second page of inaccessible memory. Any read inside the data zone
/// succeeds; any read touching a guard page faults. The guard pages are the
/// out-of-bounds-read oracle for the benchmark and their protection is
/// established here once, before the first trial, and never changed.
pub struct GuardedRegion {
    raw: *mut u8,
    raw_size: usize,
    data_size: usize,
}

impl GuardedRegion {
    /// Allocate a region whose data zone is `capacity` rounded up to the
    /// page size. Fails fatally if the mapping cannot be created or either
    /// guard page cannot be locked down.
    pub fn new(capacity: usize) -> Result<Self, MemoryError> {
        if capacity == 0 {
            return Err(MemoryError::InvalidSize(capacity));
        }

        let page = page_size();
        let data_size = align_up(capacity, page);
        let raw_size = data_size + page * 2;

        let raw = unsafe {
            libc::mmap(
                ptr::null_mut(),
                raw_size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if raw == libc::MAP_FAILED {
            return Err(MemoryError::AllocationFailed(raw_size, std::io::Error::last_os_error()));
        }

        let raw = raw as *mut u8;

        let head = unsafe { libc::mprotect(raw as *mut libc::c_void, page, libc::PROT_NONE) };
        if head != 0 {
            let err = std::io::Error::last_os_error();
            unsafe { libc::munmap(raw as *mut libc::c_void, raw_size) };
            return Err(MemoryError::ProtectionFailed(0, err));
        }

        let tail_offset = raw_size - page;
        let tail = unsafe {
            libc::mprotect(raw.add(tail_offset) as *mut libc::c_void, page, libc::PROT_NONE)
        };
        if tail != 0 {
            let err = std::io::Error::last_os_error();
            unsafe { libc::munmap(raw as *mut libc::c_void, raw_size) };
            return Err(MemoryError::ProtectionFailed(tail_offset, err));
        }

        Ok(Self {
            raw,
            raw_size,
            data_size,
        })
    }

    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn data(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.raw.add(page_size()), self.data_size) }
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.raw.add(page_size()), self.data_size) }
    }

    /// Fill the whole data zone with uniformly random bytes.
    pub fn fill_random(&mut self, rng: &mut StdRng) {
        rng.fill(self.data_mut());
    }

    /// Copy `content` into the tail of the data zone, zeroing the slack the
    /// page rounding introduced at the front.
    pub fn load_corpus(&mut self, content: &[u8]) {
        let data_size = self.data_size;
        assert!(content.len() <= data_size, "corpus larger than region data zone");

        let padding = data_size - content.len();
        let data = self.data_mut();
        data[..padding].fill(0);
        data[padding..].copy_from_slice(content);
    }
}

impl Drop for GuardedRegion {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.raw as *mut libc::c_void, self.raw_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rounds_capacity_to_page_size() {
        let region = GuardedRegion::new(1).unwrap();
        assert_eq!(region.data_size(), page_size());

        let region = GuardedRegion::new(page_size() + 1).unwrap();
        assert_eq!(region.data_size(), page_size() * 2);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(GuardedRegion::new(0).is_err());
    }

    #[test]
    fn test_data_zone_is_readable_and_writable() {
        let mut region = GuardedRegion::new(page_size()).unwrap();
        let data = region.data_mut();
        data[0] = 0xAB;
        let last = data.len() - 1;
        data[last] = 0xCD;
        assert_eq!(region.data()[0], 0xAB);
        assert_eq!(region.data()[last], 0xCD);
    }

    #[test]
    fn test_fill_random_is_seed_deterministic() {
        let mut a = GuardedRegion::new(page_size()).unwrap();
        let mut b = GuardedRegion::new(page_size()).unwrap();
        a.fill_random(&mut StdRng::seed_from_u64(3));
        b.fill_random(&mut StdRng::seed_from_u64(3));
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_corpus_is_tail_aligned_with_zero_padding() {
        let mut region = GuardedRegion::new(page_size()).unwrap();
        region.fill_random(&mut StdRng::seed_from_u64(3));

        let content = [0x11u8, 0x22, 0x33];
        region.load_corpus(&content);

        let data = region.data();
        let padding = data.len() - content.len();
        assert!(data[..padding].iter().all(|&b| b == 0));
        assert_eq!(&data[padding..], &content);
    }
}
