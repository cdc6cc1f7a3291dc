// Mon Feb 02 2026 - Alex

use std::fmt;

/// A byte signature paired with a wildcard mask. Mask positions marked
/// `true` must match exactly; `false` positions are ignored during
/// comparison and always carry byte 0.
#[derive(Debug, Clone)]
pub struct Pattern {
    bytes: Vec<u8>,
    mask: Vec<bool>,
}

impl Pattern {
    pub fn new(bytes: Vec<u8>, mask: Vec<bool>) -> Self {
        assert_eq!(bytes.len(), mask.len(), "Pattern bytes and mask must have same length");
        Self { bytes, mask }
    }

    pub fn from_hex(hex: &str) -> Self {
        let mut bytes = Vec::new();
        let mut mask = Vec::new();

        for part in hex.split_whitespace() {
            if part == "??" || part == "?" {
                bytes.push(0);
                mask.push(false);
            } else if let Ok(byte) = u8::from_str_radix(part, 16) {
                bytes.push(byte);
                mask.push(true);
            }
        }

        Self { bytes, mask }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mask = vec![true; bytes.len()];
        Self {
            bytes: bytes.to_vec(),
            mask,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// True when the pattern matches at the start of `data`. Only exact
    /// positions are compared.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.bytes.len() {
            return false;
        }

        self.bytes.iter()
            .zip(self.mask.iter())
            .zip(data.iter())
            .all(|((pattern_byte, &exact), &data_byte)| {
                !exact || *pattern_byte == data_byte
            })
    }

    pub fn exact_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    pub fn wildcard_count(&self) -> usize {
        self.mask.iter().filter(|&&m| !m).count()
    }

    /// Get the mask as bytes (0xFF for exact, 0x00 for wildcard).
    pub fn mask_as_bytes(&self) -> Vec<u8> {
        self.mask.iter().map(|&m| if m { 0xFF } else { 0x00 }).collect()
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes.iter()
            .zip(self.mask.iter())
            .map(|(b, &m)| {
                if m {
                    format!("{:02X}", b)
                } else {
                    "??".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes && self.mask == other.mask
    }
}

impl Eq for Pattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let pattern = Pattern::from_hex("AA ?? CC");
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.bytes(), &[0xAA, 0x00, 0xCC]);
        assert_eq!(pattern.mask(), &[true, false, true]);
    }

    #[test]
    fn test_matches_honors_wildcards() {
        let pattern = Pattern::from_hex("AA ?? CC");
        assert!(pattern.matches(&[0xAA, 0x42, 0xCC]));
        assert!(pattern.matches(&[0xAA, 0x00, 0xCC, 0xFF]));
        assert!(!pattern.matches(&[0xAB, 0x42, 0xCC]));
        assert!(!pattern.matches(&[0xAA, 0x42]));
    }

    #[test]
    fn test_exact_count() {
        let pattern = Pattern::from_hex("AA ?? CC ??");
        assert_eq!(pattern.exact_count(), 2);
        assert_eq!(pattern.wildcard_count(), 2);
    }

    #[test]
    fn test_mask_as_bytes() {
        let pattern = Pattern::from_hex("AA ?? CC");
        assert_eq!(pattern.mask_as_bytes(), vec![0xFF, 0x00, 0xFF]);
    }

    #[test]
    fn test_display_roundtrip() {
        let pattern = Pattern::from_hex("AA ?? CC");
        assert_eq!(pattern.to_string(), "AA ?? CC");
        assert_eq!(Pattern::from_hex(&pattern.to_string()), pattern);
    }
}
