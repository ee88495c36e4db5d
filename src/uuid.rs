//! The 128-bit version 1 UUID value type

use std::fmt;

use crate::error::UuidError;

/// Mask for the 48-bit node identifier field
pub(crate) const NODE_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// Mask for the 14-bit clock sequence field
pub(crate) const CLOCK_SEQ_MASK: u64 = 0x3FFF;

/// A time-based (RFC 4122 version 1) UUID, stored as its two 64-bit halves.
///
/// Field layout of the most significant half: `time_low (32) | time_mid (16) |
/// version (4) | time_high (12)`. Least significant half: `variant (2) |
/// clock_seq (14) | node (48)`. The version and variant constants guarantee
/// that neither half of a generated UUID is ever zero.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Uuid {
    msb: u64,
    lsb: u64,
}

impl Uuid {
    /// Creates a UUID from its two 64-bit halves.
    ///
    /// Returns [`UuidError::InvalidIdentifier`] if either half is zero; a
    /// validly generated version 1 UUID always carries non-zero version and
    /// variant bits, so a zero half can only come from corrupted input.
    pub fn from_halves(msb: u64, lsb: u64) -> Result<Self, UuidError> {
        if msb == 0 || lsb == 0 {
            return Err(UuidError::InvalidIdentifier);
        }
        Ok(Self { msb, lsb })
    }

    /// Assembles a version 1 UUID from its raw field values.
    ///
    /// `uuid_time` is the timestamp in 100 ns ticks since 1582-10-15T00:00:00Z
    /// and is masked to 60 bits; `clock_seq` is masked to 14 bits and `node`
    /// to 48 bits.
    pub(crate) const fn from_fields_v1(uuid_time: i64, clock_seq: u16, node: u64) -> Self {
        let t = uuid_time as u64;
        let time_low = t & 0xFFFF_FFFF;
        let time_mid = (t >> 32) & 0xFFFF;
        let time_high_and_version = 0x1000 | ((t >> 48) & 0x0FFF);
        let clock_seq_and_variant = 0x8000 | (clock_seq as u64 & CLOCK_SEQ_MASK);

        Self {
            msb: (time_low << 32) | (time_mid << 16) | time_high_and_version,
            lsb: (clock_seq_and_variant << 48) | (node & NODE_MASK),
        }
    }

    /// Returns the `(most significant, least significant)` 64-bit halves.
    #[inline(always)]
    pub const fn as_halves(&self) -> (u64, u64) {
        (self.msb, self.lsb)
    }

    /// Returns the UUID as a big-endian `u128`.
    #[inline(always)]
    pub const fn as_u128(&self) -> u128 {
        ((self.msb as u128) << 64) | self.lsb as u128
    }

    /// Extracts the 60-bit timestamp in 100 ns ticks since the Gregorian
    /// calendar epoch (1582-10-15T00:00:00Z).
    #[inline]
    pub const fn timestamp(&self) -> u64 {
        ((self.msb & 0x0FFF) << 48) | (((self.msb >> 16) & 0xFFFF) << 32) | (self.msb >> 32)
    }

    /// Extracts the 14-bit clock sequence.
    #[inline(always)]
    pub const fn clock_sequence(&self) -> u16 {
        ((self.lsb >> 48) & CLOCK_SEQ_MASK) as u16
    }

    /// Extracts the 48-bit node identifier.
    #[inline(always)]
    pub const fn node(&self) -> u64 {
        self.lsb & NODE_MASK
    }

    /// Extracts the 4-bit version field (`1` for every UUID this crate mints).
    #[inline(always)]
    pub const fn version(&self) -> u8 {
        ((self.msb >> 12) & 0x0F) as u8
    }

    /// Extracts the variant field (`2` for the RFC 4122 `10` bit pattern).
    #[inline]
    pub const fn variant(&self) -> u8 {
        match self.lsb >> 61 {
            0b000..=0b011 => 0,
            0b100 | 0b101 => 2,
            0b110 => 6,
            _ => 7,
        }
    }

    /// Maps the 60-bit timestamp back to milliseconds since the Unix epoch,
    /// truncating the sub-millisecond ticks. Diagnostic counterpart of
    /// generation; uses the same Gregorian-epoch offset constant.
    pub fn epoch_millis(&self) -> i64 {
        crate::generator::time::epoch_millis(self.timestamp())
    }

    /// Renders the node identifier as 12 zero-padded uppercase hex digits,
    /// e.g. `"00123456789A"`.
    pub fn node_hex(&self) -> String {
        format!("{:012X}", self.node())
    }
}

impl fmt::Display for Uuid {
    /// Writes the 8-4-4-4-12 canonical hexadecimal representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.msb >> 32,
            (self.msb >> 16) & 0xFFFF,
            self.msb & 0xFFFF,
            self.lsb >> 48,
            self.lsb & NODE_MASK,
        )
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.as_u128()
    }
}

impl From<Uuid> for (u64, u64) {
    fn from(src: Uuid) -> Self {
        src.as_halves()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_assembly_and_extraction() {
        let uuid_time = 0x0123_4567_89AB_CDEFi64;
        let uuid = Uuid::from_fields_v1(uuid_time, 0x1234, 0x12_3456_789A);

        assert_eq!(uuid.timestamp(), uuid_time as u64);
        assert_eq!(uuid.clock_sequence(), 0x1234);
        assert_eq!(uuid.node(), 0x12_3456_789A);
        assert_eq!(uuid.version(), 1);
        assert_eq!(uuid.variant(), 2);
    }

    #[test]
    fn test_known_layout() {
        let uuid = Uuid::from_fields_v1(0x0123_4567_89AB_CDEF, 0x1234, 0x12_3456_789A);
        let (msb, lsb) = uuid.as_halves();

        assert_eq!(msb, 0x89AB_CDEF_4567_1123);
        assert_eq!(lsb, 0x9234_0012_3456_789A);
        assert_eq!(uuid.to_string(), "89abcdef-4567-1123-9234-00123456789a");
    }

    #[test]
    fn test_clock_sequence_and_node_are_masked() {
        // Oversized inputs must not leak into neighboring fields
        let uuid = Uuid::from_fields_v1(0, 0xFFFF, u64::MAX);
        assert_eq!(uuid.clock_sequence(), 0x3FFF);
        assert_eq!(uuid.node(), NODE_MASK);
        assert_eq!(uuid.version(), 1);
        assert_eq!(uuid.variant(), 2);
    }

    #[test]
    fn test_from_halves_rejects_zero() {
        assert!(matches!(
            Uuid::from_halves(0, 1),
            Err(UuidError::InvalidIdentifier)
        ));
        assert!(matches!(
            Uuid::from_halves(1, 0),
            Err(UuidError::InvalidIdentifier)
        ));
        assert!(matches!(
            Uuid::from_halves(0, 0),
            Err(UuidError::InvalidIdentifier)
        ));

        let uuid = Uuid::from_halves(0x89AB_CDEF_4567_1123, 0x9234_0012_3456_789A).unwrap();
        assert_eq!(uuid.as_halves(), (0x89AB_CDEF_4567_1123, 0x9234_0012_3456_789A));
    }

    #[test]
    fn test_u128_conversion() {
        let uuid = Uuid::from_fields_v1(0x0123_4567_89AB_CDEF, 0x1234, 0x12_3456_789A);
        assert_eq!(
            u128::from(uuid),
            0x89AB_CDEF_4567_1123_9234_0012_3456_789A
        );
    }

    #[test]
    fn test_display_shape() {
        let uuid = Uuid::from_fields_v1(1, 0, 1);
        let text = uuid.to_string();
        assert_eq!(text.len(), 36);
        for (i, c) in text.chars().enumerate() {
            if matches!(i, 8 | 13 | 18 | 23) {
                assert_eq!(c, '-', "expected hyphen at position {i} in {text}");
            } else {
                assert!(c.is_ascii_hexdigit(), "non-hex digit at {i} in {text}");
            }
        }
        // Version nibble sits right after the second hyphen
        assert_eq!(text.as_bytes()[14], b'1');
    }

    #[test]
    fn test_node_hex_is_padded_uppercase() {
        let uuid = Uuid::from_fields_v1(1, 0, 0x12_3456_789A);
        assert_eq!(uuid.node_hex(), "00123456789A");
    }
}
