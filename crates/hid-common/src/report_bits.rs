//! Bit-field access into HID report buffers
//!
//! HID packs fields least-significant bit first, so a field that starts at bit 6
//! of byte 1 and is 4 bits wide takes bits 6..8 of byte 1 as its low bits and
//! bits 0..2 of byte 2 as its high bits.

/// Widest field that can be read or written in one call.
pub const MAX_FIELD_BITS: u8 = 32;

/// Largest value a field of `bit_width` bits can hold.
pub fn field_max(bit_width: u8) -> u32 {
    if bit_width >= MAX_FIELD_BITS {
        u32::MAX
    } else {
        (1u32 << bit_width).saturating_sub(1)
    }
}

/// Absolute bit index one past the end of the field, or `None` on overflow.
pub fn field_end_bit(byte_offset: usize, bit_offset: u8, bit_width: u8) -> Option<usize> {
    byte_offset
        .checked_mul(8)?
        .checked_add(usize::from(bit_offset))?
        .checked_add(usize::from(bit_width))
}

fn field_is_well_formed(bit_offset: u8, bit_width: u8) -> bool {
    bit_offset < 8 && bit_width > 0 && bit_width <= MAX_FIELD_BITS
}

/// Read an unsigned field of `bit_width` bits.
///
/// Returns `None` when the field is malformed or does not fit inside `data`.
pub fn read_bits(data: &[u8], byte_offset: usize, bit_offset: u8, bit_width: u8) -> Option<u32> {
    if !field_is_well_formed(bit_offset, bit_width) {
        return None;
    }

    let span = (usize::from(bit_offset) + usize::from(bit_width)).div_ceil(8);
    let bytes = data.get(byte_offset..byte_offset.checked_add(span)?)?;

    // At most 5 bytes (7 + 32 bits), so the accumulator never overflows.
    let acc = bytes
        .iter()
        .rev()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
    let mask = u64::from(field_max(bit_width));

    u32::try_from((acc >> bit_offset) & mask).ok()
}

/// Write the low `bit_width` bits of `value` into the field.
///
/// Bits outside the field are left untouched. Returns `None` without modifying
/// `data` when the field is malformed or does not fit.
pub fn write_bits(
    data: &mut [u8],
    byte_offset: usize,
    bit_offset: u8,
    bit_width: u8,
    value: u32,
) -> Option<()> {
    if !field_is_well_formed(bit_offset, bit_width) {
        return None;
    }
    let end = field_end_bit(byte_offset, bit_offset, bit_width)?;
    if end > data.len().checked_mul(8)? {
        return None;
    }

    let start = byte_offset.checked_mul(8)?.checked_add(usize::from(bit_offset))?;
    for i in 0..usize::from(bit_width) {
        let bit = start + i;
        let byte = data.get_mut(bit / 8)?;
        let mask = 1u8 << (bit % 8);
        if (value >> i) & 1 == 1 {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }
    Some(())
}
