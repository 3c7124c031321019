//! Packed fixed-width big integer arithmetic.
//!
//! Values are stored as 30-bit blocks in 32-bit words, little-endian block
//! order (blocks[0] is least significant). The two spare high bits per word
//! let addition and subtraction read carries with a plain shift instead of
//! widening arithmetic. Exactly two widths exist: 1024-bit operands and a
//! 2048-bit double width that holds products and Montgomery intermediates.

use std::cmp::Ordering;
use std::fmt;

use crate::error::BigIntError;

/// Bits of magnitude stored per block.
const BLOCK_BITS: usize = 30;
/// Spare high bits per block, reserved for carry detection.
const BLOCK_CARRY_BITS: usize = 2;
/// Largest value a full block may hold.
const BLOCK_MAX: u32 = 0x3FFF_FFFF;
/// Bit set above a block by `sub` to realize a borrow.
const BLOCK_CARRY_SET: u32 = BLOCK_MAX + 1;
/// Bits per raw conversion word.
const WORD_BITS: usize = 32;
/// Bits per hex digit.
const HEX_CHAR_BITS: usize = 4;
/// Hex digits per raw conversion word.
const WORD_HEX_CHARS: usize = WORD_BITS / HEX_CHAR_BITS;

// The carry detection in add/sub assumes the spare bits top off a 32-bit word.
const _: () = assert!(BLOCK_BITS + BLOCK_CARRY_BITS == u32::BITS as usize);

/// An unsigned magnitude of exactly 1024 or 2048 bits.
///
/// The width is fixed at construction. Arithmetic mutates the receiver in
/// place except for multiplication and division, which produce new values.
///
/// # Examples
/// ```
/// use bigmont::BigInt;
/// let a = BigInt::from_hex("2A", BigInt::BITS).unwrap();
/// let mut b = BigInt::new(BigInt::BITS);
/// b.set_u32(0x2A);
/// assert_eq!(a, b);
/// ```
#[derive(Clone)]
pub struct BigInt {
    /// Configured width in bits, 1024 or 2048
    bit_length: usize,
    /// Little-endian 30-bit blocks; every block stays below `2^30`, the last
    /// below the last-block mask
    blocks: Box<[u32]>,
}

impl BigInt {
    /// Width of a normal operand.
    pub const BITS: usize = 1024;
    /// Width of products and Montgomery intermediates.
    pub const DOUBLE_BITS: usize = 2048;

    /// Creates a zero value of the given width.
    ///
    /// # Panics
    /// Panics if `bit_length` is neither 1024 nor 2048.
    pub fn new(bit_length: usize) -> Self {
        assert!(
            bit_length == Self::BITS || bit_length == Self::DOUBLE_BITS,
            "unsupported width: {} bits",
            bit_length
        );
        let block_count = bit_length.div_ceil(BLOCK_BITS);
        Self {
            bit_length,
            blocks: vec![0; block_count].into_boxed_slice(),
        }
    }

    /// Parses a hexadecimal string, most significant digit first.
    ///
    /// Accepts upper and lower case. Shorter strings are zero-extended on the
    /// left. Strings longer than `bit_length / 4` digits are truncated from
    /// the most significant end with a warning; truncation is never an error.
    /// Any character outside `0-9A-Fa-f` fails the whole conversion.
    pub fn from_hex(hex: &str, bit_length: usize) -> Result<Self, BigIntError> {
        let mut number = Self::new(bit_length);
        let capacity = bit_length / HEX_CHAR_BITS;
        if hex.len() > capacity {
            log::warn!(
                "hex string has {} digits but a {}-bit number holds {}; dropping the most significant {}",
                hex.len(),
                bit_length,
                capacity,
                hex.len() - capacity
            );
        }
        let digits = hex
            .chars()
            .map(|ch| hex_char_to_value(ch).ok_or(BigIntError::InvalidHexDigit(ch)))
            .collect::<Result<Vec<u32>, _>>()?;

        let mut raw = vec![0u32; bit_length / WORD_BITS];
        for (index, &digit) in digits.iter().rev().take(capacity).enumerate() {
            raw[index / WORD_HEX_CHARS] |= digit << (HEX_CHAR_BITS * (index % WORD_HEX_CHARS));
        }
        number.raw_to_blocks(&raw);
        Ok(number)
    }

    /// Renders the value as exactly `bit_length / 4` uppercase hex digits,
    /// most significant first, zero-padded.
    pub fn to_hex(&self) -> String {
        let raw = self.blocks_to_raw();
        let mut output = String::with_capacity(self.bit_length / HEX_CHAR_BITS);
        for word in raw.iter().rev() {
            output.push_str(&format!("{:08X}", word));
        }
        output
    }

    /// Configured width in bits.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Number of 30-bit blocks backing the value.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn last_block_bits(&self) -> usize {
        self.bit_length % BLOCK_BITS
    }

    fn last_block_mask(&self) -> u32 {
        (1u32 << self.last_block_bits()) - 1
    }

    fn block_mask(&self, index: usize) -> u32 {
        if index + 1 == self.blocks.len() {
            self.last_block_mask()
        } else {
            BLOCK_MAX
        }
    }

    /// Sets the value to zero.
    pub fn set_zero(&mut self) {
        self.blocks.fill(0);
    }

    /// Sets the value to the largest magnitude the width can hold.
    pub fn set_max(&mut self) {
        self.blocks.fill(BLOCK_MAX);
        let last = self.blocks.len() - 1;
        self.blocks[last] = self.last_block_mask();
    }

    /// Sets the value to a single small number.
    ///
    /// # Panics
    /// Panics if `value` does not fit in one 30-bit block.
    pub fn set_u32(&mut self, value: u32) {
        assert!(value <= BLOCK_MAX, "value does not fit in one block");
        self.set_zero();
        self.blocks[0] = value;
    }

    /// Copies another value into this one, block by block.
    ///
    /// A narrower source is zero-extended; a wider source is truncated to
    /// this width, which only preserves the value when it fits.
    pub fn copy_from(&mut self, other: &BigInt) {
        debug_assert!(
            other.msb().map_or(true, |position| position < self.bit_length),
            "copy_from would drop significant bits"
        );
        let shared = self.blocks.len().min(other.blocks.len());
        self.blocks[..shared].copy_from_slice(&other.blocks[..shared]);
        self.blocks[shared..].fill(0);
        let last = self.blocks.len() - 1;
        self.blocks[last] &= self.last_block_mask();
    }

    /// Returns true iff every block is zero.
    pub fn is_zero(&self) -> bool {
        self.blocks.iter().all(|&block| block == 0)
    }

    /// Compares magnitudes. Operands of different widths are allowed; the
    /// wider one only wins if its excess blocks hold anything.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        let shared = self.blocks.len().min(other.blocks.len());
        for index in (shared..self.blocks.len()).rev() {
            if self.blocks[index] != 0 {
                return Ordering::Greater;
            }
        }
        for index in (shared..other.blocks.len()).rev() {
            if other.blocks[index] != 0 {
                return Ordering::Less;
            }
        }
        for index in (0..shared).rev() {
            match self.blocks[index].cmp(&other.blocks[index]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }

    /// Zero-based position of the highest set bit, or `None` for zero.
    pub fn msb(&self) -> Option<usize> {
        for index in (0..self.blocks.len()).rev() {
            let block = self.blocks[index];
            if block != 0 {
                return Some(index * BLOCK_BITS + (31 - block.leading_zeros() as usize));
            }
        }
        None
    }

    /// Reads the bit at `position`.
    ///
    /// # Panics
    /// Panics if `position >= bit_length`.
    pub fn get_bit(&self, position: usize) -> bool {
        assert!(
            position < self.bit_length,
            "bit {} out of range for a {}-bit number",
            position,
            self.bit_length
        );
        (self.blocks[position / BLOCK_BITS] >> (position % BLOCK_BITS)) & 1 == 1
    }

    /// Writes the bit at `position`.
    ///
    /// # Panics
    /// Panics if `position >= bit_length`.
    pub fn set_bit(&mut self, position: usize, value: bool) {
        assert!(
            position < self.bit_length,
            "bit {} out of range for a {}-bit number",
            position,
            self.bit_length
        );
        let block = position / BLOCK_BITS;
        let offset = position % BLOCK_BITS;
        self.blocks[block] = (self.blocks[block] & !(1 << offset)) | ((value as u32) << offset);
    }

    /// Clears the bit at `position` and returns its previous value.
    ///
    /// # Panics
    /// Panics if `position >= bit_length`.
    pub fn clear_bit(&mut self, position: usize) -> bool {
        assert!(
            position < self.bit_length,
            "bit {} out of range for a {}-bit number",
            position,
            self.bit_length
        );
        let block = position / BLOCK_BITS;
        let offset = position % BLOCK_BITS;
        let previous = (self.blocks[block] >> offset) & 1 == 1;
        self.blocks[block] &= !(1 << offset);
        previous
    }

    /// Shifts left by at most one block's worth of bits, in place.
    ///
    /// Bits leaving the top block are discarded.
    ///
    /// # Panics
    /// Panics if `count > 30`.
    pub fn shift_left_block(&mut self, count: usize) {
        assert!(count <= BLOCK_BITS, "block shift wider than a block");
        let last = self.blocks.len() - 1;
        let mut carry = 0u32;
        for index in 0..last {
            let outgoing = self.blocks[index] >> (BLOCK_BITS - count);
            self.blocks[index] = ((self.blocks[index] << count) & BLOCK_MAX) | carry;
            carry = outgoing;
        }
        self.blocks[last] = ((self.blocks[last] << count) | carry) & self.last_block_mask();
    }

    /// Shifts right by at most one block's worth of bits, in place.
    ///
    /// # Panics
    /// Panics if `count > 30`.
    pub fn shift_right_block(&mut self, count: usize) {
        assert!(count <= BLOCK_BITS, "block shift wider than a block");
        let keep = (1u32 << count) - 1;
        self.blocks[0] >>= count;
        for index in 1..self.blocks.len() {
            let carry = self.blocks[index] & keep;
            self.blocks[index - 1] |= carry << (BLOCK_BITS - count);
            self.blocks[index] >>= count;
        }
    }

    /// Shifts left by any number of bits. Shifting by the full width or more
    /// zeroes the value.
    pub fn shift_left(&mut self, count: usize) {
        if count >= self.bit_length {
            self.set_zero();
            return;
        }
        let mut remaining = count;
        while remaining > BLOCK_BITS {
            self.shift_left_block(BLOCK_BITS);
            remaining -= BLOCK_BITS;
        }
        self.shift_left_block(remaining);
    }

    /// Shifts right by any number of bits. Shifting by the full width or more
    /// zeroes the value.
    pub fn shift_right(&mut self, count: usize) {
        if count >= self.bit_length {
            self.set_zero();
            return;
        }
        let mut remaining = count;
        while remaining > BLOCK_BITS {
            self.shift_right_block(BLOCK_BITS);
            remaining -= BLOCK_BITS;
        }
        self.shift_right_block(remaining);
    }

    /// Adds `other` into `self`, returning the carry that escaped the most
    /// significant block. A true return means the sum was truncated to this
    /// width.
    ///
    /// # Panics
    /// Panics if `other` has more blocks than `self`.
    pub fn add(&mut self, other: &BigInt) -> bool {
        assert!(
            self.blocks.len() >= other.blocks.len(),
            "addend wider than receiver"
        );
        let last = self.blocks.len() - 1;
        let mut carry = 0u32;
        for index in 0..other.blocks.len().min(last) {
            let sum = self.blocks[index] + other.blocks[index] + carry;
            self.blocks[index] = sum & BLOCK_MAX;
            carry = sum >> BLOCK_BITS;
        }
        for index in other.blocks.len()..last {
            let sum = self.blocks[index] + carry;
            self.blocks[index] = sum & BLOCK_MAX;
            carry = sum >> BLOCK_BITS;
        }
        let rhs = if other.blocks.len() == self.blocks.len() {
            other.blocks[last]
        } else {
            0
        };
        let sum = self.blocks[last] + rhs + carry;
        self.blocks[last] = sum & self.last_block_mask();
        sum >> self.last_block_bits() == 1
    }

    /// Subtracts `other` from `self` in place.
    ///
    /// The borrow is realized by pre-setting the bit above each 30-bit block
    /// and testing whether it survives the subtraction. Requires
    /// `self >= other`; the result is unspecified otherwise.
    ///
    /// # Panics
    /// Panics if `other` has more blocks than `self`.
    pub fn sub(&mut self, other: &BigInt) {
        assert!(
            self.blocks.len() >= other.blocks.len(),
            "subtrahend wider than receiver"
        );
        debug_assert!(
            self.compare(other) != Ordering::Less,
            "subtraction would underflow"
        );
        let last = self.blocks.len() - 1;
        let mut borrow = 0u32;
        for index in 0..other.blocks.len().min(last) {
            let value = (self.blocks[index] | BLOCK_CARRY_SET) - other.blocks[index] - borrow;
            borrow = (value >> BLOCK_BITS) ^ 1;
            self.blocks[index] = value & BLOCK_MAX;
        }
        for index in other.blocks.len()..last {
            let value = (self.blocks[index] | BLOCK_CARRY_SET) - borrow;
            borrow = (value >> BLOCK_BITS) ^ 1;
            self.blocks[index] = value & BLOCK_MAX;
        }
        let rhs = if other.blocks.len() == self.blocks.len() {
            other.blocks[last]
        } else {
            0
        };
        self.blocks[last] = self.blocks[last].wrapping_sub(rhs + borrow) & self.last_block_mask();
    }

    /// Schoolbook product of two 1024-bit operands, written into a
    /// caller-supplied double-width accumulator. The accumulator is zeroed
    /// first; it cannot alias an operand because it is borrowed exclusively.
    ///
    /// # Panics
    /// Panics if either operand is not 1024 bits wide or `result` is not
    /// 2048 bits wide.
    pub fn mul_into(&self, other: &BigInt, result: &mut BigInt) {
        assert_eq!(self.bit_length, Self::BITS, "left factor must be single width");
        assert_eq!(other.bit_length, Self::BITS, "right factor must be single width");
        assert_eq!(
            result.bit_length,
            Self::DOUBLE_BITS,
            "product needs the double width"
        );
        result.set_zero();
        for i in 0..self.blocks.len() {
            let mut carry = 0u64;
            for j in 0..other.blocks.len() {
                let partial = result.blocks[i + j] as u64
                    + self.blocks[i] as u64 * other.blocks[j] as u64
                    + carry;
                result.blocks[i + j] = (partial as u32) & BLOCK_MAX;
                carry = partial >> BLOCK_BITS;
            }
            let top = i + other.blocks.len();
            if top < result.blocks.len() {
                result.blocks[top] = carry as u32;
            } else {
                // the product of two in-range operands fits the double width
                debug_assert_eq!(carry, 0);
            }
        }
        let last = result.blocks.len() - 1;
        debug_assert!(result.blocks[last] <= result.last_block_mask());
    }

    /// Schoolbook product into a freshly allocated double-width value.
    pub fn mul(&self, other: &BigInt) -> BigInt {
        let mut result = BigInt::new(Self::DOUBLE_BITS);
        self.mul_into(other, &mut result);
        result
    }

    /// Binary long division: returns `(quotient, remainder)` at the
    /// numerator's width.
    ///
    /// Fails with [`BigIntError::DivisionByZero`] for a zero denominator; no
    /// computation is performed in that case.
    pub fn div(&self, denominator: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if denominator.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.div_unchecked(denominator))
    }

    /// Long division against a denominator already known to be nonzero.
    pub(crate) fn div_unchecked(&self, denominator: &BigInt) -> (BigInt, BigInt) {
        debug_assert!(!denominator.is_zero());
        let mut quotient = BigInt::new(self.bit_length);
        let mut remainder = BigInt::new(self.bit_length);
        let highest = match self.msb() {
            Some(position) => position,
            None => return (quotient, remainder),
        };
        // double-width scratch so shifting in the next bit never drops one
        let mut running = BigInt::new(Self::DOUBLE_BITS);
        for position in (0..=highest).rev() {
            running.shift_left_block(1);
            running.set_bit(0, self.get_bit(position));
            if running.compare(denominator) != Ordering::Less {
                running.sub(denominator);
                quotient.set_bit(position, true);
            }
        }
        remainder.copy_from(&running);
        (quotient, remainder)
    }

    /// Unpacks the 30-bit blocks into 32-bit raw words, little-endian.
    fn blocks_to_raw(&self) -> Vec<u32> {
        let mut raw = vec![0u32; self.bit_length / WORD_BITS];
        for (index, slot) in raw.iter_mut().enumerate() {
            let start = index * WORD_BITS;
            let block = start / BLOCK_BITS;
            let offset = start % BLOCK_BITS;
            let mut value = self.blocks[block] >> offset;
            let mut gathered = BLOCK_BITS - offset;
            let mut next = block + 1;
            while gathered < WORD_BITS && next < self.blocks.len() {
                value |= self.blocks[next] << gathered;
                gathered += BLOCK_BITS;
                next += 1;
            }
            *slot = value;
        }
        raw
    }

    /// Repacks 32-bit raw words into the 30-bit blocks. Each block's source
    /// word and offset follow from its bit position; a block draws from two
    /// words when it straddles a word boundary.
    fn raw_to_blocks(&mut self, raw: &[u32]) {
        debug_assert_eq!(raw.len() * WORD_BITS, self.bit_length);
        for index in 0..self.blocks.len() {
            let start = index * BLOCK_BITS;
            let word = start / WORD_BITS;
            let offset = start % WORD_BITS;
            let mut value = raw[word] >> offset;
            if WORD_BITS - offset < BLOCK_BITS && word + 1 < raw.len() {
                value |= raw[word + 1] << (WORD_BITS - offset);
            }
            self.blocks[index] = value & self.block_mask(index);
        }
    }
}

fn hex_char_to_value(digit: char) -> Option<u32> {
    match digit {
        '0'..='9' => Some(digit as u32 - '0' as u32),
        'a'..='f' => Some(10 + digit as u32 - 'a' as u32),
        'A'..='F' => Some(10 + digit as u32 - 'A' as u32),
        _ => None,
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt<{}>({})", self.bit_length, self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_u64(value: u64) -> BigInt {
        BigInt::from_hex(&format!("{:X}", value), BigInt::BITS).unwrap()
    }

    #[test]
    fn test_new_is_zero() {
        assert!(BigInt::new(BigInt::BITS).is_zero());
        assert!(BigInt::new(BigInt::DOUBLE_BITS).is_zero());
        assert_eq!(BigInt::new(BigInt::BITS).block_count(), 35);
        assert_eq!(BigInt::new(BigInt::DOUBLE_BITS).block_count(), 69);
    }

    #[test]
    fn test_hex_round_trip() {
        let text = "0123456789ABCDEFFEDCBA9876543210";
        let number = BigInt::from_hex(text, BigInt::BITS).unwrap();
        let rendered = number.to_hex();
        assert_eq!(rendered.len(), 256);
        assert!(rendered.ends_with(text));
        assert_eq!(BigInt::from_hex(&rendered, BigInt::BITS).unwrap(), number);
    }

    #[test]
    fn test_lowercase_accepted() {
        let lower = BigInt::from_hex("deadbeef", BigInt::BITS).unwrap();
        let upper = BigInt::from_hex("DEADBEEF", BigInt::BITS).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_bad_digit_rejected() {
        assert_eq!(
            BigInt::from_hex("GZ", BigInt::BITS),
            Err(BigIntError::InvalidHexDigit('G'))
        );
    }

    #[test]
    fn test_oversized_input_truncated() {
        // 257 digits: the leading 1 falls off, leaving zero
        let oversized = format!("1{}", "0".repeat(256));
        let number = BigInt::from_hex(&oversized, BigInt::BITS).unwrap();
        assert!(number.is_zero());
    }

    #[test]
    fn test_add_small() {
        let mut a = from_u64(1);
        let b = from_u64(2);
        assert!(!a.add(&b));
        assert_eq!(a, from_u64(3));
    }

    #[test]
    fn test_add_carries_across_blocks() {
        let mut a = from_u64(0x3FFF_FFFF);
        assert!(!a.add(&from_u64(1)));
        assert_eq!(a, from_u64(0x4000_0000));
    }

    #[test]
    fn test_add_overflow_sets_carry() {
        let mut a = BigInt::new(BigInt::BITS);
        a.set_max();
        assert!(a.add(&from_u64(1)));
        assert!(a.is_zero());
    }

    #[test]
    fn test_sub_borrows_across_blocks() {
        let mut a = from_u64(0x4000_0000);
        a.sub(&from_u64(1));
        assert_eq!(a, from_u64(0x3FFF_FFFF));
    }

    #[test]
    fn test_sub_equal_is_zero() {
        let mut a = from_u64(0xDEAD_BEEF);
        let b = a.clone();
        a.sub(&b);
        assert!(a.is_zero());
    }

    #[test]
    fn test_mul_small() {
        let product = from_u64(123).mul(&from_u64(456));
        assert_eq!(product.bit_length(), BigInt::DOUBLE_BITS);
        let mut expected = BigInt::new(BigInt::DOUBLE_BITS);
        expected.set_u32(123 * 456);
        assert_eq!(product, expected);
    }

    #[test]
    fn test_mul_by_zero() {
        let product = from_u64(0xABCD).mul(&BigInt::new(BigInt::BITS));
        assert!(product.is_zero());
    }

    #[test]
    fn test_div_small() {
        let (quotient, remainder) = from_u64(100).div(&from_u64(7)).unwrap();
        assert_eq!(quotient, from_u64(14));
        assert_eq!(remainder, from_u64(2));
    }

    #[test]
    fn test_div_by_zero() {
        let zero = BigInt::new(BigInt::BITS);
        assert_eq!(from_u64(5).div(&zero), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_shift_left_crosses_blocks() {
        let mut a = from_u64(1);
        a.shift_left(35);
        assert_eq!(a, from_u64(1 << 35));
    }

    #[test]
    fn test_shift_right_block_carry() {
        let mut a = from_u64(1 << 30);
        a.shift_right_block(1);
        assert_eq!(a, from_u64(1 << 29));
    }

    #[test]
    fn test_shift_by_width_is_zero() {
        let mut a = from_u64(0xFFFF);
        a.shift_left(BigInt::BITS);
        assert!(a.is_zero());
    }

    #[test]
    fn test_bit_accessors() {
        let mut a = BigInt::new(BigInt::BITS);
        a.set_bit(100, true);
        assert!(a.get_bit(100));
        assert!(!a.get_bit(99));
        assert!(a.clear_bit(100));
        assert!(!a.clear_bit(100));
        assert!(a.is_zero());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bit_out_of_range_panics() {
        let a = BigInt::new(BigInt::BITS);
        a.get_bit(BigInt::BITS);
    }

    #[test]
    fn test_msb() {
        assert_eq!(BigInt::new(BigInt::BITS).msb(), None);
        assert_eq!(from_u64(1).msb(), Some(0));
        assert_eq!(from_u64(0x80).msb(), Some(7));
        let mut a = BigInt::new(BigInt::BITS);
        a.set_bit(1023, true);
        assert_eq!(a.msb(), Some(1023));
    }

    #[test]
    fn test_compare_mixed_widths() {
        let narrow = from_u64(42);
        let mut wide = BigInt::new(BigInt::DOUBLE_BITS);
        wide.copy_from(&narrow);
        assert_eq!(narrow.compare(&wide), Ordering::Equal);
        wide.set_bit(1500, true);
        assert_eq!(narrow.compare(&wide), Ordering::Less);
        assert_eq!(wide.compare(&narrow), Ordering::Greater);
    }

    #[test]
    fn test_set_max_matches_all_f() {
        let mut manual = BigInt::new(BigInt::BITS);
        manual.set_max();
        let parsed = BigInt::from_hex(&"F".repeat(256), BigInt::BITS).unwrap();
        assert_eq!(manual, parsed);
        assert_eq!(manual.msb(), Some(1023));
    }

    #[test]
    fn test_copy_from_widens_and_narrows() {
        let original = from_u64(0x1234_5678_9ABC_DEF0);
        let mut wide = BigInt::new(BigInt::DOUBLE_BITS);
        wide.copy_from(&original);
        assert_eq!(wide, original);
        let mut back = BigInt::new(BigInt::BITS);
        back.copy_from(&wide);
        assert_eq!(back, original);
    }
}
