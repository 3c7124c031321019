//! Montgomery modular multiplication over a precomputed reduction table.
//!
//! [`MontgomeryCtx`] owns an odd modulus together with a table of shifted
//! residues of `2^msb(m)`. Building the context is the one-time quadratic
//! setup; every later reduction walks the table instead of dividing.
//! Dropping the context (or calling [`MontgomeryCtx::into_modulus`])
//! releases the table, so enable and disable cannot get out of step.

use std::cmp::Ordering;

use crate::bigint::BigInt;

/// A 1024-bit odd modulus with its reduction table, ready for modular
/// multiplication and exponentiation.
///
/// # Examples
/// ```
/// use bigmont::{BigInt, MontgomeryCtx};
/// let modulus = BigInt::from_hex("61", BigInt::BITS).unwrap(); // 97
/// let ctx = MontgomeryCtx::new(modulus).unwrap();
/// let a = BigInt::from_hex("0A", BigInt::BITS).unwrap();
/// let b = BigInt::from_hex("14", BigInt::BITS).unwrap();
/// let mut expected = BigInt::new(BigInt::BITS);
/// expected.set_u32(6); // 10 * 20 mod 97
/// assert_eq!(ctx.mod_mul(&a, &b), expected);
/// ```
pub struct MontgomeryCtx {
    modulus: BigInt,
    /// `table[i] = (2^msb(m) << i) mod m` for `i` in `0..=msb(m)+1`. The
    /// extra top entry keeps a full product of two reduced operands, whose
    /// highest bit can reach `2*msb(m)+1`, inside the table's reach.
    table: Vec<BigInt>,
    /// Position of the modulus' highest set bit
    msb: usize,
}

impl MontgomeryCtx {
    /// Builds the reduction table for `modulus` and takes ownership of it.
    ///
    /// Returns `None` if the modulus is zero or even (Montgomery arithmetic
    /// needs `gcd(m, 2) = 1`).
    pub fn new(modulus: BigInt) -> Option<Self> {
        assert_eq!(
            modulus.bit_length(),
            BigInt::BITS,
            "modulus must be single width"
        );
        let msb = modulus.msb()?;
        if !modulus.get_bit(0) {
            return None;
        }

        let mut table = Vec::with_capacity(msb + 2);
        let mut entry = BigInt::new(BigInt::DOUBLE_BITS);
        entry.set_u32(1);
        entry.shift_left(msb);
        while entry.compare(&modulus) != Ordering::Less {
            entry.sub(&modulus);
        }
        table.push(entry);
        for index in 1..=msb + 1 {
            let mut entry = table[index - 1].clone();
            entry.shift_left(1);
            while entry.compare(&modulus) != Ordering::Less {
                entry.sub(&modulus);
            }
            table.push(entry);
        }
        log::debug!("reduction table ready: {} double-width entries", msb + 2);
        Some(Self {
            modulus,
            table,
            msb,
        })
    }

    /// The modulus this context reduces by.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Releases the reduction table and hands the plain modulus back.
    pub fn into_modulus(self) -> BigInt {
        self.modulus.clone()
    }

    /// Reduces `value` below the modulus in place.
    ///
    /// Values already below the modulus are left alone; a value with the same
    /// highest bit as the modulus needs a single subtraction. Anything wider
    /// is folded bit by bit through the table: each bit at position `p >=
    /// msb(m)` is cleared and replaced by `table[p - msb(m)]`, then the
    /// truncated value is added back and the sum trimmed by subtraction.
    ///
    /// The table covers bit positions up to `2 * msb(m) + 1`, so a full
    /// product of two reduced operands reduces directly.
    ///
    /// # Panics
    /// Panics if `msb(value) > 2 * msb(modulus) + 1`, which the table cannot
    /// cover.
    pub fn reduce(&self, value: &mut BigInt) {
        let highest = match value.msb() {
            Some(position) => position,
            None => return,
        };
        assert!(
            highest <= 2 * self.msb + 1,
            "operand too wide for the reduction table"
        );
        if value.compare(&self.modulus) == Ordering::Less {
            return;
        }
        if highest == self.msb {
            value.sub(&self.modulus);
            return;
        }
        let mut accumulated = BigInt::new(BigInt::DOUBLE_BITS);
        for position in (self.msb..=highest).rev() {
            if value.clear_bit(position) {
                accumulated.add(&self.table[position - self.msb]);
            }
        }
        accumulated.add(value);
        while accumulated.compare(&self.modulus) != Ordering::Less {
            accumulated.sub(&self.modulus);
        }
        value.copy_from(&accumulated);
    }

    /// Bit-serial Montgomery product `x * y * R^-1 mod m` with
    /// `R = 2^(msb(m) + 1)`.
    ///
    /// One iteration per bit position `0..=msb(m)`, so every bit a reduced
    /// operand can carry is consumed: add `y` when the current bit of `x` is
    /// set, add `m` when the running sum would otherwise end up odd, then
    /// halve. A carry out of the double-width accumulator is re-injected as
    /// its top bit after the halving.
    ///
    /// # Panics
    /// Panics unless both operands match the modulus width and are already
    /// reduced below the modulus.
    pub fn mont_mul(&self, x: &BigInt, y: &BigInt) -> BigInt {
        assert_eq!(
            x.bit_length(),
            self.modulus.bit_length(),
            "left operand width must match the modulus"
        );
        assert_eq!(
            y.bit_length(),
            self.modulus.bit_length(),
            "right operand width must match the modulus"
        );
        assert!(
            x.compare(&self.modulus) == Ordering::Less,
            "left operand not reduced"
        );
        assert!(
            y.compare(&self.modulus) == Ordering::Less,
            "right operand not reduced"
        );

        let mut accumulator = BigInt::new(BigInt::DOUBLE_BITS);
        let y_low = y.get_bit(0);
        for position in 0..=self.msb {
            let x_bit = x.get_bit(position);
            // parity the sum will have after the conditional add of y
            let cancel = accumulator.get_bit(0) ^ (x_bit && y_low);
            let mut overflow = false;
            if x_bit {
                overflow = accumulator.add(y);
            }
            if cancel {
                let second = accumulator.add(&self.modulus);
                debug_assert!(!(overflow && second));
                overflow = overflow || second;
            }
            debug_assert!(!accumulator.get_bit(0));
            accumulator.shift_right_block(1);
            if overflow {
                accumulator.set_bit(BigInt::DOUBLE_BITS - 1, true);
            }
        }
        if accumulator.compare(&self.modulus) != Ordering::Less {
            accumulator.sub(&self.modulus);
        }
        let mut product = BigInt::new(self.modulus.bit_length());
        product.copy_from(&accumulator);
        product
    }

    /// Carries `value` into the Montgomery domain: `value * R mod m`.
    ///
    /// Realized as a left shift by `msb(m)` followed by a table reduction,
    /// then one more doubling for the final bit of `R`.
    ///
    /// # Panics
    /// Panics unless `value` is already reduced below the modulus.
    pub fn to_mont(&self, value: &BigInt) -> BigInt {
        assert!(
            value.compare(&self.modulus) == Ordering::Less,
            "operand not reduced"
        );
        let mut wide = BigInt::new(BigInt::DOUBLE_BITS);
        wide.copy_from(value);
        wide.shift_left(self.msb);
        self.reduce(&mut wide);
        wide.shift_left_block(1);
        if wide.compare(&self.modulus) != Ordering::Less {
            wide.sub(&self.modulus);
        }
        let mut scaled = BigInt::new(self.modulus.bit_length());
        scaled.copy_from(&wide);
        scaled
    }

    /// Carries a Montgomery-domain value back to the plain domain:
    /// `value * R^-1 mod m`.
    pub fn from_mont(&self, value: &BigInt) -> BigInt {
        if self.msb == 0 {
            // modulus 1: the only residue is zero
            return BigInt::new(self.modulus.bit_length());
        }
        let mut one = BigInt::new(self.modulus.bit_length());
        one.set_u32(1);
        self.mont_mul(value, &one)
    }

    /// Modular product of two reduced operands.
    ///
    /// One conversion is enough: `mont_mul(x * R, y) = x * y * R * R^-1 =
    /// x * y (mod m)`.
    pub fn mod_mul(&self, x: &BigInt, y: &BigInt) -> BigInt {
        let scaled = self.to_mont(x);
        self.mont_mul(&scaled, y)
    }

    /// Modular exponentiation `base ^ exponent mod m` by square-and-multiply,
    /// least significant exponent bit first.
    ///
    /// The base is reduced by division once, converted into the Montgomery
    /// domain once, and every square and multiply stays in that domain until
    /// the final conversion back.
    ///
    /// # Panics
    /// Panics unless `base` matches the modulus width.
    pub fn mod_pow(&self, base: &BigInt, exponent: &BigInt) -> BigInt {
        assert_eq!(
            base.bit_length(),
            self.modulus.bit_length(),
            "base width must match the modulus"
        );
        if self.msb == 0 {
            // modulus 1: every residue is zero
            return BigInt::new(self.modulus.bit_length());
        }

        let (_, base_reduced) = base.div_unchecked(&self.modulus);
        let mut one = BigInt::new(self.modulus.bit_length());
        one.set_u32(1);
        let mut result = self.to_mont(&one);
        let mut squared = self.to_mont(&base_reduced);

        let exponent_bits = exponent.msb().map_or(0, |position| position + 1);
        for position in 0..exponent_bits {
            if exponent.get_bit(position) {
                result = self.mont_mul(&result, &squared);
            }
            squared = self.mont_mul(&squared, &squared);
        }

        self.from_mont(&result)
    }
}

impl Drop for MontgomeryCtx {
    fn drop(&mut self) {
        log::debug!("reduction table released");
    }
}
