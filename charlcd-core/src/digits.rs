//! Decimal digit sequencing for the write-number operation
//!
//! Repeated division produces digits least-significant-first, but the
//! display wants them in reading order. The producer folds the value
//! into a reversed decimal image up front and then consumes that image
//! from its own low end, which restores most-significant-first order.

/// Emits the decimal digits of an unsigned integer in print order
#[derive(Debug, Clone)]
pub struct DigitProducer {
    /// Reversed decimal image of the value. Wider than the input
    /// because the reversed image of a 20-digit value can exceed
    /// `u64::MAX`.
    reversed: u128,
    /// Digits left to emit. Counting digits (instead of testing the
    /// accumulator for zero) preserves internal and trailing zeros.
    remaining: u8,
}

impl DigitProducer {
    pub fn new(value: u64) -> Self {
        if value == 0 {
            // A lone zero never enters the reversal loop
            return Self {
                reversed: 0,
                remaining: 1,
            };
        }

        let mut value = value as u128;
        let mut reversed: u128 = 0;
        let mut remaining = 0;
        while value != 0 {
            reversed = reversed * 10 + value % 10;
            value /= 10;
            remaining += 1;
        }

        Self { reversed, remaining }
    }

    /// Next digit (0-9) in reading order, or `None` once exhausted
    pub fn next_digit(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let digit = (self.reversed % 10) as u8;
        self.reversed /= 10;
        Some(digit)
    }
}

#[cfg(test)]
mod tests {
    use heapless::Vec;
    use proptest::prelude::*;

    use super::*;

    fn digits_of(value: u64) -> Vec<u8, 24> {
        let mut producer = DigitProducer::new(value);
        let mut out = Vec::new();
        while let Some(digit) = producer.next_digit() {
            out.push(digit).unwrap();
        }
        out
    }

    #[test]
    fn test_zero_is_a_single_digit() {
        assert_eq!(digits_of(0).as_slice(), &[0]);
    }

    #[test]
    fn test_reading_order() {
        assert_eq!(digits_of(105).as_slice(), &[1, 0, 5]);
        assert_eq!(digits_of(12345).as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_trailing_zeros_survive() {
        assert_eq!(digits_of(100).as_slice(), &[1, 0, 0]);
        assert_eq!(digits_of(1000).as_slice(), &[1, 0, 0, 0]);
        assert_eq!(digits_of(90400).as_slice(), &[9, 0, 4, 0, 0]);
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut producer = DigitProducer::new(7);
        assert_eq!(producer.next_digit(), Some(7));
        assert_eq!(producer.next_digit(), None);
        assert_eq!(producer.next_digit(), None);
    }

    proptest! {
        #[test]
        fn test_round_trip_reconstruction(value in any::<u64>()) {
            let digits = digits_of(value);
            // Leading digit of a nonzero value is never zero
            if value != 0 {
                prop_assert_ne!(digits[0], 0);
            }
            let rebuilt = digits
                .iter()
                .fold(0u64, |acc, &digit| acc * 10 + u64::from(digit));
            prop_assert_eq!(rebuilt, value);
        }
    }
}
