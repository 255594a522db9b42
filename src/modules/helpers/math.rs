/// an f64 has at most 1074 fraction digits, formatting with more prints
/// its exact decimal value
const EXACT_FRACTION_DIGITS: usize = 1100;

pub struct Math {}

impl Math {
    /// # round half up
    /// rounds to the nearest integer, ties go towards positive infinity.
    /// `2.5` becomes `3` but `-2.5` becomes `-2`
    pub fn round_half_up(number: f64) -> f64 {
        let floor = number.floor();
        if number - floor >= 0.5 {
            floor + 1.0
        } else {
            floor
        }
    }

    pub fn round_to_integer(number: f64) -> i64 {
        Math::round_half_up(number) as i64
    }

    /// # fixed point string
    /// formats a number with exactly `decimals` fraction digits. rounding
    /// looks at the exact decimal value of the double, ties go up, so
    /// `1.045` (stored as `1.04499...`) becomes `"1.04"`. negative numbers
    /// are rounded on their magnitude.
    ///
    /// ## Arguments
    /// * `number` - the number to format
    /// * `decimals` - amount of fraction digits
    ///
    /// ## Returns
    /// * `String` - e.g. `"2.60"` for `2.6` and two decimals
    pub fn to_fixed(number: f64, decimals: usize) -> String {
        if !number.is_finite() {
            return number.to_string();
        }

        let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, number.abs());
        let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

        let mut digits: Vec<u8> = integer
            .bytes()
            .chain(fraction.bytes().take(decimals))
            .map(|digit| digit - b'0')
            .collect();

        let round_up = fraction.as_bytes().get(decimals).map_or(false, |digit| *digit >= b'5');
        if round_up {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, 1);
            }
        }

        let integer_len = digits.len() - decimals;
        let text: String = digits.iter().map(|digit| char::from(b'0' + digit)).collect();
        let sign = if number < 0.0 { "-" } else { "" };

        if decimals == 0 {
            format!("{sign}{text}")
        } else {
            format!("{sign}{}.{}", &text[..integer_len], &text[integer_len..])
        }
    }

    /// `None` for an empty slice instead of dividing by zero
    pub fn mean(nums: &[f64]) -> Option<f64> {
        if nums.is_empty() {
            return None;
        }

        let sum: f64 = nums.iter().sum();
        Some(sum / nums.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(Math::round_half_up(12.5), 13.0);
        assert_eq!(Math::round_half_up(-2.5), -2.0);
        assert_eq!(Math::round_half_up(-2.6), -3.0);
        assert_eq!(Math::round_half_up(0.49), 0.0);
        assert_eq!(Math::round_to_integer(74.5), 75);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(Math::to_fixed(2.6, 2), "2.60");
        assert_eq!(Math::to_fixed(3.125, 2), "3.13");
        assert_eq!(Math::to_fixed(2.0, 2), "2.00");
        assert_eq!(Math::to_fixed(9.999, 2), "10.00");
        assert_eq!(Math::to_fixed(2.4, 0), "2");
    }

    #[test]
    fn test_to_fixed_rounds_the_stored_value() {
        // 1.045 is stored as 1.04499999999999992894...
        assert_eq!(Math::to_fixed(1.045, 2), "1.04");
        // 1.005 is stored just below the tie as well
        assert_eq!(Math::to_fixed(1.005, 2), "1.00");
        // exact ties round up
        assert_eq!(Math::to_fixed(0.125, 2), "0.13");
        assert_eq!(Math::to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_mean() {
        assert_eq!(Math::mean(&[]), None);
        assert_eq!(Math::mean(&[300.0, 340.0]), Some(320.0));
    }
}
