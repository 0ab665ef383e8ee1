use std::fmt::{Debug, Display, Formatter, Write};

/// Fixed-precision number with comma-separated thousands.
#[derive(Copy, Clone)]
pub struct Grouped {
    value: f64,
    precision: usize,
}

impl Grouped {
    pub const fn new(value: f64, precision: usize) -> Self {
        Self { value, precision }
    }
}

impl Debug for Grouped {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Grouped {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let digits = format!("{:.*}", self.precision, self.value.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        // Values that round to zero lose their sign.
        if self.value.is_sign_negative() && digits.bytes().any(|byte| matches!(byte, b'1'..=b'9')) {
            f.write_char('-')?;
        }
        for (i, digit) in integer.chars().enumerate() {
            if i != 0 && (integer.len() - i) % 3 == 0 {
                f.write_char(',')?;
            }
            f.write_char(digit)?;
        }
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}
