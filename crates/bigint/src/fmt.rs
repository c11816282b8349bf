use std::fmt;

use crate::BigInt;

/// Separates digits of bases above 10, which no longer fit in one character.
pub const DIGIT_DELIMITER: char = ':';

impl BigInt {
    /// Renders the value with digits grouped from the least significant end.
    ///
    /// Groups of `group` digits are joined by `separator`; a `group` of zero
    /// disables grouping. For bases above 10 each digit is written in decimal
    /// and digits within a group are joined by [`DIGIT_DELIMITER`].
    #[must_use]
    pub fn to_pretty_string(&self, group: usize, separator: &str) -> String {
        let body = self.render_digits(group, separator);
        if self.is_negative() {
            format!("-{body}")
        } else {
            body
        }
    }

    /// Renders the value in groups of three digits separated by commas.
    #[must_use]
    pub fn pretty(&self) -> String {
        self.to_pretty_string(3, ",")
    }

    fn render_digits(&self, group: usize, separator: &str) -> String {
        let wide = self.base() > 10;
        let digits = self.digits();

        let mut out = String::with_capacity(digits.len() * 2);
        for (position, digit) in digits.iter().enumerate().rev() {
            if position + 1 < digits.len() {
                if group > 0 && (position + 1) % group == 0 {
                    out.push_str(separator);
                } else if wide {
                    out.push(DIGIT_DELIMITER);
                }
            }
            out.push_str(&digit.to_string());
        }
        out
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.render_digits(0, ""))
    }
}
