//! IBAN display grouping
//!
//! Produces the printed form of an International Bank Account Number:
//! uppercase alphanumerics in blocks of four, e.g. `DE19 1234 1234 1234 1234 12`.
//! No checksum validation is performed.

use super::TextFormatter;

/// Number of characters per printed block
const GROUP_SIZE: usize = 4;

/// Groups a value into the IBAN display format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IbanFormatter;

impl IbanFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextFormatter for IbanFormatter {
    fn format(&self, value: &str) -> String {
        let compact: Vec<char> = value
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
            .collect();

        let mut result = String::with_capacity(compact.len() + compact.len() / GROUP_SIZE);
        for (i, group) in compact.chunks(GROUP_SIZE).enumerate() {
            if i > 0 {
                result.push(' ');
            }
            result.extend(group);
        }
        result
    }
}
