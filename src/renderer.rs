use std::fmt::{self, Display, Formatter};

use crate::codec::BufrValue;

/// One decoded parameter as an aligned output line.
///
/// Columns: right-aligned index, left-aligned mnemonic, right-aligned
/// value, left-aligned description. Formatting is pure; displaying the
/// same line twice yields identical text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterLine<'a> {
    /// Position within the current subset's printed parameters.
    pub index: u32,
    /// Mnemonic, or a raw descriptor code where no mnemonic applies.
    pub label: &'a str,
    pub value: &'a BufrValue,
    pub description: &'a str,
}

impl Display for ParameterLine<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // The value is rendered first so that width applies to the
        // finished text, not to the inner numeric formatting.
        let value = self.value.to_string();
        write!(
            f,
            "{:>6}  {:<8} {:>29}  {:<60}",
            self.index, self.label, value, self.description
        )
    }
}
