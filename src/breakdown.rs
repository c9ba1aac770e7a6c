//! Result of splitting an amount into bills.

use std::fmt;

/// A single bill value.
pub type Denomination = u32;

/// Bills to hand out for a withdrawal.
///
/// `Empty` means no valid breakdown exists, which is what the splitters
/// return for zero or negative amounts. `Bills` is ordered largest-first
/// and always sums to the requested amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillBreakdown {
    /// No breakdown could be produced.
    Empty,

    /// Bills in dispensing order.
    Bills(Vec<Denomination>),
}

impl BillBreakdown {
    /// Returns `true` for the `Empty` marker.
    pub fn is_empty(&self) -> bool {
        matches!(self, BillBreakdown::Empty)
    }

    /// The bills, or an empty slice for `Empty`.
    pub fn bills(&self) -> &[Denomination] {
        match self {
            BillBreakdown::Empty => &[],
            BillBreakdown::Bills(bills) => bills,
        }
    }

    /// Number of bills handed out.
    pub fn bill_count(&self) -> usize {
        self.bills().len()
    }

    /// Sum of all bills.
    pub fn total(&self) -> u64 {
        self.bills().iter().map(|&b| u64::from(b)).sum()
    }
}

/// Formats the bills as `100, 50, 20`. `Empty` renders as an empty string.
impl fmt::Display for BillBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bill) in self.bills().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", bill)?;
        }
        Ok(())
    }
}
