use crate::errors::{ReplayError, ReplayResult};

/// Date syntax used by a bank export.
///
/// Conversion is a positional reorder of the fields into `DD/MM/YYYY`; the
/// fields themselves are copied as they appear (no padding, no calendar check).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `YYYY-MM-DD`
    YearMonthDay,
}

impl DateLayout {
    fn separator(self) -> char {
        match self {
            DateLayout::MonthDayYear => '/',
            DateLayout::YearMonthDay => '-',
        }
    }

    /// Rewrites `raw` into `DD/MM/YYYY`.
    pub fn to_day_month_year(self, raw: &str) -> ReplayResult<String> {
        let s = raw.trim();
        let fields: Vec<&str> = s.split(self.separator()).collect();

        let [a, b, c] = fields.as_slice() else {
            return Err(ReplayError::format(
                "date",
                raw,
                format!("expected 3 fields separated by '{}'", self.separator()),
            ));
        };

        if [a, b, c].iter().any(|f| f.trim().is_empty()) {
            return Err(ReplayError::format("date", raw, "empty date field"));
        }

        let (day, month, year) = match self {
            DateLayout::MonthDayYear => (b, a, c),
            DateLayout::YearMonthDay => (c, b, a),
        };

        Ok(format!("{day}/{month}/{year}"))
    }
}
