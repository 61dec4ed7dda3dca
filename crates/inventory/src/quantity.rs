//! Quantity normalization for pasted spreadsheet cells.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Digits with at most one decimal point, at least one digit overall.
/// ASCII only: `\d` would also accept other scripts' digits.
static NUMERIC_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("numeric quantity pattern is valid")
});

/// A normalized quantity cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// The cell was numeric; fractional part truncated.
    Counted(u64),
    /// The cell was not numeric (placeholder, currency, blank, negative...).
    /// Holds the original cell text exactly as pasted.
    Unparsed(String),
}

impl Quantity {
    /// Normalize a raw quantity cell.
    ///
    /// Comma separators and surrounding whitespace are stripped before the
    /// numeric check; the fallback keeps the untouched original.
    pub fn normalize(raw: &str) -> Self {
        let stripped = raw.replace(',', "");
        let candidate = stripped.trim();

        if !NUMERIC_QUANTITY.is_match(candidate) {
            return Self::Unparsed(raw.to_string());
        }

        let whole = candidate.split('.').next().unwrap_or_default();
        if whole.is_empty() {
            return Self::Counted(0);
        }

        match whole.parse::<u64>() {
            Ok(n) => Self::Counted(n),
            // Out of range for u64; keep it display-only.
            Err(_) => Self::Unparsed(raw.to_string()),
        }
    }

    /// Best-effort integer value; 0 for unparsed cells.
    pub fn numeric(&self) -> u64 {
        match self {
            Self::Counted(n) => *n,
            Self::Unparsed(_) => 0,
        }
    }

    /// Human-readable form: comma-grouped digits, or the raw cell text.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Self::Counted(n) => Cow::Owned(group_thousands(*n)),
            Self::Unparsed(raw) => Cow::Borrowed(raw),
        }
    }

    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Counted(_))
    }

    /// Counted and exactly zero. A placeholder such as `-` is not a stock-out.
    pub fn is_zero_stock(&self) -> bool {
        matches!(self, Self::Counted(0))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.display())
    }
}

/// Render `n` with a comma every three digits (`1508` -> `1,508`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
