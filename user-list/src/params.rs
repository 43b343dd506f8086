use serde::{Deserialize, Serialize};

/// Page index used when the request carries none (or an unusable one)
pub const DEFAULT_PAGE: u64 = 0;

/// Page size used when the request carries none (or an unusable one)
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// A validated pagination request: zero-based page index and a non-zero size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub page: u64,
    pub size: u64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageParams {
    /// Creates parameters from already-typed values. A zero size falls back to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: if size == 0 { DEFAULT_PAGE_SIZE } else { size },
        }
    }

    /// Builds parameters from raw query-string values.
    ///
    /// Only the leading integer of each value is read, so `"2.0"` and `"3px"`
    /// count as 2 and 3, and integers beyond `u64` saturate to `u64::MAX`.
    /// Malformed values are never rejected: a missing, non-numeric or negative
    /// page becomes [`DEFAULT_PAGE`], and a missing, non-numeric or
    /// non-positive size becomes `default_size`.
    pub fn from_query(page: Option<&str>, size: Option<&str>, default_size: u64) -> Self {
        let default_size = if default_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            default_size
        };

        let page = page
            .and_then(parse_leading_integer)
            .unwrap_or(DEFAULT_PAGE);
        let size = size
            .and_then(parse_leading_integer)
            .filter(|size| *size > 0)
            .unwrap_or(default_size);

        Self { page, size }
    }

    /// Caps the page size at `max`
    pub fn clamp_size(self, max: u64) -> Self {
        Self {
            size: self.size.min(max.max(1)),
            ..self
        }
    }

    /// Index of the first item on this page
    pub fn start(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Index one past the last item on this page
    pub fn end(&self) -> u64 {
        self.start().saturating_add(self.size)
    }
}

/// Number of pages needed to hold `total` items, `ceil(total / size)`
pub fn total_pages(total: u64, size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

/// Reads the run of digits at the start of `value`, after optional whitespace
/// and an optional `+`. Negative or digit-less values yield `None`.
fn parse_leading_integer(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let digits = value.strip_prefix('+').unwrap_or(value);
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let parsed = digits[..len].bytes().fold(0u64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
    });
    Some(parsed)
}
