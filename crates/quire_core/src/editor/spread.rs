//! Two-up spread math for the book viewer.
//!
//! The left page of a spread is always the even-normalized page number;
//! navigation steps by two pages and the presentation layer disables the
//! controls at the boundaries.

/// Pages moved per navigation step.
pub const SPREAD_STEP: i32 = 2;

/// The two-page view unit used during reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub left: u32,
    pub right: u32,
}

impl Spread {
    /// Computes the spread showing `current_page`: odd pages advance to the
    /// next even number for the left side, the right side follows.
    pub fn for_page(current_page: u32) -> Self {
        let left = if current_page % 2 == 0 {
            current_page
        } else {
            current_page + 1
        };
        Self {
            left,
            right: left + 1,
        }
    }

    /// Whether backward navigation stays in range (controls disable at the
    /// first spread).
    pub fn has_previous(&self) -> bool {
        self.left > 2
    }

    /// Whether forward navigation stays in range.
    pub fn has_next(&self, page_count: u32) -> bool {
        self.right < page_count
    }

    /// Indicator label shown under the spread.
    pub fn indicator(&self, page_count: u32) -> String {
        format!("Pages {}-{} of {}", self.left, self.right, page_count)
    }
}

#[cfg(test)]
mod tests {
    use super::Spread;

    #[test]
    fn odd_pages_normalize_to_the_next_even_left_page() {
        assert_eq!(Spread::for_page(5), Spread { left: 6, right: 7 });
        assert_eq!(Spread::for_page(1), Spread { left: 2, right: 3 });
    }

    #[test]
    fn even_pages_keep_the_left_side() {
        assert_eq!(Spread::for_page(6), Spread { left: 6, right: 7 });
    }

    #[test]
    fn boundaries_disable_navigation() {
        let first = Spread::for_page(1);
        assert!(!first.has_previous());
        assert!(first.has_next(50));

        let last = Spread::for_page(50);
        assert!(last.has_previous());
        assert!(!last.has_next(50));
    }

    #[test]
    fn indicator_names_both_pages() {
        assert_eq!(Spread::for_page(6).indicator(50), "Pages 6-7 of 50");
    }
}
