/// Lower edge of the price domain covered by the slider.
pub const PRICE_DOMAIN_LOW: u32 = 0;
/// Upper edge of the price domain covered by the slider.
pub const PRICE_DOMAIN_HIGH: u32 = 10_000;

/// Which slider thumb is stacked on top where the two overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thumb {
    Min,
    Max,
}

/// Two coupled price bounds driven by the dual-thumb slider and the paired
/// numeric fields. Invariant: `PRICE_DOMAIN_LOW <= min < max <= PRICE_DOMAIN_HIGH`,
/// with at least one unit of separation between the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// The full domain, the state before the user has narrowed anything.
    pub fn full() -> Self {
        Self {
            min: PRICE_DOMAIN_LOW,
            max: PRICE_DOMAIN_HIGH,
        }
    }

    /// Builds a range from two proposed bounds, clamping both into the
    /// domain. Out-of-order bounds end up adjacent rather than crossed.
    pub fn new(min: u32, max: u32) -> Self {
        let mut range = Self::full();
        range.set_max(max);
        range.set_min(min);
        range
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Commits a proposed min bound: clamped into `[PRICE_DOMAIN_LOW,
    /// PRICE_DOMAIN_HIGH - 1]` and then to one below the current max.
    /// Returns the committed `(min, max)` pair for the owner to fold into
    /// its filter state.
    pub fn set_min(&mut self, value: u32) -> (u32, u32) {
        self.min = value
            .clamp(PRICE_DOMAIN_LOW, PRICE_DOMAIN_HIGH - 1)
            .min(self.max - 1);
        (self.min, self.max)
    }

    /// Commits a proposed max bound: clamped into `[PRICE_DOMAIN_LOW + 1,
    /// PRICE_DOMAIN_HIGH]` and then to one above the current min. A
    /// decrease below the current min commits `min + 1`, never a crossing.
    pub fn set_max(&mut self, value: u32) -> (u32, u32) {
        self.max = value
            .clamp(PRICE_DOMAIN_LOW + 1, PRICE_DOMAIN_HIGH)
            .max(self.min + 1);
        (self.min, self.max)
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= f64::from(self.min) && price <= f64::from(self.max)
    }

    /// When both handles sit at the top of the domain they visually
    /// coincide and only the topmost one can be grabbed, so the min handle
    /// is raised above the max handle there.
    pub fn top_thumb(&self) -> Thumb {
        if self.min >= PRICE_DOMAIN_HIGH - 1 {
            Thumb::Min
        } else {
            Thumb::Max
        }
    }

    /// `(min, max)` as percentages of the domain, for the filled track
    /// between the two thumbs. Derived, never stored.
    pub fn fill_percent(&self) -> (f64, f64) {
        let span = f64::from(PRICE_DOMAIN_HIGH - PRICE_DOMAIN_LOW);
        (
            f64::from(self.min - PRICE_DOMAIN_LOW) / span * 100.0,
            f64::from(self.max - PRICE_DOMAIN_LOW) / span * 100.0,
        )
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(range: &PriceRange) {
        assert!(range.min() < range.max());
        assert!(range.max() <= PRICE_DOMAIN_HIGH);
    }

    #[test]
    fn test_set_min_clamps_to_domain_and_max() {
        let mut range = PriceRange::full();
        range.set_min(500);
        assert_eq!(range.min(), 500);

        range.set_min(20_000);
        assert_eq!(range.min(), PRICE_DOMAIN_HIGH - 1);
        assert_invariant(&range);

        let mut range = PriceRange::new(0, 300);
        range.set_min(800);
        assert_eq!((range.min(), range.max()), (299, 300));
        assert_invariant(&range);
    }

    #[test]
    fn test_max_decrease_below_min_commits_adjacent_bound() {
        let mut range = PriceRange::new(500, 9_999);
        let committed = range.set_max(400);
        assert_eq!(committed, (500, 501));
        assert_invariant(&range);
    }

    #[test]
    fn test_guard_at_domain_edges() {
        let mut range = PriceRange::new(0, 1);
        // max already at its lowest allowed value; pushing min down is a no-op
        range.set_min(0);
        assert_eq!((range.min(), range.max()), (0, 1));

        let mut range = PriceRange::new(PRICE_DOMAIN_HIGH - 1, PRICE_DOMAIN_HIGH);
        range.set_max(20_000);
        assert_eq!(
            (range.min(), range.max()),
            (PRICE_DOMAIN_HIGH - 1, PRICE_DOMAIN_HIGH)
        );
    }

    #[test]
    fn test_invariant_holds_under_update_sequences() {
        let mut range = PriceRange::full();
        let updates: [(bool, u32); 8] = [
            (true, 9_999),
            (false, 0),
            (true, 0),
            (false, 10_000),
            (true, 4_000),
            (false, 3_000),
            (true, 12_345),
            (false, 1),
        ];
        for (is_min, value) in updates {
            if is_min {
                range.set_min(value);
            } else {
                range.set_max(value);
            }
            assert_invariant(&range);
        }
    }

    #[test]
    fn test_top_thumb_flips_when_handles_coincide_at_top() {
        let range = PriceRange::new(200, 700);
        assert_eq!(range.top_thumb(), Thumb::Max);

        let range = PriceRange::new(PRICE_DOMAIN_HIGH - 1, PRICE_DOMAIN_HIGH);
        assert_eq!(range.top_thumb(), Thumb::Min);
    }

    #[test]
    fn test_fill_percent_spans_between_bounds() {
        let range = PriceRange::new(2_500, 7_500);
        assert_eq!(range.fill_percent(), (25.0, 75.0));

        let full = PriceRange::full();
        assert_eq!(full.fill_percent(), (0.0, 100.0));
    }

    #[test]
    fn test_new_with_crossed_bounds() {
        let range = PriceRange::new(500, 400);
        assert_eq!((range.min(), range.max()), (399, 400));
        assert_invariant(&range);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = PriceRange::new(100, 200);
        assert!(range.contains(100.0));
        assert!(range.contains(200.0));
        assert!(range.contains(150.5));
        assert!(!range.contains(99.99));
        assert!(!range.contains(200.01));
    }
}
