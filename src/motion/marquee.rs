/// The source items followed by themselves, so the strip can wrap seamlessly.
pub fn doubled<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

/// Horizontal box of one item in the strip. Laid out `border-box`, so
/// padding and border sit inside `width_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBox {
    pub width_px: f64,
    pub margin_x_px: f64,
    pub padding_px: f64,
    pub border_px: f64,
}

impl ItemBox {
    /// Distance from the start of one item to the start of the next.
    pub fn span_px(&self) -> f64 {
        self.width_px + 2.0 * self.margin_x_px
    }

    /// Declarations for the item rule. The only place item geometry is set.
    pub fn css(&self) -> String {
        format!(
            "flex-shrink: 0; box-sizing: border-box; width: {}px; margin: 0 {}px; padding: {}px; border-width: {}px; border-style: solid;",
            self.width_px, self.margin_x_px, self.padding_px, self.border_px
        )
    }
}

/// A continuously scrolling strip. One `track_width_px` is the width of a
/// single copy of the items; after scrolling that far the offset wraps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub track_width_px: f64,
    pub speed_px_per_s: f64,
}

impl Marquee {
    pub fn new(track_width_px: f64, speed_px_per_s: f64) -> Self {
        Self {
            track_width_px,
            speed_px_per_s,
        }
    }

    /// A strip of `count` items laid out as `item`.
    pub fn of_items(item: ItemBox, count: usize, speed_px_per_s: f64) -> Self {
        Self::new(item.span_px() * count as f64, speed_px_per_s)
    }

    /// Time for one full loop, in seconds.
    pub fn period_s(&self) -> f64 {
        if self.speed_px_per_s <= 0.0 {
            return f64::INFINITY;
        }
        self.track_width_px / self.speed_px_per_s
    }

    /// Leftward offset in `[0, track_width_px)` after `elapsed_ms`.
    pub fn offset_at(&self, elapsed_ms: f64) -> f64 {
        if self.track_width_px <= 0.0 || self.speed_px_per_s <= 0.0 {
            return 0.0;
        }
        let travelled = self.speed_px_per_s * elapsed_ms.max(0.0) / 1000.0;
        travelled.rem_euclid(self.track_width_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_preserves_order() {
        let items = vec!["a", "b", "c"];
        assert_eq!(doubled(&items), vec!["a", "b", "c", "a", "b", "c"]);
        assert!(doubled::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_offset_grows_then_wraps() {
        let marquee = Marquee::new(1000.0, 50.0);
        assert_eq!(marquee.period_s(), 20.0);
        assert_eq!(marquee.offset_at(0.0), 0.0);
        assert_eq!(marquee.offset_at(10_000.0), 500.0);
        assert!(marquee.offset_at(19_999.0) > marquee.offset_at(19_000.0));
        assert!(marquee.offset_at(20_500.0) < 100.0);
        assert!(marquee.offset_at(123_456.0) < 1000.0);
    }

    const CARD: ItemBox = ItemBox {
        width_px: 450.0,
        margin_x_px: 16.0,
        padding_px: 32.0,
        border_px: 1.0,
    };

    // What a browser lays out for the declarations `css()` emits.
    fn laid_out_span(css: &str, item: ItemBox) -> f64 {
        let content_box = if css.contains("box-sizing: border-box") {
            item.width_px
        } else {
            item.width_px + 2.0 * (item.padding_px + item.border_px)
        };
        content_box + 2.0 * item.margin_x_px
    }

    #[test]
    fn test_wrap_distance_matches_laid_out_copy() {
        let marquee = Marquee::of_items(CARD, 6, 60.0);
        let one_copy = laid_out_span(&CARD.css(), CARD) * 6.0;
        assert_eq!(marquee.track_width_px, one_copy);
        assert_eq!(marquee.track_width_px, 2892.0);
    }

    #[test]
    fn test_item_css_carries_its_geometry() {
        let css = CARD.css();
        assert!(css.contains("box-sizing: border-box;"));
        assert!(css.contains("width: 450px;"));
        assert!(css.contains("margin: 0 16px;"));
        assert!(css.contains("padding: 32px;"));
        assert!(css.contains("border-width: 1px;"));
    }

    #[test]
    fn test_stalled_marquee_stays_put() {
        let marquee = Marquee::new(1000.0, 0.0);
        assert_eq!(marquee.offset_at(5000.0), 0.0);
        assert!(marquee.period_s().is_infinite());
    }
}
