use log::Level;

use crate::motion::marquee::ItemBox;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long a statistic takes to count up.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Visible fraction of a card or heading needed before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// Delay between consecutive items of a grid or list.
pub const STAGGER_STEP_MS: u32 = 100;

/// Wait after mount before hero elements start their entrance, so the
/// hidden pose gets painted first.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 20;

/// Scroll distance after which the navbar switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 40.0;

pub const TESTIMONIAL_CARD: ItemBox = ItemBox {
    width_px: 450.0,
    margin_x_px: 16.0,
    padding_px: 32.0,
    border_px: 1.0,
};
pub const MARQUEE_SPEED_PX_PER_S: f64 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_card_padding_sits_inside_its_width() {
        let css = TESTIMONIAL_CARD.css();
        assert!(css.contains("box-sizing: border-box;"));
        // 450 wide plus 16 on each side, padding and border included.
        assert_eq!(TESTIMONIAL_CARD.span_px(), 482.0);
        assert_eq!(TESTIMONIAL_CARD.span_px() * 6.0, 2892.0);
    }
}
