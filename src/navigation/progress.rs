/// Percentage of the scrollable height traversed at `scroll_offset`.
///
/// `scroll_height` is the full document height and `viewport_height` the
/// window's inner height. A page too short to scroll reports 0; the result
/// is clamped to `[0, 100]` so overscroll never leaks into the bar width.
pub fn scroll_progress(
    scroll_offset: f64,
    scroll_height: f64,
    viewport_height: f64,
) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_offset / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_share_of_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 3000.0, 1000.0), 25.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }
}
