use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `Rect` of the given size centered within `area`, shrunk to fit
/// if `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [r] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [r] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(r);
    r
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(42, 22), Rect::new(19, 1, 42, 22))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(28, 6), Rect::new(26, 9, 28, 6))]
    #[case(Rect::new(10, 5, 20, 10), Size::new(4, 2), Rect::new(18, 9, 4, 2))]
    #[case(Rect::new(0, 0, 10, 5), Size::new(20, 8), Rect::new(0, 0, 10, 5))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[test]
    fn display_area_in_large_terminal() {
        assert_eq!(
            get_display_area(Rect::new(0, 0, 100, 30)),
            Rect::new(10, 3, 80, 24)
        );
    }
}
