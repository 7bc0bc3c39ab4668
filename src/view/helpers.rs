//! Small rendering helpers shared across widgets.

use ratatui::layout::Rect;
use ratatui::text::Line;

/// A blank line, used as a spacer in paragraphs.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// Format a count with `,` thousands separators (`101300` → `101,300`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Calculate a rect centered in `area` taking the given percentages of its
/// width and height.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(101_300), "101,300");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(70, 80, area);
        assert_eq!(rect, Rect::new(15, 5, 70, 40));
    }

    #[test]
    fn centered_rect_respects_area_offset() {
        let area = Rect::new(10, 4, 20, 10);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect, Rect::new(15, 6, 10, 5));
    }
}
