//! Tests for the help overlay.

use super::*;
use crate::view::buffer_to_string;
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn styles() -> ListStyles {
    ListStyles::with_color_config(ColorConfig::new(false))
}

fn render(locale: Locale, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_help_overlay(frame, locale, &styles()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn plain_text(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

#[test]
fn content_lists_every_category() {
    let text = plain_text(&build_help_content(Locale::En, &styles()));
    for category in ["Navigation", "Search & Filters", "Sorting", "Application"] {
        assert!(
            text.iter().any(|line| line == category),
            "missing category {}",
            category
        );
    }
}

#[test]
fn content_pairs_keys_with_descriptions() {
    let text = plain_text(&build_help_content(Locale::En, &styles()));
    assert!(text.iter().any(|l| l.starts_with("  o ") && l.ends_with("Toggle ascending / descending")));
    assert!(text.iter().any(|l| l.starts_with("  t ") && l.ends_with("Switch display language")));
}

#[test]
fn content_has_one_line_per_shortcut() {
    let shortcuts: usize = SECTIONS.iter().map(|(_, rows)| rows.len()).sum();
    let headers = SECTIONS.len();
    let spacers = SECTIONS.len() - 1;
    let lines = build_help_content(Locale::En, &styles());
    assert_eq!(lines.len(), shortcuts + headers + spacers);
}

#[test]
fn every_label_key_is_translated() {
    for (category, rows) in SECTIONS {
        for locale in Locale::all() {
            assert_ne!(t(*locale, category), *category);
            for (_, description) in rows.iter() {
                assert_ne!(t(*locale, description), *description, "untranslated {}", description);
            }
        }
    }
}

#[test]
fn overlay_renders_title_and_close_hint() {
    let out = render(Locale::En, 100, 40);
    assert!(out.contains("Keyboard Shortcuts"), "got:\n{}", out);
    assert!(out.contains("Press Esc or ? to close"));
    assert!(out.contains("Next language"));
}

#[test]
fn overlay_follows_locale() {
    let out = render(Locale::Zh, 100, 40);
    assert!(out.contains("快"), "got:\n{}", out);
    assert!(!out.contains("Keyboard Shortcuts"));
}

#[test]
fn overlay_survives_tiny_terminal() {
    let _ = render(Locale::En, 10, 4);
}
