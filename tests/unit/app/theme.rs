use super::*;

#[test]
fn parse_color_accepts_hex_rgb_and_names() {
    assert_eq!(parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Color::Rgb(1, 2, 3)));
    assert_eq!(parse_color(" Cyan "), Some(Color::Indexed(6)));
    assert_eq!(parse_color("transparent"), Some(Color::Reset));
}

#[test]
fn parse_color_rejects_garbage() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
    assert_eq!(parse_color("rgb(1, 2)"), None);
    assert_eq!(parse_color("rgb(1, 2, 300)"), None);
    assert_eq!(parse_color("chartreuse-ish"), None);
}

#[test]
fn stylesheet_rules_apply_in_order() {
    let sheet = Stylesheet::parse(
        "#textview { color: white; background: #101010; }\n\
         textview { color: yellow; font-style: italic; }\n\
         unknown { color: red; }",
    )
    .unwrap();

    let mut theme = UiTheme::default();
    theme.apply_stylesheet(&sheet);

    assert_eq!(theme.text_view.fg, Some(Color::Indexed(3)));
    assert_eq!(theme.text_view.bg, Some(Color::Rgb(0x10, 0x10, 0x10)));
    assert_eq!(theme.text_view.italic, Some(true));
}

#[test]
fn invalid_values_keep_previous_style() {
    let sheet = Stylesheet::parse("statusbar { color: nope; font-weight: heavy; }").unwrap();
    let mut theme = UiTheme::default();
    let before = theme.statusbar;
    theme.apply_stylesheet(&sheet);
    assert_eq!(theme.statusbar, before);
}

#[test]
fn element_style_inherits_window_colors() {
    let sheet = Stylesheet::parse("window { background-color: navy; } terminal { color: lime; }")
        .unwrap();
    let mut theme = UiTheme::default();
    theme.apply_stylesheet(&sheet);

    let style = theme.style(ThemeElement::Terminal);
    assert_eq!(style.bg, Some(Color::Indexed(4)));
    assert_eq!(style.fg, Some(Color::Indexed(10)));
}

#[test]
fn font_weight_normal_clears_bold() {
    let sheet = Stylesheet::parse("button.active { font-weight: normal; }").unwrap();
    let mut theme = UiTheme::default();
    theme.apply_stylesheet(&sheet);

    let style = theme.style(ThemeElement::ButtonActive);
    assert!(!style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn ansi16_fallback_maps_rgb_to_nearest_basic_color() {
    let mut theme = UiTheme::default();
    theme.text_view.fg = Some(Color::Rgb(250, 5, 5));
    theme.text_view.bg = Some(Color::Indexed(196));
    theme.apply_color_support(TerminalColorSupport::Ansi16);

    assert_eq!(theme.text_view.fg, Some(Color::Indexed(9)));
    assert_eq!(theme.text_view.bg, Some(Color::Indexed(9)));
}

#[test]
fn ansi256_fallback_keeps_indexed_colors() {
    let mut theme = UiTheme::default();
    theme.terminal.fg = Some(Color::Rgb(0, 0, 0));
    theme.apply_color_support(TerminalColorSupport::Ansi256);

    assert_eq!(theme.terminal.fg, Some(Color::Indexed(0)));
    assert_eq!(theme.focus_border, Color::Indexed(6));
}
