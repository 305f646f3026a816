//! UI theme: every styled element in one place, filled from the stylesheet.

use super::stylesheet::Stylesheet;
use ratatui::style::{Color, Modifier, Style};

/// Style of one element as set by the stylesheet; `None` inherits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
}

impl ElementStyle {
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: None,
            italic: None,
            underline: None,
        }
    }

    pub fn to_style(self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        for (flag, modifier) in [
            (self.bold, Modifier::BOLD),
            (self.italic, Modifier::ITALIC),
            (self.underline, Modifier::UNDERLINED),
        ] {
            match flag {
                Some(true) => style = style.add_modifier(modifier),
                Some(false) => style = style.remove_modifier(modifier),
                None => {}
            }
        }
        style
    }

    fn map_colors(&mut self, support: TerminalColorSupport) {
        self.fg = self.fg.map(|c| map_color_for_support(c, support));
        self.bg = self.bg.map(|c| map_color_for_support(c, support));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeElement {
    Window,
    Toolbar,
    Button,
    ButtonActive,
    TextView,
    Terminal,
    Separator,
    StatusBar,
    Dialog,
}

impl ThemeElement {
    pub fn from_selector(selector: &str) -> Option<Self> {
        let element = match selector.trim().to_ascii_lowercase().as_str() {
            "window" | "*" => ThemeElement::Window,
            "toolbar" => ThemeElement::Toolbar,
            "button" | "toolbar button" => ThemeElement::Button,
            "button.active" | "button:checked" | "toolbar button.active" => {
                ThemeElement::ButtonActive
            }
            "#textview" | "textview" | "textview#textview" => ThemeElement::TextView,
            "terminal" | "vte-terminal" => ThemeElement::Terminal,
            "separator" | "paned separator" => ThemeElement::Separator,
            "statusbar" => ThemeElement::StatusBar,
            "dialog" | "messagedialog" => ThemeElement::Dialog,
            _ => return None,
        };
        Some(element)
    }
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub window: ElementStyle,
    pub toolbar: ElementStyle,
    pub button: ElementStyle,
    pub button_active: ElementStyle,
    pub text_view: ElementStyle,
    pub terminal: ElementStyle,
    pub separator: ElementStyle,
    pub statusbar: ElementStyle,
    pub dialog: ElementStyle,
    pub focus_border: Color,
    pub warning_fg: Color,
    pub error_fg: Color,
    pub muted_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            window: ElementStyle::default(),
            toolbar: ElementStyle {
                bg: Some(Color::Indexed(8)),
                ..ElementStyle::default()
            },
            button: ElementStyle::fg(Color::Indexed(15)),
            button_active: ElementStyle {
                fg: Some(Color::Indexed(0)),
                bg: Some(Color::Indexed(6)),
                bold: Some(true),
                ..ElementStyle::default()
            },
            text_view: ElementStyle::default(),
            terminal: ElementStyle::default(),
            separator: ElementStyle::fg(Color::Indexed(8)),
            statusbar: ElementStyle::fg(Color::Indexed(7)),
            dialog: ElementStyle::fg(Color::Indexed(15)),
            focus_border: Color::Indexed(6),
            warning_fg: Color::Indexed(3),
            error_fg: Color::Indexed(1),
            muted_fg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn element(&self, element: ThemeElement) -> ElementStyle {
        match element {
            ThemeElement::Window => self.window,
            ThemeElement::Toolbar => self.toolbar,
            ThemeElement::Button => self.button,
            ThemeElement::ButtonActive => self.button_active,
            ThemeElement::TextView => self.text_view,
            ThemeElement::Terminal => self.terminal,
            ThemeElement::Separator => self.separator,
            ThemeElement::StatusBar => self.statusbar,
            ThemeElement::Dialog => self.dialog,
        }
    }

    fn element_mut(&mut self, element: ThemeElement) -> &mut ElementStyle {
        match element {
            ThemeElement::Window => &mut self.window,
            ThemeElement::Toolbar => &mut self.toolbar,
            ThemeElement::Button => &mut self.button,
            ThemeElement::ButtonActive => &mut self.button_active,
            ThemeElement::TextView => &mut self.text_view,
            ThemeElement::Terminal => &mut self.terminal,
            ThemeElement::Separator => &mut self.separator,
            ThemeElement::StatusBar => &mut self.statusbar,
            ThemeElement::Dialog => &mut self.dialog,
        }
    }

    /// Window style patched with the element's own style.
    pub fn style(&self, element: ThemeElement) -> Style {
        let base = self.window.to_style();
        match element {
            ThemeElement::Window => base,
            ThemeElement::ButtonActive => base
                .patch(self.button.to_style())
                .patch(self.button_active.to_style()),
            ThemeElement::Button => base
                .patch(self.toolbar.to_style())
                .patch(self.button.to_style()),
            other => base.patch(self.element(other).to_style()),
        }
    }

    /// Apply rules in order; later rules win. Unknown selectors, properties
    /// and values are skipped.
    pub fn apply_stylesheet(&mut self, sheet: &Stylesheet) {
        for rule in &sheet.rules {
            for selector in &rule.selectors {
                let Some(element) = ThemeElement::from_selector(selector) else {
                    tracing::debug!(selector = selector.as_str(), "unsupported selector");
                    continue;
                };
                let target = self.element_mut(element);
                for decl in &rule.declarations {
                    if !apply_declaration(target, &decl.property, &decl.value) {
                        tracing::debug!(
                            property = decl.property.as_str(),
                            value = decl.value.as_str(),
                            "unsupported declaration"
                        );
                    }
                }
            }
        }
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for element in [
            &mut self.window,
            &mut self.toolbar,
            &mut self.button,
            &mut self.button_active,
            &mut self.text_view,
            &mut self.terminal,
            &mut self.separator,
            &mut self.statusbar,
            &mut self.dialog,
        ] {
            element.map_colors(support);
        }
        self.focus_border = map_color_for_support(self.focus_border, support);
        self.warning_fg = map_color_for_support(self.warning_fg, support);
        self.error_fg = map_color_for_support(self.error_fg, support);
        self.muted_fg = map_color_for_support(self.muted_fg, support);
    }
}

fn apply_declaration(target: &mut ElementStyle, property: &str, value: &str) -> bool {
    let value_lc = value.trim().to_ascii_lowercase();
    match property {
        "color" => match parse_color(value) {
            Some(c) => target.fg = Some(c),
            None => return false,
        },
        "background-color" | "background" => match parse_color(value) {
            Some(c) => target.bg = Some(c),
            None => return false,
        },
        "font-weight" => match value_lc.as_str() {
            "bold" | "bolder" | "700" | "800" | "900" => target.bold = Some(true),
            "normal" | "lighter" | "400" => target.bold = Some(false),
            _ => return false,
        },
        "font-style" => match value_lc.as_str() {
            "italic" | "oblique" => target.italic = Some(true),
            "normal" => target.italic = Some(false),
            _ => return false,
        },
        "text-decoration" | "text-decoration-line" => match value_lc.as_str() {
            "underline" => target.underline = Some(true),
            "none" => target.underline = Some(false),
            _ => return false,
        },
        _ => return false,
    }
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("JOTPAD_COLOR_SUPPORT") {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || term.contains("truecolor")
        || term.contains("direct")
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)`, CSS/ANSI color names.
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        return parse_hex(hex);
    }

    let v = v.to_ascii_lowercase();
    if let Some(args) = v.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let mut parts = args.split(',').map(|p| p.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.as_str() {
        "reset" | "inherit" | "initial" | "transparent" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" | "maroon" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" | "olive" => Color::Indexed(3),
        "blue" | "navy" => Color::Indexed(4),
        "magenta" | "purple" => Color::Indexed(5),
        "cyan" | "teal" => Color::Indexed(6),
        "gray" | "grey" | "silver" => Color::Indexed(7),
        "dark_gray" | "darkgray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" | "lime" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" | "fuchsia" => Color::Indexed(13),
        "light_cyan" | "aqua" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for index in 0u16..=255u16 {
        let index_u8 = index as u8;
        let (pr, pg, pb) = ansi256_index_to_rgb(index_u8);
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index_u8;
        }
    }

    best_index
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for (index, (pr, pg, pb)) in ANSI16_RGB.iter().copied().enumerate() {
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }

    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = i32::from(r1) - i32::from(r2);
    let dg = i32::from(g1) - i32::from(g2);
    let db = i32::from(b1) - i32::from(b2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
