use ratatui::style::{Color, Modifier, Style};

pub const HEADER_BG: Color = Color::Rgb(0, 95, 135);
pub const TITLE_BG: Color = Color::Rgb(40, 40, 50);
pub const ALT_ROW_BG: Color = Color::Rgb(25, 25, 35);
pub const SELECTED_BG: Color = Color::Rgb(60, 60, 80);

pub fn title_bar() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(TITLE_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn search_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn row(selected: bool, alternate: bool) -> Style {
    let bg = if selected {
        SELECTED_BG
    } else if alternate {
        ALT_ROW_BG
    } else {
        Color::Reset
    };

    let style = Style::default().fg(Color::White).bg(bg);
    if selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn status_bar() -> Style {
    Style::default().fg(Color::White).bg(HEADER_BG)
}
