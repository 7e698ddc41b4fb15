use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(frame, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);
    draw_table(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Show cursor in search bar when focused
    if app.search.focused {
        // Account for border (1) + space (1) + search icon " \u{1F50D} " (approx 4 display cols)
        let cursor_x = chunks[1].x + 1 + 4 + app.search.cursor_column() as u16;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title = format!(" Search Cities (citysift v{})", crate::VERSION);
    frame.render_widget(Paragraph::new(title).style(colors::title_bar()), area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors::search_border(app.search.focused))
        .title(" Search ");

    let search_text = format!(" \u{1F50D} {}", app.search.query);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    // Visible rows: area height minus borders minus header
    let table_inner_height = area.height.saturating_sub(3) as usize;
    app.table.visible_rows = table_inner_height;

    let header = Row::new([Cell::from(" City").style(colors::table_header())]).height(1);

    // Build visible rows only
    let start = app.table.scroll_offset;
    let end = (start + table_inner_height).min(app.model.row_count());

    let rows: Vec<Row> = (start..end)
        .map(|row_idx| {
            let name = app.model.row_content(row_idx).unwrap_or_default();
            let is_selected = app.table.selected == Some(row_idx);
            let alternate = (row_idx - start) % 2 == 1;
            Row::new([
                Cell::from(format!(" {}", name)).style(colors::row(is_selected, alternate))
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Cities ");

    let table = Table::new(rows, [Constraint::Fill(1)])
        .header(header)
        .block(block);

    frame.render_widget(table, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = format!(" {}", app.status_message);
    let right_text = " Tab:Focus  Enter:Search  \u{2191}\u{2193}:Select  Esc:Clear/Quit  Ctrl+Q:Quit ";

    // Left-aligned text + padding + right-aligned hints
    let available_width = area.width as usize;
    let left_len = left_text.len();
    let right_len = right_text.len();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show the counts
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str).style(colors::status_bar());

    frame.render_widget(status, area);
}
