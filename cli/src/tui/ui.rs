use paytick_core::{format_elapsed, PayRecord};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{App, InputMode};

const PATH_PROMPT: &str = "> ";

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("PAYTICK · what you earn, second by second")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(rounded_block(""));
    f.render_widget(header, main_chunks[0]);

    let input_height = match app.input_mode {
        InputMode::Uploading => 3,
        InputMode::Normal => 0,
    };

    match app.timer.pay_record() {
        None => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(6),
                    Constraint::Length(input_height),
                    Constraint::Min(0),
                ])
                .split(main_chunks[1]);
            draw_upload_card(f, app, chunks[0]);
            draw_path_input(f, app, chunks[1]);
            draw_info(f, chunks[2]);
        }
        Some(record) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(7),
                    Constraint::Length(7),
                    Constraint::Length(input_height),
                    Constraint::Min(0),
                ])
                .split(main_chunks[1]);
            draw_payslip_card(f, app, record, chunks[0]);
            draw_timer_card(f, app, chunks[1]);
            draw_path_input(f, app, chunks[2]);
            draw_info(f, chunks[3]);
        }
    }

    let help = match (&app.input_mode, app.timer.pay_record()) {
        (InputMode::Uploading, _) => "enter: load | esc: cancel",
        (InputMode::Normal, None) => "u: upload | drop a file on the window | q: quit",
        (InputMode::Normal, Some(_)) => "space: start/pause | r: reset | n: new payslip | u: upload | q: quit",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);

    if let Some(notice) = &app.notice {
        draw_notice(f, notice, size);
    }
}

fn rounded_block(title: &str) -> Block<'_> {
    Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded)
}

fn draw_upload_card(f: &mut Frame, app: &App, area: Rect) {
    let accepted = app.accepted_types();
    let text = vec![
        Line::from(Span::styled("Drop your payslip here", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("or press u to type its path"),
        Line::from(Span::styled(format!("accepted: {}", accepted), Style::default().fg(Color::DarkGray))),
    ];
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(rounded_block(" Upload payslip "));
    f.render_widget(card, area);
}

fn draw_path_input(f: &mut Frame, app: &App, area: Rect) {
    if !matches!(app.input_mode, InputMode::Uploading) || area.height < 3 {
        return;
    }
    let input = Paragraph::new(format!("{}{}", PATH_PROMPT, app.input))
        .style(Style::default().fg(Color::Yellow))
        .block(rounded_block(" Path "));
    f.render_widget(input, area);

    let before_cursor: String = app.input.chars().take(app.cursor_position).collect();
    let offset = (PATH_PROMPT.width() + before_cursor.width()) as u16;
    let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
    f.set_cursor_position((x, area.y + 1));
}

fn draw_payslip_card(f: &mut Frame, app: &App, record: &PayRecord, area: Rect) {
    let label = Style::default().fg(Color::Blue);
    let currency = &app.currency;
    let text = vec![
        Line::from(vec![
            Span::styled("Gross salary:  ", label),
            Span::raw(currency.format(record.gross_monthly)),
        ]),
        Line::from(vec![
            Span::styled("Net salary:    ", label),
            Span::raw(currency.format(record.net_monthly)),
        ]),
        Line::from(vec![
            Span::styled("Working hours: ", label),
            Span::raw(format!("{}h", record.working_hours)),
        ]),
        Line::from(vec![
            Span::styled("Per second:    ", label),
            Span::styled(
                currency.format(app.timer.rate_per_second()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Loaded:        ", Style::default().fg(Color::DarkGray)),
            Span::raw(record.loaded_at.format("%Y-%m-%d %H:%M").to_string()),
        ]),
    ];

    let max_title = area.width.saturating_sub(4) as usize;
    let title = format!(" {} ", fit_width(&record.source_name, max_title.saturating_sub(2)));
    let card = Paragraph::new(text).block(rounded_block(&title));
    f.render_widget(card, area);
}

fn draw_timer_card(f: &mut Frame, app: &App, area: Rect) {
    let timer = &app.timer;
    let (status, status_style) = if timer.is_running() {
        ("▶ running", Style::default().fg(Color::Green))
    } else {
        ("⏸ paused", Style::default().fg(Color::Yellow))
    };

    let text = vec![
        Line::from(Span::styled("Current earnings", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            app.currency.format(timer.accumulated_earnings()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Time: {}", format_elapsed(timer.elapsed_seconds()))),
        Line::from(""),
        Line::from(Span::styled(status, status_style)),
    ];
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(rounded_block(" Timer "));
    f.render_widget(card, area);
}

fn draw_info(f: &mut Frame, area: Rect) {
    if area.height < 3 {
        return;
    }
    let info = Paragraph::new(
        "How it works: load your payslip PDF and paytick works out what you earn every second \
         from your net salary and the hours you work.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true })
    .block(rounded_block(" Info "));
    f.render_widget(info, area);
}

fn draw_notice(f: &mut Frame, notice: &str, size: Rect) {
    let area = centered_rect(60, 7, size);
    let text = vec![
        Line::from(notice),
        Line::from(""),
        Line::from(Span::styled("press any key", Style::default().fg(Color::DarkGray))),
    ];
    let popup = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(rounded_block(" Notice ").border_style(Style::default().fg(Color::Red)));
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (u32::from(r.width) * u32::from(percent_x) / 100) as u16;
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Cuts `text` to at most `max` terminal columns, marking the cut with `…`.
fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use paytick_core::Settings;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_upload_view() {
        let app = App::new(&Settings::default());
        let screen = render(&app);
        assert!(screen.contains("Upload payslip"));
        assert!(screen.contains("accepted: application/pdf"));
        assert!(!screen.contains("Current earnings"));
    }

    #[test]
    fn test_running_view() {
        let mut app = App::new(&Settings::default());
        app.timer.load_pay_record(PayRecord::new(2500.0, 1850.0, 160.0, "payslip.pdf".to_string()));
        let now = Instant::now();
        app.toggle_running(now);
        app.on_tick(now + Duration::from_secs(10));

        let screen = render(&app);
        assert!(screen.contains("payslip.pdf"));
        assert!(screen.contains("2.500,0000 €"));
        assert!(screen.contains("1.850,0000 €"));
        assert!(screen.contains("160h"));
        assert!(screen.contains("0,0032 €"));
        assert!(screen.contains("0,0321 €"));
        assert!(screen.contains("Time: 00:00:10"));
        assert!(screen.contains("running"));
    }

    #[test]
    fn test_notice_popup() {
        let mut app = App::new(&Settings::default());
        app.notice = Some("'scan.png' is not a supported payslip document".to_string());
        let screen = render(&app);
        assert!(screen.contains("Notice"));
        assert!(screen.contains("scan.png"));

        app.handle_key(KeyCode::Enter, Instant::now());
        assert!(!render(&app).contains("Notice"));
    }

    #[test]
    fn test_centered_rect_on_wide_terminal() {
        let wide = Rect::new(0, 0, 2000, 50);
        let popup = centered_rect(60, 7, wide);
        assert_eq!(popup, Rect::new(400, 21, 1200, 7));

        let tiny = Rect::new(0, 0, 10, 3);
        assert_eq!(centered_rect(60, 7, tiny), Rect::new(2, 0, 6, 3));
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("payslip.pdf", 20), "payslip.pdf");
        assert_eq!(fit_width("payslip.pdf", 8), "payslip…");
        assert_eq!(fit_width("給与明細.pdf", 5), "給与…");
        assert_eq!(fit_width("abc", 0), "");
    }
}
