use crate::game::{GameEngine, Outcome, Player, Symbols, COLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn player_color(player: Player) -> Color {
    match player {
        Player::Player1 => Color::Red,
        Player::Player2 => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    game: &GameEngine,
    symbols: &Symbols,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, symbols, chunks[0]);
    render_board(frame, game, symbols, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &GameEngine, symbols: &Symbols, area: Rect) {
    let (status, color) = match (game.next_player(), game.winner()) {
        (Some(player), _) => (
            format!(
                "Current Player: {} ({})",
                player,
                symbols.for_cell(player.to_cell())
            ),
            player_color(player),
        ),
        (None, Outcome::Winner(player)) => {
            (format!("Game Over  |  {player} wins"), player_color(player))
        }
        (None, _) => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game: &GameEngine,
    symbols: &Symbols,
    selected_column: usize,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers, highlighted under the cursor
    let mut col_line = vec![Span::raw(" ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
        col_line.push(Span::raw(" "));
    }
    lines.push(Line::from(col_line));

    for row in game.board().rows() {
        let mut row_spans = vec![Span::raw("|")];
        for &cell in row {
            let style = match cell.owner() {
                Some(player) => Style::default()
                    .fg(player_color(player))
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray),
            };
            row_spans.push(Span::styled(format!(" {} ", symbols.for_cell(cell)), style));
            row_spans.push(Span::raw("|"));
        }
        lines.push(Line::from(row_spans));
    }

    // Selection indicator, only while a move can still be made
    let mut indicator_line = vec![Span::raw(" ")];
    for col in 0..COLS {
        let marker = if col == selected_column && !game.is_game_over() {
            let landing = game.board().landing_row(col);
            let color = if landing.is_some() { Color::Cyan } else { Color::DarkGray };
            Span::styled(" ^ ", Style::default().fg(color))
        } else {
            Span::raw("   ")
        };
        indicator_line.push(marker);
        indicator_line.push(Span::raw(" "));
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter or 1-7: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
