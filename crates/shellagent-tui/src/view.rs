//! Frame layout and panel renderers

use chrono::{DateTime, Utc};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use shellagent_core::DashboardSnapshot;
use shellagent_types::{LogEntry, LogKind, TokenRow, SHELLAGENT_VERSION};

const ACCENT: Color = Color::Green;
const DIM: Color = Color::DarkGray;

pub const NETWORK_LABEL: &str = "Solana Mainnet";
pub const WALLET_STATUS: &str = "Ready";

const ROADMAP: [(&str, &str); 3] = [
    (
        "Phase 01: Observation",
        "Neural training on Solana transaction history. Pattern recognition optimization and liquidity mapping.",
    ),
    (
        "Phase 02: Simulation",
        "Paper trading with real-time data. Sentiment analysis integration and whale cluster identification.",
    ),
    (
        "Phase 03: Autonomy",
        "Live execution on Solana DEXs. Fully autonomous capital management and cross-chain expansion.",
    ),
];

const WELCOME_TEXT: [&str; 3] = [
    "Shellagent is an autonomous AI intelligence protocol designed to scan, analyze, and learn from the Solana meme coin ecosystem in real-time.",
    "What's special: It utilizes advanced neural networks to detect liquidity anomalies, whale movements, and social sentiment before they hit the mainstream.",
    "What it gives you: Unparalleled market insights, automated risk assessment, and a glimpse into the future of autonomous capital management.",
];

pub fn draw_ui(
    frame: &mut Frame<'_>,
    snapshot: &DashboardSnapshot,
    now: DateTime<Utc>,
    status_line: &str,
) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " SHELLAGENT ",
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " Autonomous Intelligence Unit | v{} | network={}",
            SHELLAGENT_VERSION, NETWORK_LABEL
        )),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, vertical[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(vertical[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(body[0]);

    render_identity(frame, left[0], snapshot, now);
    render_wallet(frame, left[1], snapshot);
    render_market(frame, body[1], &snapshot.tokens);
    render_system_log(frame, body[2], &snapshot.logs);
    render_roadmap(frame, vertical[2]);
    render_footer(frame, vertical[3], snapshot, status_line);

    if snapshot.show_welcome {
        render_welcome(frame, centered_rect(70, 60, frame.area()));
    }
}

fn render_identity(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &DashboardSnapshot,
    now: DateTime<Utc>,
) {
    let badge_style = if snapshot.autonomous {
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Status   ", Style::default().fg(DIM)),
            Span::styled(snapshot.status_label(), badge_style),
        ]),
        Line::from(vec![
            Span::styled("Uptime   ", Style::default().fg(DIM)),
            Span::raw(snapshot.uptime(now)),
        ]),
        Line::from(vec![
            Span::styled("Network  ", Style::default().fg(DIM)),
            Span::raw(NETWORK_LABEL),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            format!("[A] {}", autonomy_button_label(snapshot.autonomous)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Identity")),
        area,
    );
}

fn render_wallet(frame: &mut Frame<'_>, area: Rect, snapshot: &DashboardSnapshot) {
    let mut lines = match &snapshot.wallet {
        Some(address) => vec![
            Line::styled("Connected Address", Style::default().fg(DIM)),
            Line::styled(address.short(), Style::default().fg(ACCENT)),
        ],
        None => vec![Line::styled(
            "[C] Connect Phantom",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )],
    };
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Daily PnL ", Style::default().fg(DIM)),
        Span::styled("+0.00%", Style::default().fg(ACCENT)),
        Span::styled("  Status ", Style::default().fg(DIM)),
        Span::raw(WALLET_STATUS),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Phantom Wallet")),
        area,
    );
}

fn render_market(frame: &mut Frame<'_>, area: Rect, tokens: &[TokenRow]) {
    let header = Row::new(["#", "Token", "Ticker", "Price", "Volume", "MCAP"])
        .style(Style::default().fg(DIM).add_modifier(Modifier::BOLD));

    let rows: Vec<Row<'_>> = tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            Row::new(vec![
                Cell::from((idx + 1).to_string()).style(Style::default().fg(DIM)),
                Cell::from(token.name.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(token.ticker.clone()).style(Style::default().fg(DIM)),
                Cell::from(token.display_price()),
                Cell::from(format!("${}", token.volume)),
                Cell::from(format!("${}", token.mcap)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(ACCENT))
        .block(Block::default().borders(Borders::ALL).title("Market Scanner"));
    frame.render_widget(table, area);
}

fn render_system_log(frame: &mut Frame<'_>, area: Rect, logs: &[LogEntry]) {
    let rows = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem<'_>> = visible_logs(logs, rows)
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", entry.clock()), Style::default().fg(DIM)),
                Span::styled(entry.message.clone(), log_style(entry.kind)),
            ]))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("System Log")),
        area,
    );
}

fn render_roadmap(frame: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (idx, (title, body)) in ROADMAP.iter().enumerate() {
        let active = idx == 0;
        let mut heading = vec![Span::styled(
            *title,
            if active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DIM)
            },
        )];
        if active {
            heading.push(Span::raw(" "));
            heading.push(Span::styled(" ACTIVE ", Style::default().fg(Color::Black).bg(ACCENT)));
        }

        let paragraph = Paragraph::new(vec![
            Line::from(heading),
            Line::styled(*body, Style::default().fg(DIM)),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title(if active { "Protocol Roadmap" } else { "" }),
        );
        frame.render_widget(paragraph, columns[idx]);
    }
}

fn render_footer(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &DashboardSnapshot,
    status_line: &str,
) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "Shellagent © 2026",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" | v{}-stable", SHELLAGENT_VERSION), Style::default().fg(DIM)),
        Span::raw(format!(
            " | A auto | S scan [{}] | C connect | Q quit   {}",
            if snapshot.scanning { "on" } else { "off" },
            status_line
        )),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Autonomous Intelligence Protocol"));
    frame.render_widget(footer, area);
}

fn render_welcome(frame: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::styled(
            "WELCOME TO SHELLAGENT",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    for paragraph in WELCOME_TEXT {
        lines.push(Line::raw(paragraph));
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "[ Enter Protocol ]",
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            ),
        area,
    );
}

pub fn autonomy_button_label(autonomous: bool) -> &'static str {
    if autonomous {
        "Deactivate Auto"
    } else {
        "Activate Auto"
    }
}

pub fn log_style(kind: LogKind) -> Style {
    match kind {
        LogKind::Success => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        LogKind::Error => Style::default().fg(Color::Red),
        LogKind::Warning => Style::default().fg(Color::Yellow),
        LogKind::Scan => Style::default().fg(DIM),
        LogKind::Info => Style::default().fg(ACCENT),
    }
}

/// Newest `rows` entries, so the panel always shows the tail.
pub fn visible_logs(logs: &[LogEntry], rows: usize) -> &[LogEntry] {
    &logs[logs.len().saturating_sub(rows)..]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
