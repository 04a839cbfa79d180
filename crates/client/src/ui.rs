//! Battle screen layout.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Wrap},
};

use battle_core::{BattleAction, BattleConfig, Side};

use crate::view::{BattleView, HudView, Pose};

pub fn render(frame: &mut Frame, view: &BattleView) {
    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(3),
        Constraint::Length(4),
        Constraint::Length(6),
    ])
    .split(frame.area());

    let enemy_row = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let player_row = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_hud(frame, enemy_row[0], &view.enemy);
    render_field(frame, rows[1], view);
    render_hud(frame, player_row[1], &view.player);
    render_bottom(frame, rows[3], view);
}

fn render_hud(frame: &mut Frame, area: Rect, hud: &HudView) {
    let ratio = hud.ratio();
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::bordered().title(format!("{} Lv{}", hud.name, hud.level)))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}/{}", hud.hp, hud.max_hp));
    frame.render_widget(gauge, area);
}

fn render_field(frame: &mut Frame, area: Rect, view: &BattleView) {
    let lines = vec![
        Line::from(unit_span(view, Side::Enemy)).alignment(Alignment::Right),
        Line::default(),
        Line::from(unit_span(view, Side::Player)).alignment(Alignment::Left),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn unit_span(view: &BattleView, side: Side) -> Span<'static> {
    let name = view.hud(side).name.clone();
    match view.pose(side) {
        Pose::Idle => Span::raw(format!("  {name}  ")),
        Pose::Attacking => Span::styled(
            format!(">> {name}  "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Pose::Hit => Span::styled(
            format!("  {name} *"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Pose::Fainted => Span::styled(
            format!("  {name} (fainted)"),
            Style::default().fg(Color::DarkGray),
        ),
    }
}

fn render_bottom(frame: &mut Frame, area: Rect, view: &BattleView) {
    if view.move_selector {
        render_moves(frame, area, view);
        return;
    }

    let columns = if view.action_selector {
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(area)
    } else {
        Layout::horizontal([Constraint::Percentage(100)]).split(area)
    };

    let dialog = if view.dialog_visible {
        view.dialog.as_str()
    } else {
        ""
    };
    frame.render_widget(
        Paragraph::new(dialog)
            .block(Block::bordered())
            .wrap(Wrap { trim: true }),
        columns[0],
    );

    if view.action_selector {
        let actions: Vec<Line> = (0..BattleAction::COUNT)
            .filter_map(BattleAction::from_index)
            .enumerate()
            .map(|(index, action)| cursor_line(action.to_string(), index == view.action_index))
            .collect();
        frame.render_widget(Paragraph::new(actions).block(Block::bordered()), columns[1]);
    }
}

fn render_moves(frame: &mut Frame, area: Rect, view: &BattleView) {
    let columns =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(area);

    let grid: Vec<Line> = view
        .moves
        .chunks(BattleConfig::MOVE_GRID_COLUMNS)
        .enumerate()
        .map(|(row, slots)| {
            let spans: Vec<Span> = slots
                .iter()
                .enumerate()
                .flat_map(|(column, slot)| {
                    let index = row * BattleConfig::MOVE_GRID_COLUMNS + column;
                    cursor_line(format!("{:<14}", slot.name), index == view.move_index).spans
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(grid).block(Block::bordered()), columns[0]);

    let details = match view.moves.get(view.move_index) {
        Some(slot) => vec![
            Line::from(format!("PP {}/{}", slot.pp, slot.max_pp)),
            Line::from(slot.element.clone()),
        ],
        None => Vec::new(),
    };
    frame.render_widget(Paragraph::new(details).block(Block::bordered()), columns[1]);
}

fn cursor_line(label: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(label, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::raw(label)])
    }
}
