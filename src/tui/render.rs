//! Stateless drawing of each screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use pajamagrams::{Point, PuzzleState, Screen, Tile};

use super::app::App;
use super::layout::{
    ProgressLayout, PuzzleLayout, Viewport, DESIGN_HEIGHT, DESIGN_WIDTH, TILE_HEIGHT, TILE_WIDTH,
};
use super::theme;

pub fn draw(frame: &mut Frame, app: &App) {
    match app.store.screen() {
        Screen::Landing => draw_landing(frame),
        Screen::ProgressMap => draw_progress(frame, app),
        Screen::Puzzle => draw_puzzle(frame, app),
        Screen::Finale => draw_finale(frame, app),
    }
}

fn fill(frame: &mut Frame, area: Rect, color: Color) {
    frame.render_widget(Block::new().style(Style::new().bg(color)), area);
}

fn centered_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let area = area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines).style(style).alignment(Alignment::Center), area);
}

// === Landing ===

fn draw_landing(frame: &mut Frame) {
    let area = frame.area();
    fill(frame, area, theme::BG_LANDING);

    let viewport = Viewport::new(area);
    let width = 21.min(area.width);
    let badge = Rect::new(
        area.x + (area.width - width) / 2,
        viewport.row_at(420.0),
        width,
        3,
    )
    .intersection(area);
    if !badge.is_empty() {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme::TEXT_SECONDARY))
            .style(Style::new().bg(theme::TEXT_SECONDARY));
        frame.render_widget(
            Paragraph::new("PAJAMAGRAMS")
                .style(Style::new().fg(theme::YELLOW).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block),
            badge,
        );
    }

    let hint_row = viewport.row_at(DESIGN_HEIGHT - 80.0).min(area.bottom().saturating_sub(1));
    centered_text(
        frame,
        Rect::new(area.x, hint_row, area.width, 1),
        "Click or press any key to start",
        Style::new().fg(theme::TEXT_SECONDARY),
    );
}

// === Progress map ===

fn draw_progress(frame: &mut Frame, app: &App) {
    let area = frame.area();
    fill(frame, area, theme::BG_PUZZLE);

    let store = &app.store;
    let layout = app.progress_layout();
    let title = format!("Unpeel all {} bananas", store.puzzle_count());
    centered_text(
        frame,
        layout.title,
        &title,
        Style::new().fg(theme::TEXT_DARK).add_modifier(Modifier::BOLD),
    );

    let completed = store.completed_puzzles();
    for (index, rect) in layout.items.iter().enumerate() {
        let fading = store.just_completed() && index + 1 == completed;
        let (label, fg, border) = if fading {
            (format!("unwrapping {}", index + 1), theme::TEXT_DARK, theme::YELLOW)
        } else if index < completed {
            (format!("gift {}", index + 1), theme::TEXT_DARK, theme::TILE_BORDER)
        } else if index == completed {
            (format!("> banana {} <", index + 1), theme::TEXT_DARK, theme::YELLOW)
        } else {
            (format!("banana {}", index + 1), theme::FUTURE_ITEM, theme::FUTURE_ITEM)
        };
        draw_item(frame, *rect, &label, fg, border);
    }
}

fn draw_item(frame: &mut Frame, rect: Rect, label: &str, fg: Color, border: Color) {
    let rect = rect.intersection(frame.area());
    if rect.is_empty() {
        return;
    }
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border));
    frame.render_widget(
        Paragraph::new(label)
            .style(Style::new().fg(fg))
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

// === Puzzle ===

fn draw_puzzle(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let store = &app.store;
    let state = store.puzzle_state();

    let background = match state {
        PuzzleState::Success => theme::BG_SUCCESS,
        PuzzleState::Error => theme::BG_ERROR,
        PuzzleState::Initial | PuzzleState::Playing => theme::BG_PUZZLE,
    };
    fill(frame, area, background);

    let layout = app.puzzle_layout();
    if let Some(puzzle) = store.current_puzzle() {
        centered_text(
            frame,
            layout.clue,
            &puzzle.clue,
            Style::new().fg(theme::TEXT_DARK).add_modifier(Modifier::BOLD),
        );
    }

    let dragged = app.grab().map(|grab| grab.tile);

    for (slot, rect) in layout.slots.iter().enumerate() {
        draw_slot(frame, *rect, store.hovered_slot() == Some(slot));
        if let Some(tile) = store.slot_tile(slot).filter(|tile| Some(tile.id) != dragged) {
            draw_tile(frame, *rect, tile);
        }
    }

    if state.is_judged() {
        draw_button(frame, &layout, state);
    } else {
        for tile in store.tray_tiles().filter(|tile| Some(tile.id) != dragged) {
            draw_tile(frame, layout.tile_rect(tile), tile);
        }
        centered_text(
            frame,
            Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1),
            "drag tiles or type letters, Backspace to undo, Esc to quit",
            Style::new().fg(theme::TEXT_SECONDARY),
        );
    }

    if let Some(grab) = app.grab() {
        if let Some(tile) = store.tile(grab.tile) {
            let corner = grab.pointer.offset(Point::new(-grab.offset.x, -grab.offset.y));
            let (x, y) = (corner.x.max(0.0) as u16, corner.y.max(0.0) as u16);
            draw_tile(frame, Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT), tile);
        }
    }
}

fn draw_slot(frame: &mut Frame, rect: Rect, hovered: bool) {
    let rect = rect.intersection(frame.area());
    if rect.is_empty() {
        return;
    }
    let (border, fill) = if hovered {
        (theme::SLOT_HOVER_BORDER, Some(theme::SLOT_HOVER_FILL))
    } else {
        (theme::SLOT_BORDER, None)
    };
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border));
    if let Some(fill) = fill {
        block = block.style(Style::new().bg(fill));
    }
    frame.render_widget(block, rect);
}

fn draw_tile(frame: &mut Frame, rect: Rect, tile: &Tile) {
    let rect = rect.intersection(frame.area());
    if rect.is_empty() {
        return;
    }
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(theme::TILE_BORDER))
        .style(Style::new().bg(theme::TILE_FILL));
    frame.render_widget(
        Paragraph::new(tile.letter.as_str())
            .style(Style::new().fg(theme::TEXT_PRIMARY).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

fn draw_button(frame: &mut Frame, layout: &PuzzleLayout, state: PuzzleState) {
    let rect = layout.button.intersection(frame.area());
    if rect.is_empty() {
        return;
    }
    let (label, color) = match state {
        PuzzleState::Success => ("PEEL!", theme::BUTTON_SUCCESS),
        _ => ("TRY AGAIN!", theme::BUTTON_ERROR),
    };
    let block = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::new().fg(color))
        .style(Style::new().bg(color));
    frame.render_widget(
        Paragraph::new(label)
            .style(Style::new().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

// === Finale ===

fn draw_finale(frame: &mut Frame, app: &App) {
    let area = frame.area();
    fill(frame, area, theme::BG_SUCCESS);
    draw_confetti(frame, app);

    let layout = ProgressLayout::new(area, app.store.puzzle_count());
    centered_text(
        frame,
        layout.title,
        &app.store.config().finale_message,
        Style::new().fg(theme::TEXT_DARK).add_modifier(Modifier::BOLD),
    );
    for (index, rect) in layout.items.iter().enumerate() {
        draw_item(frame, *rect, &format!("gift {}", index + 1), theme::TEXT_DARK, theme::TEXT_SECONDARY);
    }
}

/// Pieces fall top to bottom, looping, each after its own delay.
fn draw_confetti(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }
    let elapsed = app.finale_elapsed_ms();

    for piece in app.confetti() {
        if elapsed < piece.delay_ms || piece.duration_ms == 0 {
            continue;
        }
        let progress = ((elapsed - piece.delay_ms) % piece.duration_ms) as f32 / piece.duration_ms as f32;
        let col = area.x + (piece.x / DESIGN_WIDTH * f32::from(area.width)) as u16;
        let row = area.y + (progress * f32::from(area.height)) as u16;
        if row >= area.bottom() || col >= area.right() {
            continue;
        }
        let color = theme::CONFETTI[piece.color % theme::CONFETTI.len()];
        frame
            .buffer_mut()
            .set_string(col, row, piece.glyph.to_string(), Style::new().fg(color));
    }
}
