/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// How it works:
///   1. Build the next frame into `front` buffer (array of Cell)
///   2. Compare each cell with `back` buffer (previous frame)
///   3. Only emit terminal commands for cells that changed
///   4. All commands are batched with `queue!`, flushed once at the end
///   5. Swap front/back
///
/// This eliminates flicker caused by full-screen redraws. Backdrop
/// effects paint first; panels and text compose over them.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::contact::FormStatus;
use crate::content::profile;
use crate::content::projects::{category_label, quest_status, PROJECTS};
use crate::content::skills::{filled_segments, EXPERIENCES, SKILL_CATEGORIES};
use crate::content::Accent;
use crate::domain::color::{blend, hsl_to_rgb};
use crate::domain::invaders::{
    Formation, ENEMY_BULLET_COLOR, INVADER_SPRITES, INV_H, ROW_COLORS, SHIP_BULLET_COLOR,
    SHIP_COLOR, SHIP_SPRITE,
};
use crate::domain::particle::{link_opacity, PALETTE};
use crate::domain::sprite::{cat_frame, CAT_PALETTE, CAT_H, CAT_W};
use crate::domain::terrain::{
    apply_ripple, color_for, flash_alpha, pick_glyph, terrain, FLASH_HSL,
};
use crate::sim::world::{ContactFocus, Phase, World, MENU_ITEMS};

// ── Palette ──

const BASE_BG_RGB: (u8, u8, u8) = (22, 18, 12);
const PANEL_BG_RGB: (u8, u8, u8) = (32, 26, 17);
const AMBER_RGB: (u8, u8, u8) = (204, 153, 51);

const HP: Color = Color::Rgb { r: 239, g: 68, b: 68 };
const MP: Color = Color::Rgb { r: 34, g: 211, b: 238 };
const HEAL: Color = Color::Rgb { r: 74, g: 222, b: 128 };
const GOLD: Color = Color::Rgb { r: 250, g: 204, b: 21 };
const RARE: Color = Color::Rgb { r: 168, g: 85, b: 247 };
const XP: Color = Color::Rgb { r: 96, g: 165, b: 250 };
const AMBER: Color = Color::Rgb { r: 204, g: 153, b: 51 };
const DIM: Color = Color::Rgb { r: 110, g: 95, b: 70 };
const FAINT: Color = Color::Rgb { r: 70, g: 60, b: 45 };

const PANEL_BG: Color = rgb(PANEL_BG_RGB);

const fn rgb(c: (u8, u8, u8)) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

fn accent_color(a: Accent) -> Color {
    match a {
        Accent::Hp => HP,
        Accent::Mp => MP,
        Accent::Heal => HEAL,
        Accent::Gold => GOLD,
        Accent::Rare => RARE,
        Accent::Xp => XP,
    }
}

fn accent_rgb(a: Accent) -> (u8, u8, u8) {
    match a {
        Accent::Hp => (239, 68, 68),
        Accent::Mp => (34, 211, 238),
        Accent::Heal => (74, 222, 128),
        Accent::Gold => (250, 204, 21),
        Accent::Rare => (168, 85, 247),
        Accent::Xp => (96, 165, 250),
    }
}

/// Accent dulled toward the backdrop, for borders and labels.
fn accent_dim(a: Accent) -> Color {
    rgb(blend(BASE_BG_RGB, accent_rgb(a), 0.45))
}

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    /// Explicit dark background for all "empty" terminal cells, so the
    /// inter-row gap pixels match the cell color exactly.
    const BASE_BG: Color = rgb(BASE_BG_RGB);

    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Color::White,
        bg: Cell::BASE_BG,
    };

    /// Sentinel cell used to invalidate the back buffer.
    /// Different from any real cell, so every position will be diff'd.
    const INVALID: Cell = Cell {
        ch: '?',
        fg: Color::Magenta,
        bg: Color::Magenta,
    };

    /// Normalize bg: Color::Reset → BASE_BG so that every cell gets an
    /// explicit background color (never terminal-default).
    #[inline]
    fn norm_bg(bg: Color) -> Color {
        match bg {
            Color::Reset => Self::BASE_BG,
            other => other,
        }
    }

    fn new(ch: char, fg: Color, bg: Color) -> Self {
        Cell { ch, fg, bg: Self::norm_bg(bg) }
    }
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer {
            width: w,
            height: h,
            cells: vec![Cell::BLANK; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y) with given colors. Each char occupies 1 column.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::new(ch, fg, bg));
            cx += 1;
        }
    }
}

// ── Renderer ──

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    last_phase: Option<Phase>,
    /// Cosmetic noise for glyph substitution; never touches sim state.
    fx_rng: Pcg32,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            last_phase: None,
            fx_rng: Pcg32::seed_from_u64(0xA11CE),
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size().unwrap_or((80, 24));
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        // Force full repaint on first frame: back ≠ front for every cell.
        self.back.cells.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, world: &mut World) -> io::Result<()> {
        // Detect terminal resize
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        if tw as usize != self.term_w || th as usize != self.term_h {
            self.term_w = tw as usize;
            self.term_h = th as usize;
            self.front.resize(self.term_w, self.term_h);
            self.back.resize(self.term_w, self.term_h);
            // Force full repaint after resize.
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
        }

        // Effects always track the current canvas; the call is a no-op
        // when nothing changed.
        world.on_resize(self.term_w, self.term_h);

        // Detect phase change → clear for clean transition
        let phase_changed = self.last_phase != Some(world.phase);
        if phase_changed {
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
            self.last_phase = Some(world.phase);
        }

        // Build front buffer
        self.front.clear();

        if self.term_w > 0 && self.term_h > 0 {
            self.compose_backdrop(world);

            match world.phase {
                Phase::Boot => self.compose_boot(world),
                Phase::Hero => self.compose_hero(world),
                Phase::About => self.compose_about(world),
                Phase::Projects => self.compose_projects(world),
                Phase::Skills => self.compose_skills(world),
                Phase::Contact => self.compose_contact(world),
            }

            if world.phase != Phase::Boot {
                self.compose_help_bar(world);
            }
            self.compose_message_bar(world);
        }

        // Diff and emit
        self.flush_diff()?;

        // Swap: current front becomes next back
        std::mem::swap(&mut self.front, &mut self.back);

        Ok(())
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        // Set explicit base colors at start of frame. Not ResetColor:
        // that would reset to the terminal's native default, which may
        // differ from BASE_BG and cause line artifacts.
        queue!(
            self.writer,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Cell::BASE_BG),
        )?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                let prev = self.back.get(x, y);

                if cell == prev {
                    need_move = true;
                    continue;
                }

                // Position cursor if needed
                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }

                // Set colors only if changed
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }

                queue!(self.writer, Print(cell.ch))?;

                last_x = x;
                last_y = y;
            }
        }

        self.writer.flush()
    }

    // ── Backdrop effects ──

    fn compose_backdrop(&mut self, world: &World) {
        match world.phase {
            Phase::Hero => self.compose_formation(&world.formation),
            Phase::About | Phase::Skills => self.compose_terrain(world),
            Phase::Projects | Phase::Contact => self.compose_particles(world),
            Phase::Boot => {}
        }
    }

    /// ASCII terrain: density glyphs from layered sine noise, with a
    /// pointer ripple and rare glyph/flash substitutions.
    fn compose_terrain(&mut self, world: &World) {
        let (w, h) = (self.front.width, self.front.height);
        if w == 0 || h == 0 {
            return;
        }
        let t = world.terrain.time();

        for row in 0..h {
            for col in 0..w {
                let mut n = terrain(col as f32, row as f32, t);

                if let Some((mx, my)) = world.pointer {
                    let dx = col as f32 - mx;
                    // Rows are roughly twice as tall as columns are wide.
                    let dy = (row as f32 - my) * 2.0;
                    let d = (dx * dx + dy * dy).sqrt();
                    n = apply_ripple(n, d, t);
                }

                let glyph = match pick_glyph(n, &mut self.fx_rng) {
                    Some(g) => g,
                    None => continue,
                };

                let (hue, sat, lum, alpha) = color_for(n);
                let fg = if glyph.flash {
                    let (fh, fs, fl) = FLASH_HSL;
                    blend(BASE_BG_RGB, hsl_to_rgb(fh, fs, fl), flash_alpha(alpha))
                } else {
                    blend(BASE_BG_RGB, hsl_to_rgb(hue, sat, lum), alpha)
                };
                self.front
                    .set(col, row, Cell::new(glyph.ch, rgb(fg), Cell::BASE_BG));
            }
        }
    }

    /// Particle motes with proximity links. Pairwise links are O(n²)
    /// over a small fixed pool.
    fn compose_particles(&mut self, world: &World) {
        let particles = world.particles.particles();

        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let a = &particles[i];
                let b = &particles[j];
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if let Some(op) = link_opacity(dist) {
                    self.draw_link((a.x, a.y), (b.x, b.y), op);
                }
            }
        }

        for p in particles {
            let glyph = if p.size < 1.8 {
                '·'
            } else if p.size < 2.8 {
                '•'
            } else {
                '●'
            };
            let (r, g, b, alpha) = PALETTE[p.color];
            let fg = blend(BASE_BG_RGB, (r, g, b), alpha + p.opacity * 0.4);
            let x = p.x.round() as usize;
            let y = p.y.round() as usize;
            self.front.set(x, y, Cell::new(glyph, rgb(fg), Cell::BASE_BG));
        }
    }

    fn draw_link(&mut self, a: (f32, f32), b: (f32, f32), opacity: f32) {
        let dx = b.0 - a.0;
        let dy = b.1 - a.1;
        let steps = dx.abs().max(dy.abs()).ceil() as i32;
        if steps <= 0 {
            return;
        }
        let fg = rgb(blend(BASE_BG_RGB, AMBER_RGB, (opacity * 2.5).min(0.5)));
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let x = (a.0 + dx * t).round() as usize;
            let y = (a.1 + dy * t).round() as usize;
            // Links never overwrite anything already drawn.
            if self.front.get(x, y).ch == ' ' {
                self.front.set(x, y, Cell::new('·', fg, Cell::BASE_BG));
            }
        }
    }

    /// Marching invader formation, patrol ship, and both bullet streams.
    fn compose_formation(&mut self, formation: &Formation) {
        let h = self.front.height as f32;

        for row in 0..formation.rows() {
            let sprite = &INVADER_SPRITES[row % INVADER_SPRITES.len()];
            let tint = ROW_COLORS[row % ROW_COLORS.len()];
            for col in 0..formation.cols() {
                let (x, y) = formation.invader_pos(col, row);
                if y > -INV_H && y < h {
                    self.draw_bitmap(x.round() as i32, y.round() as i32, sprite.as_slice(), tint, 0.30);
                }
            }
        }

        self.draw_bitmap(
            formation.ship_x().round() as i32,
            formation.ship_y().round() as i32,
            SHIP_SPRITE.as_slice(),
            SHIP_COLOR,
            0.35,
        );

        let enemy_fg = rgb(blend(BASE_BG_RGB, ENEMY_BULLET_COLOR, 0.4));
        for b in formation.enemy_bullets() {
            let (x, y) = (b.x.round() as usize, b.y.round() as usize);
            self.front.set(x, y, Cell::new('│', enemy_fg, Cell::BASE_BG));
        }
        let ship_fg = rgb(blend(BASE_BG_RGB, SHIP_BULLET_COLOR, 0.5));
        for b in formation.ship_bullets() {
            let (x, y) = (b.x.round() as usize, b.y.round() as usize);
            self.front.set(x, y, Cell::new('│', ship_fg, Cell::BASE_BG));
        }
    }

    /// Draw a binary pixel bitmap with half-block glyphs: two bitmap
    /// rows collapse into one terminal row.
    fn draw_bitmap(&mut self, x: i32, y: i32, rows: &[[u8; 11]], tint: (u8, u8, u8), alpha: f32) {
        let fg = rgb(blend(BASE_BG_RGB, tint, alpha));
        for pair in 0..rows.len().div_ceil(2) {
            let cy = y + pair as i32;
            if cy < 0 || cy as usize >= self.front.height {
                continue;
            }
            let top = &rows[pair * 2];
            let bottom = rows.get(pair * 2 + 1);
            for cx_off in 0..11 {
                let cx = x + cx_off as i32;
                if cx < 0 || cx as usize >= self.front.width {
                    continue;
                }
                let upper = top[cx_off] != 0;
                let lower = bottom.map_or(false, |r| r[cx_off] != 0);
                let ch = match (upper, lower) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => continue,
                };
                self.front
                    .set(cx as usize, cy as usize, Cell::new(ch, fg, Cell::BASE_BG));
            }
        }
    }

    /// Pixel cat, half-block rendered: 13 columns by 7 rows.
    fn draw_cat(&mut self, x: usize, y: usize, seq_index: usize) {
        let frame = cat_frame(seq_index);
        for pair in 0..CAT_H.div_ceil(2) {
            let cy = y + pair;
            for cx in 0..CAT_W {
                let upper = CAT_PALETTE[frame[pair * 2][cx] as usize];
                let lower = frame
                    .get(pair * 2 + 1)
                    .and_then(|row| CAT_PALETTE[row[cx] as usize]);
                let cell = match (upper, lower) {
                    (Some(u), Some(l)) => Cell::new('▀', rgb(u), rgb(l)),
                    (Some(u), None) => Cell::new('▀', rgb(u), PANEL_BG),
                    (None, Some(l)) => Cell::new('▄', rgb(l), PANEL_BG),
                    (None, None) => continue,
                };
                self.front.set(x + cx, cy, cell);
            }
        }
    }

    // ── Shared chrome ──

    /// "NN ── LABEL" section header in the top-left corner.
    fn section_header(&mut self, number: &str, label: &str, accent: Accent) {
        self.front.put_str(2, 1, number, accent_dim(accent), Color::Reset);
        self.front.put_str(5, 1, "──", FAINT, Color::Reset);
        self.front.put_str(8, 1, label, DIM, Color::Reset);
    }

    /// Bordered panel with a title on the top edge; interior filled.
    fn panel(&mut self, x: usize, y: usize, w: usize, h: usize, title: &str, accent: Accent) {
        if w < 2 || h < 2 {
            return;
        }
        let border = accent_dim(accent);
        for row in y..y + h {
            for col in x..x + w {
                let ch = if row == y && col == x {
                    '┌'
                } else if row == y && col == x + w - 1 {
                    '┐'
                } else if row == y + h - 1 && col == x {
                    '└'
                } else if row == y + h - 1 && col == x + w - 1 {
                    '┘'
                } else if row == y || row == y + h - 1 {
                    '─'
                } else if col == x || col == x + w - 1 {
                    '│'
                } else {
                    self.front.set(col, row, Cell::new(' ', Color::White, PANEL_BG));
                    continue;
                };
                self.front.set(col, row, Cell::new(ch, border, Cell::BASE_BG));
            }
        }
        if !title.is_empty() {
            let t = format!(" {} ", title);
            self.front.put_str(x + 2, y, &t, DIM, Cell::BASE_BG);
        }
    }

    /// Segmented RPG gauge: `LBL ████████░░░░ 950/999`.
    fn gauge(&mut self, x: usize, y: usize, label: &str, value: u32, max: u32, accent: Accent, segments: usize) {
        self.front.put_str(x, y, label, DIM, PANEL_BG);
        let filled = ((value as f32 / max as f32) * segments as f32).round() as usize;
        let filled = filled.min(segments);
        let fg = accent_color(accent);
        for i in 0..segments {
            let (ch, color) = if i < filled { ('█', fg) } else { ('░', FAINT) };
            self.front.set(x + 4 + i, y, Cell::new(ch, color, PANEL_BG));
        }
        let tail = format!("{}/{}", value, max);
        self.front.put_str(x + 5 + segments, y, &tail, DIM, PANEL_BG);
    }

    fn compose_help_bar(&mut self, world: &World) {
        let y = self.front.height.saturating_sub(1);
        let help = if world.typing() {
            " Tab Next Field   Enter Submit   Esc Back"
        } else {
            " 1-5 Sections   Tab Next   Enter Select   Esc Back   Q Quit"
        };
        self.front.put_str(0, y, help, FAINT, Color::Reset);
    }

    fn compose_message_bar(&mut self, world: &World) {
        if world.message.is_empty() {
            return;
        }
        let msg_row = self.front.height.saturating_sub(2);
        let msg = format!(" ◈ {} ", world.message);
        let bar_bg = Color::Rgb { r: 200, g: 180, b: 50 };
        for x in 0..self.front.width {
            self.front.set(x, msg_row, Cell::new(' ', Color::Black, bar_bg));
        }
        self.front.put_str(0, msg_row, &msg, Color::Black, bar_bg);
    }

    // ── Boot screen ──

    fn compose_boot(&mut self, world: &World) {
        let w = self.front.width;
        let h = self.front.height;
        let win_w = 54.min(w.saturating_sub(2));
        let win_x = (w.saturating_sub(win_w)) / 2;
        let lines = world.boot.visible_lines();
        let win_h = (profile::BOOT_LINES.len() + 6).min(h.saturating_sub(2));
        let win_y = (h.saturating_sub(win_h)) / 2;

        // Terminal chrome
        let chrome_bg = rgb(blend(BASE_BG_RGB, AMBER_RGB, 0.12));
        for x in win_x..win_x + win_w {
            self.front.set(x, win_y, Cell::new(' ', DIM, chrome_bg));
        }
        self.front.put_str(win_x + 1, win_y, "■ ■ ■", rgb(blend(BASE_BG_RGB, AMBER_RGB, 0.5)), chrome_bg);
        self.front.put_str(win_x + 8, win_y, "amber-terminal", DIM, chrome_bg);

        // Terminal body
        for row in win_y + 1..win_y + win_h {
            for x in win_x..win_x + win_w {
                self.front.set(x, row, Cell::new(' ', Color::White, PANEL_BG));
            }
        }

        let text_fg = rgb(blend(BASE_BG_RGB, AMBER_RGB, 0.8));
        let prompt_fg = rgb(blend(BASE_BG_RGB, AMBER_RGB, 0.4));
        let mut row = win_y + 2;
        for &(_, text) in profile::BOOT_LINES.iter().take(lines) {
            if !text.is_empty() {
                self.front.put_str(win_x + 3, row, "> ", prompt_fg, PANEL_BG);
                self.front.put_str(win_x + 5, row, text, text_fg, PANEL_BG);
            }
            row += 1;
        }

        if world.boot.bar_started() {
            let bar = world.boot.bar();
            let pct = format!("{}%", world.boot.progress());
            self.front.put_str(win_x + 3, row, "> ", prompt_fg, PANEL_BG);
            self.front.put_str(win_x + 5, row, "[", DIM, PANEL_BG);
            self.front.put_str(win_x + 6, row, &bar, AMBER, PANEL_BG);
            self.front.put_str(win_x + 6 + bar.chars().count(), row, "]", DIM, PANEL_BG);
            self.front.put_str(win_x + 8 + bar.chars().count(), row, &pct, text_fg, PANEL_BG);
            row += 1;
        }

        if world.boot.show_ready() {
            self.front.put_str(win_x + 3, row, "> ", prompt_fg, PANEL_BG);
            self.front.put_str(win_x + 5, row, "READY", AMBER, PANEL_BG);
            if (world.tick / 4) % 2 == 0 {
                self.front.put_str(win_x + 11, row, "_", AMBER, PANEL_BG);
            }
        }
    }

    // ── Hero screen ──

    fn compose_hero(&mut self, world: &World) {
        let w = self.front.width;
        let h = self.front.height;

        let title = [
            r" __  __   _    _  _  ___   ___  ___      ___   ___ __   __",
            r" \ \/ /  /_\  | \| ||   \ | __|| _ \  _ |   \ | __|\ \ / /",
            r"  >  <  / _ \ | .` || |) || _| |   / (_)| |) || _|  \ V / ",
            r" /_/\_\/_/ \_\|_|\_||___/ |___||_|_\    |___/ |___|  \_/  ",
        ];
        let art_w = title[0].chars().count();
        let top = h / 6;

        if w > art_w {
            let tx = (w - art_w) / 2;
            for (i, line) in title.iter().enumerate() {
                self.front.put_str(tx, top + i, line, GOLD, Color::Reset);
            }
        } else {
            let tx = (w.saturating_sub(profile::SITE_TITLE.len())) / 2;
            self.front.put_str(tx, top, profile::SITE_TITLE, GOLD, Color::Reset);
        }

        // Cycling typewriter subtitle with block cursor
        let subtitle = world.typewriter.displayed();
        let sub_len = subtitle.chars().count();
        let sx = (w.saturating_sub(sub_len + 1)) / 2;
        let sub_y = top + 6;
        self.front.put_str(sx, sub_y, subtitle, DIM, Color::Reset);
        if (world.tick / 5) % 2 == 0 {
            self.front.put_str(sx + sub_len, sub_y, "▌", DIM, Color::Reset);
        }

        // Decorative gradient line
        let line_w = 48.min(w.saturating_sub(4));
        let lx = (w - line_w) / 2;
        for i in 0..line_w {
            let color = if i < line_w / 3 {
                accent_dim(Accent::Hp)
            } else if i < line_w * 2 / 3 {
                accent_dim(Accent::Gold)
            } else {
                accent_dim(Accent::Mp)
            };
            self.front.set(lx + i, sub_y + 2, Cell::new('─', color, Cell::BASE_BG));
        }

        // RPG menu
        let menu_y = sub_y + 4;
        let mx = (w.saturating_sub(16)) / 2;
        for (i, (label, _, accent)) in MENU_ITEMS.iter().enumerate() {
            let selected = i == world.menu_cursor;
            let blink = (world.tick / 5) % 2 == 0;
            let arrow = if selected && blink { '▸' } else { ' ' };
            let fg = if selected { accent_color(*accent) } else { DIM };
            self.front.set(mx, menu_y + i * 2, Cell::new(arrow, fg, Cell::BASE_BG));
            self.front.put_str(mx + 2, menu_y + i * 2, label, fg, Color::Reset);
        }

        // PRESS START pulse
        if (world.tick / 8) % 2 == 0 {
            let ps = "PRESS START";
            let px = (w.saturating_sub(ps.len())) / 2;
            self.front.put_str(px, menu_y + 7, ps, MP, Color::Reset);
        }

        // HUD corners
        self.front.put_str(2, 1, "P1", accent_dim(Accent::Heal), Color::Reset);
        self.front.put_str(5, 1, "────", FAINT, Color::Reset);
        let hiscore = format!("HI-SCORE  {}", profile::HI_SCORE);
        let hx = w.saturating_sub(hiscore.len() + 2);
        self.front.put_str(hx, 1, &hiscore, accent_dim(Accent::Gold), Color::Reset);

        // Footer credits
        let credits = profile::CREDIT_LINES.join("  ·  ");
        let cx = (w.saturating_sub(credits.chars().count())) / 2;
        self.front.put_str(cx, h.saturating_sub(3), &credits, FAINT, Color::Reset);
    }

    // ── About screen ──

    fn compose_about(&mut self, world: &World) {
        let w = self.front.width;
        let h = self.front.height;
        self.section_header("02", "CHARACTER STATUS", Accent::Mp);

        // Left panel: portrait, pet, identity, gauges, achievements
        let lp_w = 34.min(w.saturating_sub(4));
        let lp_h = h.saturating_sub(5);
        self.panel(2, 3, lp_w, lp_h, "", Accent::Mp);

        // Portrait placeholder block
        let inner_x = 4;
        let mut row = 4;
        for r in 0..4 {
            for c in 0..lp_w.saturating_sub(4) {
                self.front.set(inner_x + c, row + r, Cell::new('▒', FAINT, PANEL_BG));
            }
        }
        let label = "[ PORTRAIT ]";
        self.front.put_str(inner_x + (lp_w.saturating_sub(4 + label.len())) / 2, row + 2, label, DIM, PANEL_BG);
        row += 5;

        // Pixel pet companion
        self.draw_cat(inner_x + (lp_w.saturating_sub(4 + CAT_W)) / 2, row, world.cat.index());
        row += 8;

        // Name plate
        let nx = inner_x + (lp_w.saturating_sub(4 + profile::HERO_NAME.len())) / 2;
        self.front.put_str(nx, row, profile::HERO_NAME, MP, PANEL_BG);
        let cx = inner_x + (lp_w.saturating_sub(4 + profile::HERO_CLASS.len())) / 2;
        self.front.put_str(cx, row + 1, profile::HERO_CLASS, DIM, PANEL_BG);
        row += 3;

        let level = format!("LEVEL  {}", profile::HERO_LEVEL);
        self.front.put_str(inner_x, row, &level, GOLD, PANEL_BG);
        row += 2;

        for gauge in profile::GAUGES {
            self.gauge(inner_x, row, gauge.label, gauge.value, gauge.max, gauge.accent, 16);
            row += 1;
        }
        row += 1;

        self.front.put_str(inner_x, row, "ACHIEVEMENTS", DIM, PANEL_BG);
        row += 1;
        let col_w = (lp_w.saturating_sub(4)) / 2;
        for (i, a) in profile::ACHIEVEMENTS.iter().enumerate() {
            let ax = inner_x + (i % 2) * col_w;
            let ay = row + i / 2;
            self.front.set(ax, ay, Cell::new(a.icon, accent_color(a.accent), PANEL_BG));
            self.front.put_str(ax + 2, ay, a.name, accent_dim(a.accent), PANEL_BG);
        }

        // Right side
        let rx = lp_w + 4;
        if rx + 10 >= w {
            return;
        }
        let rw = w.saturating_sub(rx + 2);

        // Attributes grid
        self.panel(rx, 3, rw, 8, "ATTRIBUTES", Accent::Mp);
        let cell_w = rw.saturating_sub(4) / 3;
        for (i, attr) in profile::ATTRIBUTES.iter().enumerate() {
            let ax = rx + 2 + (i % 3) * cell_w;
            let ay = 5 + (i / 3) * 3;
            self.front.put_str(ax, ay, attr.label, DIM, PANEL_BG);
            let v = format!("{}", attr.value);
            self.front.put_str(ax + 5, ay, &v, MP, PANEL_BG);
            self.front.put_str(ax, ay + 1, attr.description, FAINT, PANEL_BG);
        }

        // Bio
        let bio_y = 12;
        let bio_h = 8.min(h.saturating_sub(bio_y + 8));
        if bio_h >= 4 {
            self.panel(rx, bio_y, rw, bio_h, "CHARACTER BACKGROUND", Accent::Mp);
            let lines = wrap(profile::BIO, rw.saturating_sub(4));
            let mut end = (rx + 2, bio_y + 1);
            for (i, line) in lines.iter().take(bio_h - 2).enumerate() {
                self.front.put_str(rx + 2, bio_y + 1 + i, line, Color::Rgb { r: 190, g: 175, b: 150 }, PANEL_BG);
                end = (rx + 2 + line.chars().count(), bio_y + 1 + i);
            }
            if (world.tick / 5) % 2 == 0 {
                self.front.set(end.0 + 1, end.1, Cell::new('▌', accent_dim(Accent::Mp), PANEL_BG));
            }
        }

        // Equipment
        let eq_y = bio_y + 8.min(h.saturating_sub(bio_y + 8)).max(4) + 1;
        let eq_h = (profile::EQUIPMENT.len() + 2).min(h.saturating_sub(eq_y + 2));
        if eq_h >= 3 {
            self.panel(rx, eq_y, rw, eq_h, "EQUIPMENT", Accent::Mp);
            for (i, eq) in profile::EQUIPMENT.iter().take(eq_h - 2).enumerate() {
                let ey = eq_y + 1 + i;
                self.front.put_str(rx + 2, ey, eq.slot, FAINT, PANEL_BG);
                self.front.put_str(rx + 10, ey, eq.item, Color::Rgb { r: 190, g: 175, b: 150 }, PANEL_BG);
                let dx = (rx + rw).saturating_sub(eq.detail.len() + 2);
                self.front.put_str(dx, ey, eq.detail, HEAL, PANEL_BG);
            }
        }
    }

    // ── Projects screen ──

    fn compose_projects(&mut self, world: &World) {
        let w = self.front.width;
        let h = self.front.height;
        self.section_header("03", "QUEST LOG", Accent::Rare);

        let list_w = 36.min(w.saturating_sub(4));
        let list_h = h.saturating_sub(5);
        self.panel(2, 3, list_w, list_h, "QUESTS", Accent::Rare);

        for (i, project) in PROJECTS.iter().enumerate() {
            let row = 4 + i * 2;
            if row + 1 >= 3 + list_h - 1 {
                break;
            }
            let selected = i == world.quest_cursor;
            let (status, accent) = quest_status(project);

            if selected {
                let blink = (world.tick / 5) % 2 == 0;
                let arrow = if blink { '►' } else { ' ' };
                self.front.set(4, row, Cell::new(arrow, RARE, PANEL_BG));
            }
            let title_fg = if selected { RARE } else { Color::Rgb { r: 190, g: 175, b: 150 } };
            let upper = project.title.to_uppercase();
            self.front.put_str(6, row, &upper, title_fg, PANEL_BG);

            let badge = format!("[{}]", status);
            self.front.put_str(6, row + 1, &badge, accent_dim(accent), PANEL_BG);
            let desc_x = 7 + badge.len();
            let avail = (2 + list_w).saturating_sub(desc_x + 2);
            let desc = truncate(project.description, avail);
            self.front.put_str(desc_x, row + 1, &desc, FAINT, PANEL_BG);
        }

        // Detail pane
        let dx = list_w + 4;
        if dx + 12 >= w {
            return;
        }
        let dw = w.saturating_sub(dx + 2);
        let project = &PROJECTS[world.quest_cursor.min(PROJECTS.len() - 1)];
        let quest_tag = format!("QUEST: {}", project.id);
        self.panel(dx, 3, dw, list_h, &quest_tag, Accent::Rare);

        let (status, accent) = quest_status(project);
        let tx = dx + 2;
        let tw = dw.saturating_sub(4);
        let mut row = 4;

        let upper = project.title.to_uppercase();
        self.front.put_str(tx, row, &upper, GOLD, PANEL_BG);
        row += 1;
        let meta = format!(
            "[{}]  {}  ·  {}  ·  {}",
            status,
            project.year,
            category_label(project.category),
            project.role,
        );
        self.front.put_str(tx, row, &truncate(&meta, tw), accent_dim(accent), PANEL_BG);
        row += 2;

        for line in wrap(project.long_description, tw).iter().take(5) {
            if row >= 3 + list_h - 1 {
                return;
            }
            self.front.put_str(tx, row, line, Color::Rgb { r: 190, g: 175, b: 150 }, PANEL_BG);
            row += 1;
        }
        row += 1;

        let tags = project.tags.join(" · ");
        self.front.put_str(tx, row, "TAGS", FAINT, PANEL_BG);
        self.front.put_str(tx + 6, row, &truncate(&tags, tw.saturating_sub(6)), MP, PANEL_BG);
        row += 2;

        self.front.put_str(tx, row, "CHALLENGES", accent_dim(Accent::Hp), PANEL_BG);
        row += 1;
        for c in project.challenges {
            if row >= 3 + list_h - 1 {
                return;
            }
            self.front.set(tx, row, Cell::new('▸', accent_dim(Accent::Hp), PANEL_BG));
            self.front.put_str(tx + 2, row, &truncate(c, tw.saturating_sub(2)), DIM, PANEL_BG);
            row += 1;
        }
        row += 1;

        self.front.put_str(tx, row, "SOLUTIONS", accent_dim(Accent::Heal), PANEL_BG);
        row += 1;
        for s in project.solutions {
            if row >= 3 + list_h - 1 {
                return;
            }
            self.front.set(tx, row, Cell::new('✓', accent_dim(Accent::Heal), PANEL_BG));
            self.front.put_str(tx + 2, row, &truncate(s, tw.saturating_sub(2)), DIM, PANEL_BG);
            row += 1;
        }
        row += 1;

        if row < 3 + list_h - 1 {
            let mut mx = tx;
            for m in project.metrics {
                let chunk = format!("{} {}", m.label, m.value);
                if mx + chunk.len() >= dx + dw {
                    break;
                }
                self.front.put_str(mx, row, m.label, FAINT, PANEL_BG);
                self.front.put_str(mx + m.label.len() + 1, row, m.value, GOLD, PANEL_BG);
                mx += chunk.len() + 3;
            }
        }
    }

    // ── Skills screen ──

    fn compose_skills(&mut self, _world: &World) {
        let w = self.front.width;
        let h = self.front.height;
        self.section_header("04", "SKILL TREE", Accent::Heal);

        let panel_w = (w.saturating_sub(6)) / 2;
        let panel_h = 9;
        let positions = [
            (2, 3),
            (4 + panel_w, 3),
            (2, 3 + panel_h),
            (4 + panel_w, 3 + panel_h),
        ];

        for (cat, (px, py)) in SKILL_CATEGORIES.iter().zip(positions) {
            if py + panel_h > h.saturating_sub(2) {
                continue;
            }
            let title = format!("{} — {}", cat.label, cat.title);
            self.panel(px, py, panel_w, panel_h, &title, cat.accent);
            self.front.put_str(px + 2, py + 1, &truncate(cat.description, panel_w.saturating_sub(4)), FAINT, PANEL_BG);
            let segments = 20.min(panel_w.saturating_sub(22));
            for (i, skill) in cat.skills.iter().enumerate() {
                let row = py + 2 + i;
                let name = truncate(skill.name, 13);
                self.front.put_str(px + 2, row, &name, DIM, PANEL_BG);
                let filled = filled_segments(skill.level, segments);
                let fg = accent_color(cat.accent);
                for s in 0..segments {
                    let (ch, color) = if s < filled { ('█', fg) } else { ('░', FAINT) };
                    self.front.set(px + 16 + s, row, Cell::new(ch, color, PANEL_BG));
                }
                let lvl = format!("{:>3}", skill.level);
                self.front.put_str(px + 17 + segments, row, &lvl, FAINT, PANEL_BG);
            }
        }

        // Experience timeline
        let ex_y = 3 + panel_h * 2 + 1;
        if ex_y + 2 < h.saturating_sub(2) {
            self.front.put_str(2, ex_y, "EXPERIENCE", DIM, Color::Reset);
            let mut row = ex_y + 1;
            for exp in EXPERIENCES {
                if row + 1 >= h.saturating_sub(2) {
                    break;
                }
                self.front.put_str(4, row, exp.period, accent_dim(Accent::Xp), Color::Reset);
                let role = format!("{} — {}", exp.role, exp.company);
                self.front.put_str(22, row, &truncate(&role, w.saturating_sub(24)), Color::Rgb { r: 190, g: 175, b: 150 }, Color::Reset);
                let techs = exp.technologies.join(" · ");
                let tech_x = w.saturating_sub(techs.chars().count() + 2);
                if tech_x > 22 + role.chars().count() {
                    self.front.put_str(tech_x, row, &techs, accent_dim(Accent::Mp), Color::Reset);
                }
                row += 1;
                if row < h.saturating_sub(2) {
                    self.front.put_str(22, row, &truncate(exp.description, w.saturating_sub(24)), FAINT, Color::Reset);
                    row += 1;
                }
                if row < h.saturating_sub(2) {
                    let feats = exp.achievements.join("  ·  ");
                    self.front.set(22, row, Cell::new('✦', accent_dim(Accent::Gold), Cell::BASE_BG));
                    self.front.put_str(24, row, &truncate(&feats, w.saturating_sub(26)), DIM, Color::Reset);
                    row += 2;
                }
            }
        }
    }

    // ── Contact screen ──

    fn compose_contact(&mut self, world: &World) {
        let w = self.front.width;
        let h = self.front.height;
        self.section_header("05", "SAVE POINT", Accent::Hp);

        // Save crystal flourish
        let crystal = "◆ CHECKPOINT REACHED ◆";
        let cx = (w.saturating_sub(crystal.chars().count())) / 2;
        self.front.put_str(cx, 2, crystal, accent_dim(Accent::Mp), Color::Reset);

        // Left: save slots
        let lp_w = 40.min(w.saturating_sub(4));
        self.front.put_str(2, 4, "SAVE FILES", DIM, Color::Reset);
        for (i, slot) in profile::SAVE_SLOTS.iter().enumerate() {
            let sy = 5 + i * 4;
            if sy + 4 > h.saturating_sub(2) {
                break;
            }
            self.panel(2, sy, lp_w, 4, "", Accent::Hp);
            self.front.set(4, sy + 1, Cell::new(slot.icon, accent_dim(Accent::Hp), PANEL_BG));
            let head = format!("SLOT {}  {}", slot.slot, slot.label);
            self.front.put_str(7, sy + 1, &head, accent_dim(Accent::Hp), PANEL_BG);
            self.front.put_str(7, sy + 2, &truncate(slot.value, lp_w.saturating_sub(9)), Color::Rgb { r: 190, g: 175, b: 150 }, PANEL_BG);
        }
        let link_base = 5 + profile::SAVE_SLOTS.len() * 4 + 1;
        for (i, slot) in profile::SAVE_SLOTS.iter().enumerate() {
            self.front.put_str(2, link_base + i, &truncate(slot.href, lp_w), FAINT, Color::Reset);
        }

        // Right: write message form
        let fx = lp_w + 4;
        if fx + 20 >= w {
            return;
        }
        let fw = w.saturating_sub(fx + 2);
        let fh = h.saturating_sub(6);
        self.panel(fx, 4, fw, fh, "WRITE MESSAGE", Accent::Hp);

        let field_x = fx + 2;
        let field_w = fw.saturating_sub(4);
        let mut row = 5;

        row = self.form_field(world, field_x, row, field_w, "NAME", ContactFocus::Name, "Hero name...");
        row = self.form_field(world, field_x, row, field_w, "EMAIL", ContactFocus::Email, "hero@guild.com");
        row = self.form_field(world, field_x, row, field_w, "MESSAGE", ContactFocus::Message, "Describe your quest...");

        // Submit button
        let focused = world.focus == ContactFocus::Send;
        let label = if world.form.submitting {
            "  ◌ SAVING...  "
        } else {
            "  ▸ SAVE GAME  "
        };
        let bx = field_x + (field_w.saturating_sub(label.chars().count())) / 2;
        let (bfg, bbg) = if focused {
            (Color::Black, HP)
        } else {
            (accent_dim(Accent::Hp), PANEL_BG)
        };
        self.front.put_str(bx, row + 1, label, bfg, bbg);

        // Status dialog
        let status_y = row + 3;
        if status_y < 4 + fh - 1 {
            match world.form.status {
                FormStatus::Success => {
                    self.front.put_str(field_x, status_y, "✓ GAME SAVED SUCCESSFULLY!", HEAL, PANEL_BG);
                }
                FormStatus::Error => {
                    self.front.put_str(field_x, status_y, "✗ SAVE FAILED! TRY AGAIN.", HP, PANEL_BG);
                }
                FormStatus::Idle => {}
            }
        }
    }

    /// One labeled form field; returns the row below it.
    fn form_field(
        &mut self,
        world: &World,
        x: usize,
        y: usize,
        w: usize,
        label: &str,
        focus: ContactFocus,
        placeholder: &str,
    ) -> usize {
        let focused = world.focus == focus;
        let field = match focus.field() {
            Some(f) => f,
            None => return y,
        };
        let value = match field {
            crate::contact::Field::Name => &world.form.data.name,
            crate::contact::Field::Email => &world.form.data.email,
            crate::contact::Field::Message => &world.form.data.message,
        };

        let label_fg = if focused { HP } else { FAINT };
        self.front.put_str(x, y, label, label_fg, PANEL_BG);

        // Field line: underline look via dark strip
        let line_bg = rgb(blend(PANEL_BG_RGB, (0, 0, 0), 0.3));
        for c in 0..w {
            self.front.set(x + c, y + 1, Cell::new(' ', DIM, line_bg));
        }
        if value.is_empty() {
            self.front.put_str(x + 1, y + 1, &truncate(placeholder, w.saturating_sub(2)), FAINT, line_bg);
        } else {
            let shown = tail_chars(value, w.saturating_sub(3));
            self.front.put_str(x + 1, y + 1, &shown, Color::Rgb { r: 220, g: 205, b: 175 }, line_bg);
            if focused && (world.tick / 5) % 2 == 0 {
                self.front.set(x + 1 + shown.chars().count(), y + 1, Cell::new('█', HP, line_bg));
            }
        }
        if value.is_empty() && focused && (world.tick / 5) % 2 == 0 {
            self.front.set(x + 1, y + 1, Cell::new('█', HP, line_bg));
        }

        // Per-field error
        let mut next = y + 2;
        if let Some(err) = world.form.errors.get(field) {
            self.front.put_str(x + 1, next, err, HP, PANEL_BG);
            next += 1;
        }
        next + 1
    }
}

// ── Text helpers ──

/// Greedy word wrap; long words are hard-broken at the width.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let need = if current.is_empty() { 0 } else { 1 } + word.chars().count();
            if current.chars().count() + need <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                break;
            }
            if current.is_empty() {
                // Word longer than the line: hard break.
                let split: String = word.chars().take(width).collect();
                let rest_start = split.len();
                lines.push(split);
                word = &word[rest_start..];
                if word.is_empty() {
                    break;
                }
            } else {
                lines.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let head: String = text.chars().take(width - 3).collect();
    format!("{}...", head)
}

/// Last `width` characters of a string (for scrolling field display).
fn tail_chars(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    text.chars().skip(count - width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        for line in &lines {
            assert!(line.chars().count() <= 10, "{line:?}");
        }
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        let lines = wrap("abcdefghijklmnop", 5);
        assert_eq!(lines, vec!["abcde", "fghij", "klmno", "p"]);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("short", 8), "short");
    }

    #[test]
    fn tail_shows_the_end_of_long_input() {
        assert_eq!(tail_chars("abcdefgh", 4), "efgh");
        assert_eq!(tail_chars("abc", 4), "abc");
    }
}
