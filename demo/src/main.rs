use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use crossterm::terminal;

use dotcanvas_core::canvas::Canvas;
use dotcanvas_core::raster;
use dotcanvas_core::render::{ColorMode, Renderer};

#[derive(Parser)]
#[command(name = "dotcanvas-demo", about = "Draw Braille pixel graphics in the terminal")]
struct Cli {
    /// Use per-cell 256-color output instead of white-on-black
    #[arg(long)]
    color: bool,

    /// Animate with a frame-rate overlay instead of drawing one frame
    #[arg(long)]
    animate: bool,

    /// Target frame rate for --animate
    #[arg(long, default_value = "30")]
    fps: u16,

    /// Override terminal columns (default: query the terminal)
    #[arg(long)]
    cols: Option<u16>,

    /// Override terminal rows (default: query the terminal)
    #[arg(long)]
    rows: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (term_cols, term_rows) = terminal::size().context("failed to query terminal size")?;
    let cols = cli.cols.unwrap_or(term_cols);
    let rows = cli.rows.unwrap_or(term_rows);

    let mut canvas = Canvas::new(cols, rows)?;
    let color_mode = if cli.color {
        ColorMode::PerCell
    } else {
        ColorMode::Fixed
    };
    let mut renderer = Renderer::new(color_mode);

    // Set up panic hook for terminal cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = cleanup_terminal();
        original_hook(info);
    }));

    terminal::enable_raw_mode()?;
    let stdout = std::io::stdout();
    let mut stdout = BufWriter::with_capacity(256 * 1024, stdout.lock());
    stdout.write_all(b"\x1b[?1049h")?; // enter alternate screen
    stdout.write_all(b"\x1b[?25l")?; // hide cursor
    stdout.flush()?;

    let result = if cli.animate {
        run_animation(&mut canvas, &mut renderer, &mut stdout, cli.color, cli.fps)
    } else {
        run_static(&mut canvas, &mut renderer, &mut stdout, cli.color)
    };

    stdout.write_all(b"\x1b[0m")?; // reset colors
    stdout.write_all(b"\x1b[?25h")?; // show cursor
    stdout.write_all(b"\x1b[?1049l")?; // leave alternate screen
    stdout.flush()?;
    terminal::disable_raw_mode()?;

    result
}

/// Draw the crossed diagonals and centered circle once, then wait for a key.
fn run_static(
    canvas: &mut Canvas,
    renderer: &mut Renderer,
    stdout: &mut impl Write,
    color: bool,
) -> anyhow::Result<()> {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    raster::line(canvas, 0, 0, w - 1, h - 1);
    raster::line(canvas, 0, h - 1, w - 1, 0);
    raster::circle(canvas, w / 2, h / 2, h / 3);
    if color {
        paint_gradient(canvas);
    }

    let mut buf = Vec::with_capacity(64 * 1024);
    renderer.render(canvas, &mut buf);
    stdout.write_all(&buf)?;
    stdout.flush()?;

    // Block until any key
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

/// Spin a line around the circle center until `q`/Esc.
fn run_animation(
    canvas: &mut Canvas,
    renderer: &mut Renderer,
    stdout: &mut impl Write,
    color: bool,
    fps: u16,
) -> anyhow::Result<()> {
    let frame_duration = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    let mut buf = Vec::with_capacity(64 * 1024);

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let radius = h / 3.0;

    let start = Instant::now();
    loop {
        if event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }

        let angle = start.elapsed().as_secs_f64() * 1.5;
        canvas.clear();
        raster::circle(canvas, cx as i32, cy as i32, radius as i32);
        raster::line(
            canvas,
            cx as i32,
            cy as i32,
            (cx + angle.cos() * radius) as i32,
            (cy + angle.sin() * radius) as i32,
        );
        if color {
            paint_gradient(canvas);
        }

        renderer.render_timed(canvas, Instant::now(), &mut buf);
        stdout.write_all(&buf)?;
        stdout.flush()?;

        std::thread::sleep(frame_duration);
    }
}

/// Color every cell with a foreground ramp across the 216-color cube.
fn paint_gradient(canvas: &mut Canvas) {
    let cols = canvas.cols() as u32;
    let rows = canvas.rows() as u32;
    for row in 0..rows {
        for col in 0..cols {
            let r = col * 5 / cols;
            let b = row * 5 / rows;
            let fg = (16 + 36 * r + 6 + b) as u8;
            // Cell center in virtual pixel space
            canvas.set_color((2 * col + 1) as f64, (5 * row + 2) as f64, fg, Some(0));
        }
    }
}

fn cleanup_terminal() {
    let _ = std::io::stdout().write_all(b"\x1b[0m\x1b[?25h\x1b[?1049l");
    let _ = std::io::stdout().flush();
    let _ = terminal::disable_raw_mode();
}
