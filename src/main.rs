//! Terminal Rubik's cube runner (default binary).
//!
//! This is the interactive entrypoint. It uses crossterm for key and mouse
//! input and renders the unfolded cube through the framebuffer-based
//! terminal renderer. Face turns come from three places: direct face keys,
//! a notation prompt, and mouse drags along a face's edge bands.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use structopt::StructOpt;

use tui_rubik::input::{drag_to_move, handle_key_event, should_quit, Command, DragTracker};
use tui_rubik::session::Session;
use tui_rubik::term::{render_plain, CubeView, FrameBuffer, Hud, TerminalRenderer, Viewport};
use tui_rubik::types::DEFAULT_CUBE_SIZE;

#[derive(StructOpt)]
#[structopt(
    name = "tui-rubik",
    about = "Interactive NxNxN Rubik's cube in the terminal"
)]
struct Cli {
    /// Cube side length (odd, at least 1; defaults to 3).
    #[structopt(short, long)]
    size: Option<u8>,

    /// Log level.
    #[structopt(long, case_insensitive = true, default_value = "WARN")]
    log_level: LevelFilter,

    /// Notation applied before the session starts, e.g. "R U Ri Ui".
    #[structopt(long)]
    scramble: Option<String>,

    /// Apply the scramble, print the unfolded cube to stdout and exit.
    #[structopt(long)]
    print: bool,
}

fn main() -> Result<()> {
    let cli = Cli::from_args();
    SimpleLogger::new().with_level(cli.log_level).init()?;

    let mut session = Session::new(cli.size.unwrap_or(DEFAULT_CUBE_SIZE))?;
    if let Some(notation) = &cli.scramble {
        session.apply_notation(notation)?;
    }

    if cli.print {
        print!("{}", render_plain(session.cube()));
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Interaction mode of the event loop.
enum Mode {
    Normal,
    /// Notation prompt with its edit buffer.
    Prompt(String),
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = CubeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut drags = DragTracker::new();
    let mut mode = Mode::Normal;
    let mut message: Option<String> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let hud = Hud {
            move_count: session.move_count(),
            last_move: session.last_move(),
            prompt: match &mode {
                Mode::Prompt(buffer) => Some(buffer.as_str()),
                Mode::Normal => None,
            },
            message: message.as_deref(),
        };
        view.render_into(session.cube(), &hud, viewport, &mut fb);
        term.draw(&fb)?;

        // Input.
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match std::mem::replace(&mut mode, Mode::Normal) {
                    Mode::Prompt(buffer) => {
                        mode = handle_prompt_key(key, buffer, session, &mut message);
                    }
                    Mode::Normal => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        match handle_key_event(key) {
                            Some(Command::Apply(mv)) => {
                                session.apply_move(mv);
                                message = None;
                            }
                            Some(Command::ChessPattern) => {
                                session.chess_pattern();
                                message = None;
                            }
                            Some(Command::OpenPrompt) => {
                                mode = Mode::Prompt(String::new());
                                message = None;
                            }
                            None => {}
                        }
                    }
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => {
                    drags.mouse_down(button, mouse.column, mouse.row);
                }
                MouseEventKind::Up(button) => {
                    if let Some(span) = drags.mouse_up(button, mouse.column, mouse.row) {
                        let size = session.cube().size();
                        let from = view.face_hit(size, viewport, span.from.0, span.from.1);
                        let to = view.face_hit(size, viewport, span.to.0, span.to.1);
                        if let (Some(from), Some(to)) = (from, to) {
                            if from.face == to.face {
                                if let Some(mv) =
                                    drag_to_move(from.face, from.tile, to.tile, size as u16)
                                {
                                    session.apply_move(mv);
                                    message = None;
                                }
                            }
                        }
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}

/// Advance the notation prompt by one key.
///
/// Returns the next interaction mode; Enter applies the buffer through the
/// session and reports an invalid instruction in the status message.
fn handle_prompt_key(
    key: KeyEvent,
    mut buffer: String,
    session: &mut Session,
    message: &mut Option<String>,
) -> Mode {
    match key.code {
        KeyCode::Enter => {
            *message = session.apply_notation(&buffer).err().map(|e| e.to_string());
            Mode::Normal
        }
        KeyCode::Esc => Mode::Normal,
        KeyCode::Backspace => {
            buffer.pop();
            Mode::Prompt(buffer)
        }
        KeyCode::Char(ch) => {
            buffer.push(ch);
            Mode::Prompt(buffer)
        }
        _ => Mode::Prompt(buffer),
    }
}
