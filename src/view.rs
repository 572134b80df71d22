use std::{
    io::{self, stdin, stdout, Write},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};

use crate::{sim::Frame, SimHandle};

pub use canvas::Canvas;
mod canvas;

pub struct View {
    thread: JoinHandle<io::Result<()>>,
}

impl View {
    pub fn spawn(handle: SimHandle) -> Self {
        let thread = thread::spawn(|| view_loop(handle));
        Self { thread }
    }

    pub fn join(self) -> io::Result<()> {
        self.thread
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("view thread panicked")))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    TogglePause,
    Reset,
}

pub fn key_command(key: Key) -> Option<InputCmd> {
    match key {
        Key::Char('q') | Key::Esc | Key::Ctrl('c') => Some(InputCmd::Exit),
        Key::Char(' ') => Some(InputCmd::TogglePause),
        Key::Char('r') => Some(InputCmd::Reset),
        _ => None,
    }
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let Some(command) = key.ok().and_then(key_command) else {
            continue;
        };
        if sender.send(command).is_err() {
            break;
        }
    }
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

fn view_loop(handle: SimHandle) -> io::Result<()> {
    let _raw = stdout().into_raw_mode()?;
    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    loop {
        while let Ok(cmd) = receiver.try_recv() {
            match cmd {
                InputCmd::Exit => {
                    handle.exit();
                    print!("{}", termion::clear::All);
                    return stdout().flush();
                }
                InputCmd::TogglePause => handle.toggle_pause(),
                InputCmd::Reset => handle.reset(),
            }
        }
        let Some(frame) = handle.snapshot() else {
            return Ok(());
        };
        display_frame(&frame)?;
        thread::sleep(VIEW_REFRESH_INTERVAL);
    }
}

fn status_line(frame: &Frame) -> String {
    let state = if frame.paused { "paused" } else { "running" };
    let period = frame
        .period
        .map(|period| format!(" | period {period}"))
        .unwrap_or_default();
    format!(
        "gen {} | {} live | {state}{period} | space: pause  r: reset  q: quit",
        frame.generation,
        frame.grid.live_count()
    )
}

fn display_frame(frame: &Frame) -> io::Result<()> {
    let mut canvas = Canvas::from_screen()?;
    let grid = &frame.grid;
    canvas.layer(|row, col| {
        let cell = grid.get(row, col)?;
        Some(if cell.is_alive() { '#' } else { '.' })
    });
    canvas.display(&status_line(frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(key_command(Key::Char(' ')), Some(InputCmd::TogglePause));
        assert_eq!(key_command(Key::Char('r')), Some(InputCmd::Reset));
        assert_eq!(key_command(Key::Char('q')), Some(InputCmd::Exit));
        assert_eq!(key_command(Key::Char('x')), None);
    }

    #[test]
    fn status_shows_period_once_known() {
        let mut frame = Frame {
            grid: Grid::new(8, 8),
            generation: 12,
            paused: false,
            period: None,
        };
        assert!(status_line(&frame).starts_with("gen 12 | 0 live | running |"));
        frame.period = Some(2);
        frame.paused = true;
        assert!(status_line(&frame).contains("paused | period 2 |"));
    }
}
