use std::{
    collections::VecDeque,
    sync::mpsc,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, info};

use crate::{Grid, LifeEngine};

/// How many past generations are kept to look for repeats.
const HISTORY_LEN: usize = 16;

/// What the view gets to draw.
#[derive(Debug, Clone)]
pub struct Frame {
    pub grid: Grid,
    pub generation: u64,
    pub paused: bool,
    /// set once the pattern repeats one of the recent generations
    pub period: Option<usize>,
}

/// The engine plus the bookkeeping of the driving loop.
#[derive(Debug)]
pub struct State {
    engine: LifeEngine,
    generation: u64,
    paused: bool,
    history: VecDeque<u64>,
    period: Option<usize>,
}

impl State {
    /// Starts paused on generation 0.
    pub fn new(engine: LifeEngine) -> Self {
        let mut state = Self {
            engine,
            generation: 0,
            paused: true,
            history: VecDeque::with_capacity(HISTORY_LEN),
            period: None,
        };
        state.record();
        state
    }

    pub fn step(&mut self) {
        self.engine.perform_next_step();
        self.generation += 1;
        self.record();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.generation = 0;
        self.history.clear();
        self.period = None;
        self.record();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn period(&self) -> Option<usize> {
        self.period
    }

    pub fn snapshot(&self) -> Frame {
        Frame {
            grid: self.engine.current_state().clone(),
            generation: self.generation,
            paused: self.paused,
            period: self.period,
        }
    }

    fn record(&mut self) {
        let fingerprint = self.engine.current_state().fingerprint();
        let repeat = self
            .history
            .iter()
            .rev()
            .position(|&past| past == fingerprint)
            .map(|index| index + 1);
        if let (Some(period), None) = (repeat, self.period) {
            info!("generation {} repeats with period {period}", self.generation);
        }
        self.period = repeat;

        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(fingerprint);
    }
}

pub enum SimCmd {
    Snapshot(mpsc::Sender<Frame>),
    TogglePause,
    Reset,
    Exit,
}

#[derive(Clone)]
pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    /// `None` once the simulation thread is gone.
    pub fn snapshot(&self) -> Option<Frame> {
        let (sender, receiver) = mpsc::channel();
        self.sender.send(SimCmd::Snapshot(sender)).ok()?;
        receiver.recv().ok()
    }

    pub fn toggle_pause(&self) {
        let _ = self.sender.send(SimCmd::TogglePause);
    }

    pub fn reset(&self) {
        let _ = self.sender.send(SimCmd::Reset);
    }

    pub fn exit(&self) {
        let _ = self.sender.send(SimCmd::Exit);
    }
}

#[derive(Debug)]
pub struct Sim {
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    pub fn spawn(engine: LifeEngine, tick_interval: Duration) -> Self {
        let state = State::new(engine);
        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, state, tick_interval));
        Self { thread, sender }
    }

    pub fn handle(&self) -> SimHandle {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    pub fn join(self) {
        drop(self.sender);
        let _ = self.thread.join();
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(5);

fn sim_loop(receiver: mpsc::Receiver<SimCmd>, mut state: State, tick_interval: Duration) {
    let mut last_update = Instant::now();

    loop {
        match receiver.recv_timeout(EVT_CHECK_TIMEOUT) {
            Ok(SimCmd::Snapshot(sender)) => {
                let _ = sender.send(state.snapshot());
            }
            Ok(SimCmd::TogglePause) => state.toggle_pause(),
            Ok(SimCmd::Reset) => state.reset(),
            Ok(SimCmd::Exit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => (),
        }

        if !state.is_paused() && last_update.elapsed() >= tick_interval {
            state.step();
            last_update = Instant::now();
        }
    }
    info!("simulation stopped at generation {}", state.generation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Grid};

    fn engine_with(lives: &[(usize, usize)]) -> LifeEngine {
        let mut grid = Grid::new(8, 8);
        for &(row, col) in lives {
            grid.set(row, col, Cell::Live);
        }
        LifeEngine::from_state(grid).unwrap()
    }

    #[test]
    fn starts_paused_on_generation_zero() {
        let state = State::new(engine_with(&[]));
        let frame = state.snapshot();
        assert!(frame.paused);
        assert_eq!(frame.generation, 0);
        assert_eq!(frame.period, None);
    }

    #[test]
    fn detects_still_life() {
        let mut state = State::new(engine_with(&[(3, 3), (3, 4), (4, 3), (4, 4)]));
        state.step();
        assert_eq!(state.period(), Some(1));
    }

    #[test]
    fn detects_oscillator_period() {
        let mut state = State::new(engine_with(&[(3, 4), (4, 4), (5, 4)]));
        state.step();
        assert_eq!(state.period(), None);
        state.step();
        assert_eq!(state.period(), Some(2));
    }

    #[test]
    fn reset_clears_progress() {
        let mut state = State::new(engine_with(&[(3, 4), (4, 4), (5, 4)]));
        state.step();
        state.step();
        state.reset();
        let frame = state.snapshot();
        assert_eq!(frame.generation, 0);
        assert_eq!(frame.period, None);
        assert_eq!(frame.grid.live_count(), 3);
    }

    #[test]
    fn handle_drives_the_thread() {
        let sim = Sim::spawn(engine_with(&[(3, 4), (4, 4), (5, 4)]), Duration::from_millis(1));
        let handle = sim.handle();

        assert_eq!(handle.snapshot().map(|frame| frame.generation), Some(0));
        handle.toggle_pause();
        let mut frame = handle.snapshot();
        while frame.as_ref().is_some_and(|frame| frame.generation < 3) {
            thread::sleep(Duration::from_millis(2));
            frame = handle.snapshot();
        }
        handle.toggle_pause();
        handle.reset();
        let frame = handle.snapshot().unwrap();
        assert!(frame.paused);
        assert_eq!(frame.generation, 0);

        handle.exit();
        sim.join();
        assert!(handle.snapshot().is_none());
    }
}
