//! Terminal progress spinner.
use std::{
    io::{self, Write as _},
    time::{Duration, Instant},
};

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// A single-line spinner with elapsed time, redrawn in place on stderr.
#[derive(Debug)]
pub(crate) struct Spinner {
    label: &'static str,
    started: Instant,
    tick: usize,
}

impl Spinner {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
            tick: 0,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Draws the next frame.
    pub(crate) fn draw(&mut self) -> io::Result<()> {
        let line = frame(self.label, self.tick, self.elapsed());
        self.tick = self.tick.wrapping_add(1);
        let mut stderr = io::stderr().lock();
        write!(stderr, "\r{line}")?;
        stderr.flush()
    }

    /// Erases the spinner line.
    pub(crate) fn clear(&self) -> io::Result<()> {
        let width = frame(self.label, 0, self.elapsed()).len();
        let mut stderr = io::stderr().lock();
        write!(stderr, "\r{:width$}\r", "")?;
        stderr.flush()
    }
}

fn frame(label: &str, tick: usize, elapsed: Duration) -> String {
    let glyph = FRAMES[tick % FRAMES.len()];
    format!("{glyph} {label} {:.1}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_cycles() {
        let elapsed = Duration::from_millis(1300);
        assert_eq!(frame("solving", 0, elapsed), "| solving 1.3s");
        assert_eq!(frame("solving", 1, elapsed), "/ solving 1.3s");
        assert_eq!(frame("solving", 4, elapsed), "| solving 1.3s");
    }
}
