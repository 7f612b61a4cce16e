use std::time::Duration;

use serde_json::Value;

/// Interval-driven frame counter for step sequences. Owns nothing but
/// the index; what a frame looks like is the caller's business.
pub struct StepPlayer {
    index: usize,
    total: usize,
    delay: Duration,
}

impl StepPlayer {
    pub fn new(total: usize, step_ms: u64) -> Self {
        Self {
            index: 0,
            total,
            delay: Duration::from_millis(step_ms),
        }
    }

    /// Next frame index, or None once the sequence is exhausted.
    pub fn advance(&mut self) -> Option<usize> {
        if self.index >= self.total {
            return None;
        }
        let current = self.index;
        self.index += 1;
        Some(current)
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Drive a frame callback over the steps, sleeping between frames.
pub fn play(steps: &[Value], step_ms: u64, mut frame: impl FnMut(usize, &Value)) {
    let mut player = StepPlayer::new(steps.len(), step_ms);
    while let Some(i) = player.advance() {
        frame(i, &steps[i]);
        if i + 1 < steps.len() {
            std::thread::sleep(player.delay());
        }
    }
}
