//! Fixed politeness delay between consecutive requests.

use std::time::{Duration, Instant};

/// Spaces requests at least `delay` apart. The first request never waits.
#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    /// Sleeps until `delay` has passed since the previous call, then marks now.
    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                std::thread::sleep(self.delay - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}
