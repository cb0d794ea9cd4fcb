/// Performance measurement utilities
/// Frame stages are timed and logged at trace level
use std::time::{Duration, Instant};

pub struct PerfTimer {
    name: &'static str,
    start: Instant,
}

impl PerfTimer {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        log::trace!("[PERF] {}: {}μs", self.name, self.elapsed().as_micros());
    }
}

/// Per-frame counters reported by the frame renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Draw records filled and outlined this frame
    pub records: usize,
    /// Nearest faces skipped because culling marked them interior
    pub culled_skipped: usize,
    pub elapsed: Duration,
}

/// Macro for easy performance measurement
#[macro_export]
macro_rules! perf_scope {
    ($name:expr) => {
        let _timer = $crate::perf::PerfTimer::new($name);
    };
}
