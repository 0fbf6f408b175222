// Elapsed time between loop iterations, from a free running millisecond counter

pub const SECONDS_PER_MS: f32 = 0.001;

pub struct Stopwatch {
    prev_ms: u32,
}

impl Stopwatch {
    pub fn new(now_ms: u32) -> Self {
        Self { prev_ms: now_ms }
    }

    // seconds since the previous lap (or since new), survives counter wrap
    pub fn lap(&mut self, now_ms: u32) -> f32 {
        let elapsed_ms = now_ms.wrapping_sub(self.prev_ms);
        self.prev_ms = now_ms;
        elapsed_ms as f32 * SECONDS_PER_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lap_measures_from_previous_lap() {
        let mut watch = Stopwatch::new(1_000);
        assert_relative_eq!(watch.lap(1_050), 0.05, epsilon = 1e-6);
        assert_relative_eq!(watch.lap(1_120), 0.07, epsilon = 1e-6);
        assert_relative_eq!(watch.lap(1_120), 0.0);
    }

    #[test]
    fn lap_across_counter_wrap() {
        let mut watch = Stopwatch::new(u32::MAX - 19);
        assert_relative_eq!(watch.lap(30), 0.05, epsilon = 1e-6);
    }
}
