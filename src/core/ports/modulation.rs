use std::collections::VecDeque;

/// Non-blocking scalar source polled once per frame.
///
/// `poll` never blocks and never fails: when no new sample is available it
/// returns the last delivered value, and `0.0` before any sample arrives.
pub trait ModulationSource: Send {
    fn poll(&mut self) -> f64;
}

/// Source that always reports the same value.
#[derive(Debug, Default, Copy, Clone)]
pub struct StaticModulation {
    value: f64,
}

impl StaticModulation {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl ModulationSource for StaticModulation {
    fn poll(&mut self) -> f64 {
        self.value
    }
}

/// Source that replays a fixed sequence of polls, where `None` models a poll
/// on which no new data arrived. Once the script runs out every poll is a
/// miss.
#[derive(Debug, Default)]
pub struct ScriptedModulation {
    samples: VecDeque<Option<f64>>,
    last_received: f64,
}

impl ScriptedModulation {
    #[must_use]
    pub fn new(samples: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            last_received: 0.0,
        }
    }
}

impl ModulationSource for ScriptedModulation {
    fn poll(&mut self) -> f64 {
        if let Some(Some(value)) = self.samples.pop_front() {
            self.last_received = value;
        }

        self.last_received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_repeats_value() {
        let mut source = StaticModulation::new(4.2);

        assert_eq!(source.poll(), 4.2);
        assert_eq!(source.poll(), 4.2);
    }

    #[test]
    fn test_scripted_source_starts_at_zero() {
        let mut source = ScriptedModulation::new([None, None]);

        assert_eq!(source.poll(), 0.0);
        assert_eq!(source.poll(), 0.0);
    }

    #[test]
    fn test_scripted_source_caches_last_value_across_misses() {
        let mut source = ScriptedModulation::new([Some(1.5), None, None, Some(2.5), None]);

        assert_eq!(source.poll(), 1.5);
        assert_eq!(source.poll(), 1.5);
        assert_eq!(source.poll(), 1.5);
        assert_eq!(source.poll(), 2.5);
        assert_eq!(source.poll(), 2.5);
        // script exhausted: value stays put
        assert_eq!(source.poll(), 2.5);
    }
}
