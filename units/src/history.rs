use heapless::Vec;

use crate::temperature::Temperature;

/// Fixed-capacity record of temperature samples, oldest first.
pub struct TemperatureHistory<const N: usize> {
    samples: Vec<Temperature, N>,
}

impl<const N: usize> TemperatureHistory<N> {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Appends a sample. Gives the sample back when the history is full.
    pub fn record(&mut self, sample: Temperature) -> Result<(), Temperature> {
        self.samples.push(sample)
    }

    pub fn count(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<Temperature> {
        self.samples.last().copied()
    }

    pub fn min(&self) -> Option<Temperature> {
        self.samples.iter().min().copied()
    }

    pub fn max(&self) -> Option<Temperature> {
        self.samples.iter().max().copied()
    }

    pub fn average(&self) -> Option<Temperature> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().map(|s| s.to_celsius()).sum();
        let mean = sum / self.samples.len() as f64;
        // the mean of valid samples stays above absolute zero
        Temperature::from_celsius(mean).ok()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<const N: usize> Default for TemperatureHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn celsius(value: f64) -> Temperature {
        Temperature::from_celsius(value).unwrap()
    }

    #[test]
    fn test_history_empty() {
        let history: TemperatureHistory<8> = TemperatureHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.count(), 0);
        assert!(history.min().is_none());
        assert!(history.max().is_none());
        assert!(history.average().is_none());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_history_record() {
        let mut history: TemperatureHistory<8> = TemperatureHistory::new();
        assert!(history.record(celsius(18.0)).is_ok());
        assert!(history.record(celsius(21.0)).is_ok());
        assert_eq!(history.count(), 2);
        assert_eq!(history.latest(), Some(celsius(21.0)));
    }

    #[test]
    fn test_history_min_max() {
        let mut history: TemperatureHistory<8> = TemperatureHistory::new();
        history.record(celsius(21.0)).unwrap();
        history.record(celsius(-5.5)).unwrap();
        history.record(celsius(30.0)).unwrap();
        assert_eq!(history.min(), Some(celsius(-5.5)));
        assert_eq!(history.max(), Some(celsius(30.0)));
    }

    #[test]
    fn test_history_average() {
        let mut history: TemperatureHistory<8> = TemperatureHistory::new();
        history.record(celsius(10.0)).unwrap();
        history.record(celsius(20.0)).unwrap();
        history.record(celsius(30.0)).unwrap();
        let average = history.average().unwrap();
        assert_abs_diff_eq!(average.to_celsius(), 20.0, epsilon = 0.000001);
    }

    #[test]
    fn test_history_full() {
        let mut history: TemperatureHistory<2> = TemperatureHistory::new();
        history.record(celsius(1.0)).unwrap();
        history.record(celsius(2.0)).unwrap();
        let rejected = history.record(celsius(3.0));
        assert_eq!(rejected, Err(celsius(3.0)));
        assert_eq!(history.count(), 2);
    }

    #[test]
    fn test_history_clear() {
        let mut history: TemperatureHistory<4> = TemperatureHistory::new();
        history.record(celsius(12.0)).unwrap();
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
