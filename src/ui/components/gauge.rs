use std::fmt;

/// Horizontal bar for a bounded value, e.g. `[████████░░] 85%`.
pub struct Gauge {
    value: f64,
    unit: &'static str,
    min: f64,
    max: f64,
    width: usize,
    precision: usize,
}

impl Gauge {
    pub fn new(value: f64, unit: &'static str) -> Self {
        Self {
            value,
            unit,
            min: 0.0,
            max: 100.0,
            width: 10,
            precision: 0,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn filled(&self) -> usize {
        if self.max <= self.min {
            return 0;
        }
        let ratio = ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        (self.width as f64 * ratio).round() as usize
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.filled();
        let bar: String = (0..self.width)
            .map(|i| if i < filled { '█' } else { '░' })
            .collect();
        write!(
            f,
            "[{}] {:.prec$}{}",
            bar,
            self.value,
            self.unit,
            prec = self.precision
        )
    }
}

/// 0-100 suitability or confidence score.
pub fn percent_gauge(value: f64) -> Gauge {
    Gauge::new(value, "%")
}

/// Daily rainfall against a 25 mm scale.
pub fn rainfall_gauge(mm: f64) -> Gauge {
    Gauge::new(mm, " mm").range(0.0, 25.0).width(8).precision(1)
}
