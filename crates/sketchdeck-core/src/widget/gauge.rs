//! Progress bar and circular gauge models.

use std::f64::consts::{FRAC_PI_2, TAU};

use peniko::Color;

/// Horizontal bar filled proportionally to a 0-100 value.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    pub value: f64,
    pub label: String,
    pub color: Color,
}

impl ProgressBar {
    pub fn new(value: f64, label: impl Into<String>, color: Color) -> Self {
        Self { value, label: label.into(), color }
    }

    /// Filled share of the track, clamped to `[0, 1]`.
    pub fn fill_fraction(&self) -> f64 {
        (self.value / 100.0).clamp(0.0, 1.0)
    }

    /// Text shown next to the label.
    pub fn value_text(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Ring gauge that fills clockwise from the top.
#[derive(Debug, Clone)]
pub struct CircularGauge {
    pub value: f64,
    pub max: f64,
    pub label: String,
}

impl CircularGauge {
    pub const RADIUS: f64 = 50.0;
    pub const STROKE_WIDTH: f64 = 10.0;
    /// Arc start, at twelve o'clock.
    pub const START_ANGLE: f64 = -FRAC_PI_2;

    pub fn new(value: f64, max: f64, label: impl Into<String>) -> Self {
        Self { value, max, label: label.into() }
    }

    /// Filled share of the ring, clamped to `[0, 1]`. Zero when `max` is not positive.
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }

    pub fn circumference(&self) -> f64 {
        TAU * Self::RADIUS
    }

    /// Length of the visible arc.
    pub fn arc_length(&self) -> f64 {
        self.fraction() * self.circumference()
    }

    /// Dash offset of a full-circumference dash that leaves only the arc visible.
    pub fn dash_offset(&self) -> f64 {
        self.circumference() - self.arc_length()
    }

    /// Clockwise sweep of the arc in radians: the part of the ring the dash
    /// offset leaves visible.
    pub fn sweep_angle(&self) -> f64 {
        (self.circumference() - self.dash_offset()) / Self::RADIUS
    }

    /// Text shown under the ring.
    pub fn value_text(&self) -> String {
        format!("{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_fraction() {
        let gauge = CircularGauge::new(65.0, 100.0, "CPU Usage");
        assert!((gauge.fraction() - 0.65).abs() < 1e-12);
        assert!((gauge.arc_length() / gauge.circumference() - 0.65).abs() < 1e-12);
        assert!((gauge.dash_offset() - 0.35 * TAU * 50.0).abs() < 1e-9);
        assert!((gauge.sweep_angle() - 0.65 * TAU).abs() < 1e-12);
    }

    #[test]
    fn test_gauge_edges() {
        assert_eq!(CircularGauge::new(5.0, 0.0, "x").fraction(), 0.0);
        assert_eq!(CircularGauge::new(150.0, 100.0, "x").fraction(), 1.0);
        assert_eq!(CircularGauge::new(-3.0, 100.0, "x").fraction(), 0.0);
        let full = CircularGauge::new(100.0, 100.0, "x");
        assert!(full.dash_offset().abs() < 1e-9);
        assert!((full.sweep_angle() - TAU).abs() < 1e-9);
        assert_eq!(CircularGauge::new(0.0, 100.0, "x").sweep_angle(), 0.0);
    }

    #[test]
    fn test_gauge_value_text() {
        assert_eq!(CircularGauge::new(65.0, 100.0, "CPU Usage").value_text(), "65");
        assert_eq!(CircularGauge::new(12.5, 100.0, "x").value_text(), "12.5");
    }

    #[test]
    fn test_progress_bar() {
        let bar = ProgressBar::new(75.0, "Progression générale", Color::WHITE);
        assert!((bar.fill_fraction() - 0.75).abs() < f64::EPSILON);
        assert_eq!(bar.value_text(), "75%");
        assert_eq!(ProgressBar::new(140.0, "x", Color::WHITE).fill_fraction(), 1.0);
    }
}
