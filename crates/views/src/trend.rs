use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Change between the last two points of a series, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Delta {
    pub trend: Trend,
    pub percent: f64,
}

pub fn series_delta(series: &[f64]) -> Option<Delta> {
    let [.., previous, current] = series else {
        return None;
    };
    if *previous == 0.0 {
        return None;
    }

    let percent = (current - previous) / previous.abs() * 100.0;
    let trend = if percent > 0.0 {
        Trend::Up
    } else if percent < 0.0 {
        Trend::Down
    } else {
        Trend::Flat
    };
    Some(Delta { trend, percent })
}
