use std::collections::BTreeMap;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// Labelled series drawn as horizontal bars. Every kind shares the renderer;
/// pie charts annotate each bar with its share of the total.
#[derive(Debug, Clone)]
pub struct Chart {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<(String, f64)>,
}

impl Chart {
    pub fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            kind,
            points: Vec::new(),
        }
    }

    pub fn from_counts(title: impl Into<String>, kind: ChartKind, counts: &BTreeMap<String, u64>) -> Self {
        let mut chart = Self::new(title, kind);
        chart.points = counts
            .iter()
            .map(|(label, count)| (label.clone(), *count as f64))
            .collect();
        chart
    }

    pub fn from_series(
        title: impl Into<String>,
        kind: ChartKind,
        labels: &[String],
        values: &[f64],
    ) -> Self {
        let mut chart = Self::new(title, kind);
        chart.points = labels.iter().cloned().zip(values.iter().copied()).collect();
        chart
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.title);
        if self.points.is_empty() {
            out.push_str("  (no data)");
            return out;
        }

        let label_width = self.points.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        let max = self.points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let total: f64 = self.points.iter().map(|(_, v)| v.max(0.0)).sum();

        let rows: Vec<String> = self
            .points
            .iter()
            .map(|(label, value)| {
                let filled = if max > 0.0 {
                    ((value.max(0.0) / max) * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                let annotation = match self.kind {
                    ChartKind::Pie if total > 0.0 => {
                        format!("{} ({:.1}%)", trim_number(*value), value / total * 100.0)
                    }
                    _ => trim_number(*value),
                };
                format!(
                    "  {:<width$} │{:<bar$} {}",
                    label,
                    "█".repeat(filled),
                    annotation,
                    width = label_width,
                    bar = BAR_WIDTH
                )
            })
            .collect();
        out.push_str(&rows.join("\n"));
        out
    }
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_scale_to_largest_value() {
        let chart = Chart::from_series(
            "Revenue",
            ChartKind::Line,
            &["Jan".to_string(), "Feb".to_string()],
            &[50.0, 100.0],
        );
        let out = chart.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Revenue");
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_pie_shows_shares() {
        let counts = BTreeMap::from([("Gold".to_string(), 1), ("Silver".to_string(), 3)]);
        let out = Chart::from_counts("Loyalty", ChartKind::Pie, &counts).render();
        assert!(out.contains("1 (25.0%)"));
        assert!(out.contains("3 (75.0%)"));
    }

    #[test]
    fn test_empty_chart() {
        let out = Chart::new("Cities", ChartKind::Bar).render();
        assert_eq!(out, "Cities\n  (no data)");
    }
}
