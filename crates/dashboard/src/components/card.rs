use views::{Delta, Trend};

pub struct MetricCard<'a> {
    pub title: &'a str,
    pub value: String,
    pub delta: Option<Delta>,
}

impl<'a> MetricCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: Option<Delta>) -> Self {
        self.delta = delta;
        self
    }

    pub fn render(&self) -> String {
        match self.delta {
            Some(delta) => format!(
                "{:<24} {:>14}  {} {:.1}%",
                self.title,
                self.value,
                arrow(delta.trend),
                delta.percent.abs()
            ),
            None => format!("{:<24} {:>14}", self.title, self.value),
        }
    }
}

fn arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Flat => "=",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_without_delta() {
        let card = MetricCard::new("Total Customers", "50,000");
        let line = card.render();
        assert!(line.starts_with("Total Customers"));
        assert!(line.trim_end().ends_with("50,000"));
    }

    #[test]
    fn test_card_shows_arrow_and_delta() {
        let up = MetricCard::new("Monthly Revenue", "$55,000").with_delta(Some(Delta {
            trend: Trend::Up,
            percent: 10.0,
        }));
        assert!(up.render().ends_with("▲ 10.0%"));

        let down = MetricCard::new("Active Customers", "380").with_delta(Some(Delta {
            trend: Trend::Down,
            percent: -5.0,
        }));
        assert!(down.render().ends_with("▼ 5.0%"));
    }
}
