/// Framed key/value box. Callers render it only while the modal is open.
pub fn render(title: &str, rows: &[(&str, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let lines: Vec<String> = rows
        .iter()
        .map(|(k, v)| format!("{:<width$}  {}", k, v, width = key_width))
        .collect();

    let inner = lines
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(title.chars().count() + 2))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let title = format!(" {} ", title);
    out.push_str(&format!(
        "╔{}{}╗\n",
        title,
        "═".repeat(inner + 2 - title.chars().count())
    ));
    for line in &lines {
        let pad = inner - line.chars().count();
        out.push_str(&format!("║ {}{} ║\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╚{}╝", "═".repeat(inner + 2)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_is_rectangular() {
        let out = render(
            "Customer Details",
            &[("ID", "CUST100001".to_string()), ("Email", "sarah@example.com".to_string())],
        );
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(out.starts_with("╔ Customer Details "));
        assert!(out.contains("Email  sarah@example.com"));
    }

    #[test]
    fn test_long_title_widens_frame() {
        let out = render("A rather long modal title", &[("k", "v".to_string())]);
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
