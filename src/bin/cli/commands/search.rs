use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, query: &str, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let results = app.search(query);

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = results.iter().map(|c| {
                serde_json::json!({
                    "id": c.id.to_string(),
                    "name": c.name,
                    "department": c.department,
                    "cardCount": c.card_count(),
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if results.is_empty() {
                println!("No categories found for '{}'.", query);
                return Ok(());
            }

            let name_w = results.iter().map(|c| c.name.chars().count()).max().unwrap_or(4).min(40).max(4);
            let dept_w = 20;

            println!("{:<name_w$} {:<dept_w$} {}",
                "Name", "Department", "Cards",
                name_w = name_w, dept_w = dept_w);
            println!("{} {} {}",
                "\u{2500}".repeat(name_w),
                "\u{2500}".repeat(dept_w),
                "\u{2500}".repeat(5));

            for c in results.iter() {
                println!("{:<name_w$} {:<dept_w$} {}",
                    truncate(&c.name, name_w), truncate(&c.department, dept_w), c.card_count(),
                    name_w = name_w, dept_w = dept_w);
            }

            println!("\n{} results", results.len());
        }
    }

    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Medical", 10), "Medical");
        assert_eq!(truncate("General-Knowledge", 10), "General...");
    }
}
