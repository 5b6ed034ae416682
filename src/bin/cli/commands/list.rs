use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{accent_escape, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let categories = app.registry.categories();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = categories.iter().map(|c| {
                serde_json::json!({
                    "id": c.id.to_string(),
                    "name": c.name,
                    "department": c.department,
                    "accentColor": c.accent_color,
                    "cardCount": c.card_count(),
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if categories.is_empty() {
                println!("(no categories)");
                return Ok(());
            }

            let name_w = categories.iter().map(|c| c.name.chars().count()).max().unwrap_or(4).max(4);

            for c in categories {
                let marker = if use_color {
                    format!("{}\u{25cf}{}", accent_escape(&c.accent_color).unwrap_or_default(), Color::RESET)
                } else {
                    "\u{2022}".to_string()
                };
                println!("{} {:<name_w$}  {} ({} cards)",
                    marker, c.name, c.department, c.card_count(), name_w = name_w);
            }

            println!("\n{} categories", categories.len());
        }
    }

    Ok(())
}
