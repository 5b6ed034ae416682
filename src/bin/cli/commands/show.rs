use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, category_name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let category = app.find_category(category_name)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(category)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_category(category, use_color));
        }
    }

    Ok(())
}
