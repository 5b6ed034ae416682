use std::path::Path;

use anyhow::{bail, Context, Result};

use flashdeck_lib::deck::import::load_deck;
use flashdeck_lib::deck::seed::builtin_registry;
use flashdeck_lib::deck::{Category, CategoryRegistry};
use flashdeck_lib::search::{filter, FilteredView};
use flashdeck_lib::{Browser, Config};

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub registry: CategoryRegistry,
}

impl App {
    /// Load config, then the deck (flag beats config beats built-in seed)
    pub fn new(config_path: Option<&Path>, deck_override: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path).context("Failed to load config")?;

        let deck_path = deck_override.or(config.deck.as_deref());
        let registry = match deck_path {
            Some(path) => load_deck(path)
                .with_context(|| format!("Failed to load deck {}", path.display()))?,
            None => builtin_registry().context("Failed to build built-in categories")?,
        };

        Ok(Self { config, registry })
    }

    /// Find a category by name (case-insensitive prefix match)
    pub fn find_category(&self, name: &str) -> Result<&Category> {
        let categories = self.registry.categories();
        let name_lower = name.to_lowercase();

        // Exact match first
        if let Some(c) = categories.iter().find(|c| c.name.to_lowercase() == name_lower) {
            return Ok(c);
        }

        // Prefix match
        let matches: Vec<&Category> = categories.iter()
            .filter(|c| c.name.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!("No category matching '{}'. Available categories:\n{}", name,
                categories.iter().map(|c| format!("  - {}", c.name)).collect::<Vec<_>>().join("\n")),
            1 => Ok(matches[0]),
            _ => bail!("Ambiguous category name '{}'. Matches:\n{}", name,
                matches.iter().map(|c| format!("  - {}", c.name)).collect::<Vec<_>>().join("\n")),
        }
    }

    pub fn search(&self, query: &str) -> FilteredView<'_> {
        filter(&self.registry, query)
    }

    /// Hand the registry over to an interactive browser
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub fn into_browser(self) -> (Browser, Config) {
        let browser = Browser::from_config(self.registry, &self.config);
        (browser, self.config)
    }
}
