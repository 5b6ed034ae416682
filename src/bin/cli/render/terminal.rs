use flashdeck_lib::deck::Category;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Truecolor foreground escape for a `#rrggbb` accent, if it parses
pub fn accent_escape(hex: &str) -> Option<String> {
    let (r, g, b) = parse_hex(hex)?;
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}

/// Parse `#rrggbb` (or `#rgb`) into components
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut parts = digits.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((parts.next()??, parts.next()??, parts.next()??))
        }
        _ => None,
    }
}

/// Render a category with its flashcards to terminal text
pub fn render_category(category: &Category, use_color: bool) -> String {
    let mut lines = Vec::new();

    if use_color {
        let accent = accent_escape(&category.accent_color).unwrap_or_default();
        lines.push(format!("{}{}{}{}", Color::BOLD, accent, category.name, Color::RESET));
        lines.push(format!("{}{}{}", Color::DIM, category.department, Color::RESET));
    } else {
        lines.push(category.name.clone());
        lines.push(category.department.clone());
    }

    lines.push(String::new());
    lines.extend(wrap_lines(&category.description, "", 80));

    for (i, card) in category.flashcards.iter().enumerate() {
        lines.push(String::new());
        let label = format!("Q{}. ", i + 1);
        let question = wrap_lines(&card.question, "    ", 80);
        let answer = wrap_lines(&card.answer, "    ", 80);

        if use_color {
            lines.push(format!("{}{}{}", Color::YELLOW, label.trim_end(), Color::RESET));
            lines.extend(question);
            lines.extend(answer.into_iter().map(|l| format!("{}{}{}", Color::GREEN, l, Color::RESET)));
        } else {
            lines.push(label.trim_end().to_string());
            lines.extend(question);
            lines.extend(answer.into_iter().map(|l| format!("  \u{2192} {}", l.trim_start())));
        }
    }

    lines.join("\n")
}

pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.len());

    for line in text.lines() {
        if line.chars().count() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
        } else {
            let mut current_line = String::new();
            for word in line.split_whitespace() {
                if current_line.is_empty() {
                    current_line = word.to_string();
                } else if current_line.chars().count() + 1 + word.chars().count() <= effective_width {
                    current_line.push(' ');
                    current_line.push_str(word);
                } else {
                    lines.push(format!("{}{}", prefix, current_line));
                    current_line = word.to_string();
                }
            }
            if !current_line.is_empty() {
                lines.push(format!("{}{}", prefix, current_line));
            }
        }
    }

    if lines.is_empty() && !text.is_empty() {
        lines.push(format!("{}{}", prefix, text));
    }

    lines
}
