use crate::api::models::StrategyAdvice;
use crate::utils::text::center_text;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

const CARD_WIDTH: u16 = 72;

/// Render the advice card: glyph (when present), title, quote,
/// interpretation, numbered steps. Pure string production.
pub fn render_advice(advice: &StrategyAdvice) -> String {
    let mut out = String::new();

    if let Some(glyph) = &advice.chinese_character {
        out.push_str(&center_text(glyph, CARD_WIDTH as usize));
        out.push('\n');
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(CARD_WIDTH);

    table.set_header(vec![
        Cell::new(&advice.title)
            .add_attribute(Attribute::Bold)
            .fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new(format!("\u{201c}{}\u{201d}", advice.original_quote))
            .add_attribute(Attribute::Italic),
    ]);
    table.add_row(vec![Cell::new(&advice.interpretation)]);

    let steps = advice
        .actionable_advice
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");
    table.add_row(vec![Cell::new(steps)]);

    out.push_str(&table.to_string());
    out
}
