//! Card rendering.
//!
//! Two projections of a card record: an HTML fragment for the results panel
//! and a plain-text form for the clipboard. Both show the same fields in the
//! same order — name and mana cost on a header line, the type line, the
//! oracle text paragraph by paragraph, then flavor text and power/toughness
//! when present.
//!
//! All API-sourced text is escaped before it reaches markup; nothing is
//! interpolated raw.

use html_escape::encode_text;
use scrydeck::Card;

/// Render a card record as an HTML fragment.
///
/// Mana cost is omitted when absent; flavor text only appears when present;
/// power/toughness only when power is present (the is-a-creature proxy).
/// Oracle text keeps its paragraph structure, one `<p>` per line.
///
/// # Example
///
/// ```
/// use scrydeck_engine::{Card, render::render_card};
///
/// let card = Card {
///     name: "Lightning Bolt".into(),
///     mana_cost: Some("{R}".into()),
///     type_line: "Instant".into(),
///     oracle_text: Some("Lightning Bolt deals 3 damage to any target.".into()),
///     flavor_text: None,
///     power: None,
///     toughness: None,
/// };
///
/// let html = render_card(&card);
/// assert!(html.contains(r#"<span class="card__name">Lightning Bolt</span>"#));
/// assert!(!html.contains("card__flavor-text"));
/// ```
pub fn render_card(card: &Card) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="card">"#);

    html.push_str(&format!(
        r#"<p class="card__header"><span class="card__name">{}</span>"#,
        encode_text(&card.name)
    ));
    if let Some(cost) = &card.mana_cost {
        html.push_str(&format!(
            r#"<span class="card__mana-cost">{}</span>"#,
            encode_text(cost)
        ));
    }
    html.push_str("</p>");

    html.push_str(&format!(
        r#"<p class="card__type-line">{}</p>"#,
        encode_text(&card.type_line)
    ));

    html.push_str(r#"<div class="card__oracle-text">"#);
    if let Some(oracle) = &card.oracle_text {
        for line in oracle.split('\n') {
            html.push_str(&format!("<p>{}</p>", encode_text(line)));
        }
    }
    html.push_str("</div>");

    if let Some(flavor) = &card.flavor_text {
        html.push_str(&format!(
            r#"<p class="card__flavor-text">{}</p>"#,
            encode_text(flavor)
        ));
    }

    if let Some(power) = &card.power {
        let toughness = card.toughness.as_deref().unwrap_or_default();
        html.push_str(&format!(
            r#"<p class="card__pt">{}/{}</p>"#,
            encode_text(power),
            encode_text(toughness)
        ));
    }

    html.push_str("</div>");
    html
}

/// Render a card record as plain text, one field per line.
///
/// This is the clipboard projection of [`render_card`]: the same fields in
/// the same order, without markup.
pub fn render_card_text(card: &Card) -> String {
    let mut lines = Vec::new();

    match &card.mana_cost {
        Some(cost) => lines.push(format!("{} {}", card.name, cost)),
        None => lines.push(card.name.clone()),
    }
    lines.push(card.type_line.clone());

    if let Some(oracle) = &card.oracle_text {
        lines.extend(oracle.split('\n').map(str::to_string));
    }
    if let Some(flavor) = &card.flavor_text {
        lines.push(flavor.clone());
    }
    if let Some(power) = &card.power {
        let toughness = card.toughness.as_deref().unwrap_or_default();
        lines.push(format!("{}/{}", power, toughness));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature() -> Card {
        Card {
            name: "Llanowar Elves".into(),
            mana_cost: Some("{G}".into()),
            type_line: "Creature — Elf Druid".into(),
            oracle_text: Some("{T}: Add {G}.".into()),
            flavor_text: Some("One bone broken for every twig snapped underfoot.".into()),
            power: Some("1".into()),
            toughness: Some("1".into()),
        }
    }

    fn land() -> Card {
        Card {
            name: "Island".into(),
            mana_cost: None,
            type_line: "Basic Land — Island".into(),
            oracle_text: None,
            flavor_text: None,
            power: None,
            toughness: None,
        }
    }

    #[test]
    fn test_full_card() {
        let html = render_card(&creature());
        assert!(html.contains(r#"<span class="card__name">Llanowar Elves</span>"#));
        assert!(html.contains(r#"<span class="card__mana-cost">{G}</span>"#));
        assert!(html.contains(r#"<p class="card__type-line">Creature — Elf Druid</p>"#));
        assert!(html.contains(r#"<p class="card__pt">1/1</p>"#));
        assert!(html.contains("card__flavor-text"));
    }

    #[test]
    fn test_optional_blocks_omitted() {
        let html = render_card(&land());
        assert!(!html.contains("card__mana-cost"));
        assert!(!html.contains("card__flavor-text"));
        assert!(!html.contains("card__pt"));
        // The type line still always renders.
        assert!(html.contains(r#"<p class="card__type-line">Basic Land — Island</p>"#));
    }

    #[test]
    fn test_oracle_paragraphs_split_on_line_breaks() {
        let mut card = land();
        card.oracle_text = Some("First ability.\nSecond ability.\nThird ability.".into());

        let html = render_card(&card);
        assert!(html.contains("<p>First ability.</p><p>Second ability.</p><p>Third ability.</p>"));
    }

    #[test]
    fn test_api_text_is_escaped() {
        let mut card = land();
        card.name = "A <script> & friends".into();
        card.oracle_text = Some("1 < 2".into());

        let html = render_card(&card);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<p>1 &lt; 2</p>"));
    }

    #[test]
    fn test_text_projection() {
        let text = render_card_text(&creature());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Llanowar Elves {G}");
        assert_eq!(lines[1], "Creature — Elf Druid");
        assert_eq!(lines[2], "{T}: Add {G}.");
        assert_eq!(lines.last(), Some(&"1/1"));
    }

    #[test]
    fn test_text_projection_without_cost() {
        let text = render_card_text(&land());
        assert_eq!(text, "Island\nBasic Land — Island\n");
    }
}
