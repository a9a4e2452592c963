//! Full-rebuild rendering: the current filtered/sorted view becomes a
//! fresh set of [`CardView`] projections on every render. Nothing is
//! diffed against the previous render; card views are disposable and hold
//! no authoritative state.

use crate::link;
use crate::model::{Field, Recipe};
use crate::ui::session::EditSession;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

/// One rendered card. Editing cards show their in-progress drafts; the
/// link keeps both the stored href and the short display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub link: String,
    pub link_text: String,
    pub editing: bool,
}

/// Discard-and-rebuild: project every recipe of the view into a card,
/// overlaying session drafts for cards that are mid-edit.
pub fn build_cards(view: &[Recipe], session: &EditSession) -> Vec<CardView> {
    view.iter()
        .map(|recipe| {
            let field = |f: Field| {
                session
                    .draft(recipe.id, f)
                    .unwrap_or(recipe.field(f))
                    .to_string()
            };
            let link = field(Field::Link);
            CardView {
                id: recipe.id,
                name: field(Field::Name),
                category: field(Field::Category),
                link_text: link::display_text(&link),
                link,
                editing: session.is_editing(recipe.id),
            }
        })
        .collect()
}

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 12;
const EDIT_MARKER: &str = "✎";

/// Plain-text projection of the card list, one line per card. Styling is
/// left to the caller; this only does layout.
pub fn render_lines(cards: &[CardView]) -> Vec<String> {
    if cards.is_empty() {
        return vec!["No recipes yet.".to_string()];
    }

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let idx_str = format!("{:>3}. ", i + 1);
            let marker = if card.editing {
                format!("{} ", EDIT_MARKER)
            } else {
                "  ".to_string()
            };

            let category = truncate_to_width(&card.category, CATEGORY_WIDTH);
            let category_padding = CATEGORY_WIDTH.saturating_sub(category.width());

            let fixed = idx_str.width() + marker.width() + CATEGORY_WIDTH + card.link_text.width();
            let available = LINE_WIDTH.saturating_sub(fixed + 2);
            let name = truncate_to_width(&card.name, available);
            let name_padding = available.saturating_sub(name.width());

            format!(
                "{}{}{}{} {}{} {}",
                marker,
                idx_str,
                name,
                " ".repeat(name_padding),
                category,
                " ".repeat(category_padding),
                card.link_text
            )
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
