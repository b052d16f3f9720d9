//! Information cards module
//!
//! The cards shown for a key press are an ordered list of label/formatter
//! pairs. Adding a card means adding an entry to [`CARDS`].

pub mod snapshot;

use serde::Serialize;

pub use snapshot::{KeyEventSnapshot, KeyLocation};

/// A card definition: header label, footer hint and body formatter
pub struct InformationCard {
    pub label: &'static str,
    pub footer: &'static str,
    pub format: fn(&KeyEventSnapshot) -> String,
}

/// Rendered content of one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFragment {
    pub label: &'static str,
    pub footer: &'static str,
    pub body: String,
}

/// All cards, in display order
pub const CARDS: [InformationCard; 6] = [
    InformationCard { label: "Key", footer: "event.key", format: format_key },
    InformationCard { label: "Code", footer: "event.code", format: format_code },
    InformationCard { label: "Which", footer: "event.which", format: format_which },
    InformationCard { label: "Location", footer: "event.location", format: format_location },
    InformationCard { label: "Modifiers", footer: "event.<X>Key", format: format_modifiers },
    InformationCard { label: "Dump", footer: "event", format: format_dump },
];

/// Build one fragment per card for the given event
pub fn fragments(snapshot: &KeyEventSnapshot) -> Vec<CardFragment> {
    CARDS
        .iter()
        .map(|card| CardFragment {
            label: card.label,
            footer: card.footer,
            body: (card.format)(snapshot),
        })
        .collect()
}

/// Fragments with empty bodies, i.e. the bare card layout
pub fn empty_fragments() -> Vec<CardFragment> {
    CARDS
        .iter()
        .map(|card| CardFragment {
            label: card.label,
            footer: card.footer,
            body: String::new(),
        })
        .collect()
}

fn format_key(snapshot: &KeyEventSnapshot) -> String {
    snapshot.key.clone()
}

fn format_code(snapshot: &KeyEventSnapshot) -> String {
    snapshot.code.clone()
}

fn format_which(snapshot: &KeyEventSnapshot) -> String {
    snapshot.which.to_string()
}

fn format_location(snapshot: &KeyEventSnapshot) -> String {
    format!(
        "{}\n({})",
        snapshot.location.index(),
        snapshot.location.label()
    )
}

fn format_modifiers(snapshot: &KeyEventSnapshot) -> String {
    format!(
        "Ctrl: {}\nShift: {}\nAlt: {}",
        snapshot.ctrl_key, snapshot.shift_key, snapshot.alt_key
    )
}

/// Field order follows the raw dump layout, alphabetical by DOM name
#[derive(Serialize)]
struct EventDump<'a> {
    #[serde(rename = "altKey")]
    alt_key: bool,
    code: &'a str,
    #[serde(rename = "ctrlKey")]
    ctrl_key: bool,
    detail: u32,
    key: &'a str,
    location: KeyLocation,
    #[serde(rename = "metaKey")]
    meta_key: bool,
    repeat: bool,
    #[serde(rename = "shiftKey")]
    shift_key: bool,
    #[serde(rename = "type")]
    event_type: &'a str,
    which: u32,
}

fn format_dump(snapshot: &KeyEventSnapshot) -> String {
    let dump = EventDump {
        alt_key: snapshot.alt_key,
        code: &snapshot.code,
        ctrl_key: snapshot.ctrl_key,
        detail: snapshot.detail,
        key: &snapshot.key,
        location: snapshot.location,
        meta_key: snapshot.meta_key,
        repeat: snapshot.repeat,
        shift_key: snapshot.shift_key,
        event_type: &snapshot.event_type,
        which: snapshot.which,
    };

    // Plain data of bools, numbers and strings always serializes
    serde_json::to_string_pretty(&dump).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift_a() -> KeyEventSnapshot {
        KeyEventSnapshot {
            key: "A".to_string(),
            code: "KeyA".to_string(),
            which: 65,
            location: KeyLocation::Standard,
            shift_key: true,
            event_type: "keydown".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn six_cards_in_order() {
        let labels: Vec<_> = fragments(&shift_a()).iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Key", "Code", "Which", "Location", "Modifiers", "Dump"]);
    }

    #[test]
    fn simple_cards_show_raw_values() {
        let fragments = fragments(&shift_a());
        assert_eq!(fragments[0].body, "A");
        assert_eq!(fragments[1].body, "KeyA");
        assert_eq!(fragments[2].body, "65");
    }

    #[test]
    fn location_card_names_the_location() {
        let snapshot = KeyEventSnapshot {
            location: KeyLocation::Numpad,
            ..shift_a()
        };
        assert_eq!(fragments(&snapshot)[3].body, "3\n(Numpad)");
        assert_eq!(fragments(&shift_a())[3].body, "0\n(Standard)");
    }

    #[test]
    fn modifiers_card_lists_ctrl_shift_alt() {
        assert_eq!(
            fragments(&shift_a())[4].body,
            "Ctrl: false\nShift: true\nAlt: false"
        );
    }

    #[test]
    fn dump_keeps_dom_field_order() {
        let dump = &fragments(&shift_a())[5].body;
        let keys: Vec<_> = dump
            .lines()
            .filter_map(|line| line.trim().strip_prefix('"'))
            .filter_map(|line| line.split('"').next())
            .collect();
        assert_eq!(
            keys,
            [
                "altKey", "code", "ctrlKey", "detail", "key", "location", "metaKey", "repeat",
                "shiftKey", "type", "which"
            ]
        );
        assert!(dump.contains("\"location\": 0"));
        assert!(dump.contains("\"type\": \"keydown\""));
    }

    #[test]
    fn empty_layout_has_blank_bodies() {
        let layout = empty_fragments();
        assert_eq!(layout.len(), CARDS.len());
        assert!(layout.iter().all(|f| f.body.is_empty()));
    }
}
