//! Translation of terminal key events into browser-style key event snapshots

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MediaKeyCode, ModifierKeyCode,
};

use crate::cards::{KeyEventSnapshot, KeyLocation};

/// Build a snapshot of a terminal key event
pub fn snapshot(event: &KeyEvent) -> KeyEventSnapshot {
    let keypad = event.state.contains(KeyEventState::KEYPAD);

    KeyEventSnapshot {
        key: key_name(event.code),
        code: physical_code(event.code, keypad),
        which: legacy_key_code(event.code, keypad),
        location: location(event.code, keypad),
        ctrl_key: event.modifiers.contains(KeyModifiers::CONTROL),
        shift_key: event.modifiers.contains(KeyModifiers::SHIFT),
        alt_key: event.modifiers.contains(KeyModifiers::ALT),
        meta_key: event
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
        repeat: event.kind == KeyEventKind::Repeat,
        detail: 0,
        event_type: event_type(event.kind).to_string(),
    }
}

/// Ctrl+C ends the program instead of being shown
pub fn is_quit(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release
        && event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

fn event_type(kind: KeyEventKind) -> &'static str {
    match kind {
        KeyEventKind::Release => "keyup",
        _ => "keydown",
    }
}

/// DOM `key` value
pub fn key_name(code: KeyCode) -> String {
    let name = match code {
        KeyCode::Char(c) => return c.to_string(),
        KeyCode::F(n) => return format!("F{}", n),
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Esc => "Escape",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        KeyCode::KeypadBegin => "Clear",
        KeyCode::Media(media) => media_key_name(media),
        KeyCode::Modifier(modifier) => modifier_key_name(modifier),
        _ => "Unidentified",
    };
    name.to_string()
}

fn media_key_name(media: MediaKeyCode) -> &'static str {
    match media {
        MediaKeyCode::Play => "MediaPlay",
        MediaKeyCode::Pause => "MediaPause",
        MediaKeyCode::PlayPause => "MediaPlayPause",
        MediaKeyCode::Stop => "MediaStop",
        MediaKeyCode::FastForward => "MediaFastForward",
        MediaKeyCode::Rewind => "MediaRewind",
        MediaKeyCode::TrackNext => "MediaTrackNext",
        MediaKeyCode::TrackPrevious => "MediaTrackPrevious",
        MediaKeyCode::Record => "MediaRecord",
        MediaKeyCode::LowerVolume => "AudioVolumeDown",
        MediaKeyCode::RaiseVolume => "AudioVolumeUp",
        MediaKeyCode::MuteVolume => "AudioVolumeMute",
        _ => "Unidentified",
    }
}

fn modifier_key_name(modifier: ModifierKeyCode) -> &'static str {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta => "Meta",
        ModifierKeyCode::LeftHyper | ModifierKeyCode::RightHyper => "Hyper",
        ModifierKeyCode::IsoLevel3Shift => "AltGraph",
        _ => "Unidentified",
    }
}

/// DOM `code` value, assuming a US layout. Empty when unknown.
pub fn physical_code(code: KeyCode, keypad: bool) -> String {
    let name = match code {
        KeyCode::Char(c) if keypad => return numpad_code(c),
        KeyCode::Char(c) => return char_code(c),
        KeyCode::F(n) => return format!("F{}", n),
        KeyCode::Enter if keypad => "NumpadEnter",
        KeyCode::Enter => "Enter",
        KeyCode::Backspace => "Backspace",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Esc => "Escape",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        KeyCode::KeypadBegin => "Numpad5",
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift => "ShiftLeft",
            ModifierKeyCode::RightShift => "ShiftRight",
            ModifierKeyCode::LeftControl => "ControlLeft",
            ModifierKeyCode::RightControl => "ControlRight",
            ModifierKeyCode::LeftAlt => "AltLeft",
            ModifierKeyCode::RightAlt | ModifierKeyCode::IsoLevel3Shift => "AltRight",
            ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta => "MetaLeft",
            ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta => "MetaRight",
            _ => "",
        },
        _ => "",
    };
    name.to_string()
}

fn char_code(c: char) -> String {
    if c.is_ascii_alphabetic() {
        return format!("Key{}", c.to_ascii_uppercase());
    }
    if c.is_ascii_digit() {
        return format!("Digit{}", c);
    }

    let name = match c {
        ' ' => "Space",
        '!' => "Digit1",
        '@' => "Digit2",
        '#' => "Digit3",
        '$' => "Digit4",
        '%' => "Digit5",
        '^' => "Digit6",
        '&' => "Digit7",
        '*' => "Digit8",
        '(' => "Digit9",
        ')' => "Digit0",
        '-' | '_' => "Minus",
        '=' | '+' => "Equal",
        '[' | '{' => "BracketLeft",
        ']' | '}' => "BracketRight",
        '\\' | '|' => "Backslash",
        ';' | ':' => "Semicolon",
        '\'' | '"' => "Quote",
        ',' | '<' => "Comma",
        '.' | '>' => "Period",
        '/' | '?' => "Slash",
        '`' | '~' => "Backquote",
        _ => "",
    };
    name.to_string()
}

fn numpad_code(c: char) -> String {
    if c.is_ascii_digit() {
        return format!("Numpad{}", c);
    }

    let name = match c {
        '+' => "NumpadAdd",
        '-' => "NumpadSubtract",
        '*' => "NumpadMultiply",
        '/' => "NumpadDivide",
        '.' | ',' => "NumpadDecimal",
        '=' => "NumpadEqual",
        _ => "",
    };
    name.to_string()
}

/// Legacy `which`/`keyCode` value. Zero when unknown.
pub fn legacy_key_code(code: KeyCode, keypad: bool) -> u32 {
    match code {
        KeyCode::Char(c) if keypad => match c {
            '0'..='9' => 96 + (c as u32 - '0' as u32),
            '*' => 106,
            '+' => 107,
            '-' => 109,
            '.' | ',' => 110,
            '/' => 111,
            _ => 0,
        },
        KeyCode::Char(c) => char_key_code(c),
        KeyCode::F(n) => 111 + u32::from(n),
        KeyCode::Backspace => 8,
        KeyCode::Tab | KeyCode::BackTab => 9,
        KeyCode::KeypadBegin => 12,
        KeyCode::Enter => 13,
        KeyCode::Pause => 19,
        KeyCode::CapsLock => 20,
        KeyCode::Esc => 27,
        KeyCode::PageUp => 33,
        KeyCode::PageDown => 34,
        KeyCode::End => 35,
        KeyCode::Home => 36,
        KeyCode::Left => 37,
        KeyCode::Up => 38,
        KeyCode::Right => 39,
        KeyCode::Down => 40,
        KeyCode::PrintScreen => 44,
        KeyCode::Insert => 45,
        KeyCode::Delete => 46,
        KeyCode::Menu => 93,
        KeyCode::NumLock => 144,
        KeyCode::ScrollLock => 145,
        KeyCode::Media(media) => match media {
            MediaKeyCode::MuteVolume => 173,
            MediaKeyCode::LowerVolume => 174,
            MediaKeyCode::RaiseVolume => 175,
            MediaKeyCode::TrackNext => 176,
            MediaKeyCode::TrackPrevious => 177,
            MediaKeyCode::Stop => 178,
            MediaKeyCode::PlayPause => 179,
            _ => 0,
        },
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => 16,
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => 17,
            ModifierKeyCode::LeftAlt
            | ModifierKeyCode::RightAlt
            | ModifierKeyCode::IsoLevel3Shift => 18,
            ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta => 91,
            ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta => 92,
            _ => 0,
        },
        _ => 0,
    }
}

fn char_key_code(c: char) -> u32 {
    if c.is_ascii_alphabetic() {
        return c.to_ascii_uppercase() as u32;
    }
    if c.is_ascii_digit() {
        return c as u32;
    }

    match c {
        ' ' => 32,
        ')' => 48,
        '!' => 49,
        '@' => 50,
        '#' => 51,
        '$' => 52,
        '%' => 53,
        '^' => 54,
        '&' => 55,
        '*' => 56,
        '(' => 57,
        ';' | ':' => 186,
        '=' | '+' => 187,
        ',' | '<' => 188,
        '-' | '_' => 189,
        '.' | '>' => 190,
        '/' | '?' => 191,
        '`' | '~' => 192,
        '[' | '{' => 219,
        '\\' | '|' => 220,
        ']' | '}' => 221,
        '\'' | '"' => 222,
        _ => 0,
    }
}

/// Left/right for sided modifiers, numpad for keypad keys
pub fn location(code: KeyCode, keypad: bool) -> KeyLocation {
    match code {
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift
            | ModifierKeyCode::LeftControl
            | ModifierKeyCode::LeftAlt
            | ModifierKeyCode::LeftSuper
            | ModifierKeyCode::LeftHyper
            | ModifierKeyCode::LeftMeta => KeyLocation::Left,
            ModifierKeyCode::RightShift
            | ModifierKeyCode::RightControl
            | ModifierKeyCode::RightAlt
            | ModifierKeyCode::RightSuper
            | ModifierKeyCode::RightHyper
            | ModifierKeyCode::RightMeta => KeyLocation::Right,
            _ => KeyLocation::Standard,
        },
        KeyCode::KeypadBegin => KeyLocation::Numpad,
        _ if keypad => KeyLocation::Numpad,
        _ => KeyLocation::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn keypad(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind_and_state(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Press,
            KeyEventState::KEYPAD,
        )
    }

    #[test]
    fn letter_with_shift() {
        let snap = snapshot(&press(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(snap.key, "A");
        assert_eq!(snap.code, "KeyA");
        assert_eq!(snap.which, 65);
        assert_eq!(snap.location, KeyLocation::Standard);
        assert!(snap.shift_key);
        assert!(!snap.ctrl_key);
        assert_eq!(snap.event_type, "keydown");
        assert!(!snap.repeat);
        assert_eq!(snap.detail, 0);
    }

    #[test]
    fn shifted_symbol_maps_to_its_key() {
        let snap = snapshot(&press(KeyCode::Char('!'), KeyModifiers::SHIFT));
        assert_eq!(snap.key, "!");
        assert_eq!(snap.code, "Digit1");
        assert_eq!(snap.which, 49);
    }

    #[test]
    fn punctuation_codes() {
        assert_eq!(physical_code(KeyCode::Char(';'), false), "Semicolon");
        assert_eq!(legacy_key_code(KeyCode::Char(';'), false), 186);
        assert_eq!(physical_code(KeyCode::Char(' '), false), "Space");
        assert_eq!(legacy_key_code(KeyCode::Char(' '), false), 32);
    }

    #[test]
    fn named_keys() {
        let snap = snapshot(&press(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!((snap.key.as_str(), snap.code.as_str(), snap.which), ("Enter", "Enter", 13));

        let snap = snapshot(&press(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!((snap.key.as_str(), snap.code.as_str(), snap.which), ("ArrowLeft", "ArrowLeft", 37));

        let snap = snapshot(&press(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!((snap.key.as_str(), snap.code.as_str(), snap.which), ("F5", "F5", 116));

        assert_eq!(key_name(KeyCode::Esc), "Escape");
        assert_eq!(key_name(KeyCode::Null), "Unidentified");
    }

    #[test]
    fn keypad_keys_are_on_the_numpad() {
        let snap = snapshot(&keypad(KeyCode::Char('7')));
        assert_eq!(snap.key, "7");
        assert_eq!(snap.code, "Numpad7");
        assert_eq!(snap.which, 103);
        assert_eq!(snap.location, KeyLocation::Numpad);

        let snap = snapshot(&keypad(KeyCode::Enter));
        assert_eq!(snap.code, "NumpadEnter");
        assert_eq!(snap.location.label(), "Numpad");
    }

    #[test]
    fn sided_modifiers() {
        let snap = snapshot(&press(
            KeyCode::Modifier(ModifierKeyCode::LeftShift),
            KeyModifiers::SHIFT,
        ));
        assert_eq!(snap.key, "Shift");
        assert_eq!(snap.code, "ShiftLeft");
        assert_eq!(snap.which, 16);
        assert_eq!(snap.location, KeyLocation::Left);

        let snap = snapshot(&press(
            KeyCode::Modifier(ModifierKeyCode::RightControl),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(snap.code, "ControlRight");
        assert_eq!(snap.location, KeyLocation::Right);
    }

    #[test]
    fn meta_from_super() {
        let snap = snapshot(&press(KeyCode::Char('k'), KeyModifiers::SUPER));
        assert!(snap.meta_key);
    }

    #[test]
    fn repeat_and_release() {
        let repeat = KeyEvent::new_with_kind(KeyCode::Char('x'), KeyModifiers::NONE, KeyEventKind::Repeat);
        let snap = snapshot(&repeat);
        assert!(snap.repeat);
        assert!(snap.is_keydown());

        let release = KeyEvent::new_with_kind(KeyCode::Char('x'), KeyModifiers::NONE, KeyEventKind::Release);
        let snap = snapshot(&release);
        assert_eq!(snap.event_type, "keyup");
        assert!(!snap.is_keydown());
    }

    #[test]
    fn ctrl_c_quits() {
        assert!(is_quit(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)));
    }
}
