// Host-side tests for the key -> command mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use museum_core::Command;

const HALL: KeyContext = KeyContext {
    intro: false,
    detail_open: false,
};
const INTRO: KeyContext = KeyContext {
    intro: true,
    detail_open: false,
};
const DETAIL: KeyContext = KeyContext {
    intro: false,
    detail_open: true,
};

#[test]
fn arrows_and_letters_move_in_the_hall() {
    assert_eq!(command_for_key("ArrowRight", HALL), Some(Command::Forward));
    assert_eq!(command_for_key("d", HALL), Some(Command::Forward));
    assert_eq!(command_for_key("D", HALL), Some(Command::Forward));
    assert_eq!(command_for_key("ArrowLeft", HALL), Some(Command::Backward));
    assert_eq!(command_for_key("a", HALL), Some(Command::Backward));
    assert_eq!(command_for_key("A", HALL), Some(Command::Backward));
}

#[test]
fn enter_opens_centred_exhibit_in_the_hall() {
    assert_eq!(command_for_key("Enter", HALL), Some(Command::ActivateCentred));
    assert_eq!(command_for_key("Escape", HALL), None);
    assert_eq!(command_for_key(" ", HALL), None);
}

#[test]
fn intro_only_accepts_enter_and_space() {
    assert_eq!(command_for_key("Enter", INTRO), Some(Command::Enter));
    assert_eq!(command_for_key(" ", INTRO), Some(Command::Enter));
    assert_eq!(command_for_key("ArrowRight", INTRO), None);
    assert_eq!(command_for_key("Escape", INTRO), None);
}

#[test]
fn detail_keys_close_and_toggle_narration() {
    assert_eq!(command_for_key("Escape", DETAIL), Some(Command::CloseDetail));
    assert_eq!(command_for_key(" ", DETAIL), Some(Command::TogglePlayback));
    // The corridor is frozen behind the modal.
    assert_eq!(command_for_key("ArrowRight", DETAIL), None);
    assert_eq!(command_for_key("ArrowLeft", DETAIL), None);
    assert_eq!(command_for_key("Enter", DETAIL), None);
}

#[test]
fn unknown_keys_map_to_nothing() {
    for key in ["x", "Shift", "F5", "Tab", ""] {
        assert_eq!(command_for_key(key, HALL), None, "key {key:?}");
        assert_eq!(command_for_key(key, DETAIL), None, "key {key:?}");
    }
}

#[test]
fn default_suppressed_for_scrolling_keys_only() {
    assert!(suppresses_default(" "));
    assert!(suppresses_default("Enter"));
    assert!(suppresses_default("ArrowLeft"));
    assert!(suppresses_default("ArrowRight"));
    assert!(!suppresses_default("Escape"));
    assert!(!suppresses_default("d"));
}
