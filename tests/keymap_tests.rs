// Host-side tests for keyboard mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/keymap.rs");
}

use galaxy_core::LayoutMode;
use keymap::*;

#[test]
fn digits_follow_button_order() {
    for (i, mode) in LayoutMode::ALL.iter().enumerate() {
        let key = (i + 1).to_string();
        assert_eq!(layout_for_key(&key), Some(*mode), "key {key}");
    }
}

#[test]
fn other_keys_do_not_switch_layout() {
    for key in ["0", "7", "h", "Enter", "F1", ""] {
        assert_eq!(layout_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn escape_closes() {
    assert!(is_close_key("Escape"));
    assert!(is_close_key("Esc"));
    assert!(!is_close_key("q"));
}
