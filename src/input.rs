use museum_core::Command;

/// Which screen has focus when a key arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub intro: bool,
    pub detail_open: bool,
}

/// Map a `KeyboardEvent.key` value onto a gallery command.
#[inline]
pub fn command_for_key(key: &str, ctx: KeyContext) -> Option<Command> {
    if ctx.intro {
        return match key {
            "Enter" | " " => Some(Command::Enter),
            _ => None,
        };
    }
    if ctx.detail_open {
        return match key {
            "Escape" => Some(Command::CloseDetail),
            " " => Some(Command::TogglePlayback),
            _ => None,
        };
    }
    match key {
        "ArrowRight" | "d" | "D" => Some(Command::Forward),
        "ArrowLeft" | "a" | "A" => Some(Command::Backward),
        "Enter" => Some(Command::ActivateCentred),
        _ => None,
    }
}

/// Keys whose browser default (scrolling, activating a focused button) we suppress.
#[inline]
pub fn suppresses_default(key: &str) -> bool {
    matches!(key, " " | "Enter" | "ArrowLeft" | "ArrowRight")
}

/// Parse an image-dot index from its data attribute. Anything that is not a
/// plain non-negative integer is rejected here and never reaches the session.
#[inline]
pub fn parse_image_index(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[inline]
pub fn parse_exhibit_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// CSS transform for a card at `offset` (x right, y down) with `scale`.
#[inline]
pub fn card_transform(offset_x: f32, offset_y: f32, scale: f32) -> String {
    format!(
        "transform: translateX({:.0}px) translateY({:.0}px) scale({});",
        offset_x, offset_y, scale
    )
}
