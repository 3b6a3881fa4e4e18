// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierStyle {
    pub fg: Color,
    pub dim: bool,
}

// Fixed five-tier palette, brightest first. The thresholds are a visual
// tuning choice; the ordering (hotter cell, brighter tier) is not.
pub fn style_for(intensity: u8) -> TierStyle {
    let (fg, dim) = match intensity {
        v if v > 220 => (Color::White, false),
        v if v > 180 => (Color::Green, false),
        v if v > 120 => (Color::DarkGreen, false),
        v if v > 60 => (Color::DarkGreen, true),
        _ => (Color::DarkGrey, false),
    };
    TierStyle { fg, dim }
}
