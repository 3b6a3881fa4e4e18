// Copyright (c) 2026 rezky_nightky

use rand::Rng;

fn push_range(out: &mut Vec<char>, start: u32, end: u32) {
    for v in start..=end {
        if let Some(ch) = char::from_u32(v) {
            out.push(ch);
        }
    }
}

// Halfwidth katakana so every glyph stays one column wide.
pub fn build() -> Vec<char> {
    let mut out = Vec::new();
    push_range(&mut out, 0xFF66, 0xFF9D);
    push_range(&mut out, 0x41, 0x5A);
    push_range(&mut out, 0x30, 0x39);
    out
}

pub fn pick(rng: &mut impl Rng, glyphs: &[char]) -> char {
    if glyphs.is_empty() {
        return '0';
    }
    glyphs[rng.random_range(0..glyphs.len())]
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn build_mixes_katakana_letters_and_digits() {
        let glyphs = build();
        assert!(glyphs.contains(&'ｱ'));
        assert!(glyphs.contains(&'A'));
        assert!(glyphs.contains(&'Z'));
        assert!(glyphs.contains(&'0'));
        assert!(glyphs.contains(&'9'));
    }

    #[test]
    fn pick_always_returns_a_member_of_the_set() {
        let glyphs = build();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(glyphs.contains(&pick(&mut rng, &glyphs)));
        }
    }

    #[test]
    fn pick_survives_an_empty_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&mut rng, &[]), '0');
    }
}
