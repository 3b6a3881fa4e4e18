// Copyright (c) 2026 rezky_nightky

use std::io::{Result, Write};

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};
use rand::rngs::StdRng;

use crate::buffer::IntensityBuffer;
use crate::glyphs;
use crate::palette::{style_for, TierStyle};

// Full-frame pass: every cell is written every tick, queued and flushed as
// one buffered write. Rows are addressed with a cursor move instead of a
// trailing newline so the bottom row never scrolls the screen.
pub fn draw(
    out: &mut impl Write,
    buf: &IntensityBuffer,
    glyph_set: &[char],
    rng: &mut StdRng,
) -> Result<()> {
    let mut cur: Option<TierStyle> = None;

    for y in 0..buf.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..buf.width() {
            let v = buf.get(x, y);
            if v == 0 {
                out.queue(Print(' '))?;
                continue;
            }

            let style = style_for(v);
            if cur != Some(style) {
                if style.dim != cur.is_some_and(|c| c.dim) {
                    out.queue(SetAttribute(if style.dim {
                        Attribute::Dim
                    } else {
                        Attribute::NormalIntensity
                    }))?;
                }
                if cur.map(|c| c.fg) != Some(style.fg) {
                    out.queue(SetForegroundColor(style.fg))?;
                }
                cur = Some(style);
            }

            out.queue(Print(glyphs::pick(rng, glyph_set)))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn render_to_string(buf: &IntensityBuffer) -> String {
        let glyph_set = glyphs::build();
        let mut rng = StdRng::seed_from_u64(9);
        let mut out: Vec<u8> = Vec::new();
        draw(&mut out, buf, &glyph_set, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn dark_cells_render_as_plain_spaces() {
        let buf = IntensityBuffer::new(4, 2);
        let s = render_to_string(&buf);

        // home position, spaces, no foreground color anywhere
        assert!(s.starts_with("\x1b[1;1H"));
        assert!(s.contains("    "));
        assert!(!s.contains("\x1b[38"));
    }

    #[test]
    fn lit_cells_carry_a_color_and_a_glyph() {
        let glyph_set = glyphs::build();
        let mut buf = IntensityBuffer::new(1, 1);
        buf.paint(0, 0, 255);
        let s = render_to_string(&buf);

        assert!(s.contains("\x1b[38"));

        // the glyph is the single printed char between the color code and
        // the trailing resets
        let color_end = s.find("\x1b[38").unwrap();
        let after = &s[color_end..];
        let m = after.find('m').unwrap();
        let glyph = after[m + 1..].chars().next().unwrap();
        assert!(glyph_set.contains(&glyph));
    }

    #[test]
    fn dim_tier_sets_and_later_clears_the_dim_attribute() {
        let mut buf = IntensityBuffer::new(2, 1);
        buf.paint(0, 0, 100);
        buf.paint(1, 0, 255);
        let s = render_to_string(&buf);

        let dim = s.find("\x1b[2m").expect("dim attribute emitted");
        let normal = s.find("\x1b[22m").expect("dim attribute cleared");
        assert!(dim < normal);
    }

    #[test]
    fn each_row_starts_with_a_cursor_move() {
        let buf = IntensityBuffer::new(2, 3);
        let s = render_to_string(&buf);
        for row in 1..=3 {
            assert!(s.contains(&format!("\x1b[{};1H", row)));
        }
    }

    #[test]
    fn frame_ends_with_a_style_reset() {
        let mut buf = IntensityBuffer::new(1, 1);
        buf.paint(0, 0, 200);
        let s = render_to_string(&buf);
        assert!(s.ends_with("\x1b[0m") || s.ends_with("\x1b[0m\x1b[0m"));
    }

    #[test]
    fn unchanged_style_is_not_re_emitted() {
        let mut buf = IntensityBuffer::new(8, 1);
        for x in 0..8 {
            buf.paint(x, 0, 255);
        }
        let s = render_to_string(&buf);
        assert_eq!(s.matches("\x1b[38").count(), 1);
    }
}
