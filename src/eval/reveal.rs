use crate::foundation::core::{Progress, Range};

/// Character rendered in place of whitespace so revealed text keeps its layout.
pub const NBSP: char = '\u{00A0}';

/// One revealable character and the sub-range it owns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// Source character.
    pub ch: char,
    /// Character handed to the renderer (whitespace becomes [`NBSP`]).
    pub display: char,
    /// Slice of the parent range owned by this character.
    pub range: Range,
}

/// Splits a text block's range evenly across its characters and maps progress to opacity.
///
/// Character `i` of `n` owns `[r0 + i*step, r0 + (i+1)*step)` with `step = (r1 - r0) / n`.
/// Adjacent glyphs share their boundary value exactly, and the last glyph ends exactly at `r1`.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterRevealSequencer {
    range: Range,
    glyphs: Vec<Glyph>,
}

impl CharacterRevealSequencer {
    /// Decompose `text` over `range`. Empty text yields a sequencer with no glyphs.
    pub fn new(text: &str, range: Range) -> Self {
        let count = text.chars().count();
        let mut glyphs = Vec::with_capacity(count);
        if count > 0 {
            let r0 = range.start();
            let step = range.span() / count as f64;
            for (i, ch) in text.chars().enumerate() {
                let start = r0 + i as f64 * step;
                let end = if i + 1 == count {
                    range.end()
                } else {
                    r0 + (i + 1) as f64 * step
                };
                glyphs.push(Glyph {
                    ch,
                    display: if ch.is_whitespace() { NBSP } else { ch },
                    range: Range::derived(start, end),
                });
            }
        }
        Self { range, glyphs }
    }

    /// Parent range of the block.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Glyphs in text order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Return `true` for empty text (the block is a no-op).
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Opacity of glyph `index` at `progress`: 0 before its slice, linear inside, 1 after.
    pub fn opacity(&self, index: usize, progress: Progress) -> Option<f64> {
        self.glyphs
            .get(index)
            .map(|g| g.range.local(progress).clamp(0.0, 1.0))
    }

    /// Write every glyph's opacity at `progress` into `out`.
    pub fn opacities_into(&self, progress: Progress, out: &mut Vec<f64>) {
        out.clear();
        out.extend(
            self.glyphs
                .iter()
                .map(|g| g.range.local(progress).clamp(0.0, 1.0)),
        );
    }

    /// Every glyph's opacity at `progress`.
    pub fn opacities(&self, progress: Progress) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.glyphs.len());
        self.opacities_into(progress, &mut out);
        out
    }

    /// Text as handed to the renderer, whitespace replaced by [`NBSP`].
    pub fn display_text(&self) -> String {
        self.glyphs.iter().map(|g| g.display).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/reveal.rs"]
mod tests;
