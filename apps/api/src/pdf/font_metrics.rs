//! Static width tables for the two builtin PDF fonts used by the exporter.
//!
//! Widths are in em units (relative to font size), taken from the Adobe core
//! AFM metrics for Helvetica and Helvetica-Bold, rounded to three decimals.
//! Used to right-align the footer page label — the layout path itself wraps
//! by character count and never needs exact glyph widths.
//!
//! Tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32. Non-ASCII falls back to `average_char_width`,
//! which slightly over-estimates narrow accented glyphs; for right alignment
//! that only nudges the label left by a fraction of a millimetre.

use super::layout::FontKind;

/// Static character-width table for one builtin font.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for codepoints outside 0x20..=0x7E.
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in millimetres at the given font size in points.
    pub fn measure_mm(&self, s: &str, size_pt: f32) -> f32 {
        // 1 pt = 25.4/72 mm
        self.measure_str(s) * size_pt * (25.4 / 72.0)
    }
}

/// Helvetica (regular) — Adobe core AFM widths / 1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
};

/// Helvetica-Bold — Adobe core AFM widths / 1000.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.584,
};

/// Returns the static metric table for a font kind.
pub fn get_metrics(font: FontKind) -> &'static FontMetricTable {
    match font {
        FontKind::Regular => &HELVETICA_TABLE,
        FontKind::Bold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_is_zero() {
        assert_eq!(get_metrics(FontKind::Regular).measure_str(""), 0.0);
    }

    #[test]
    fn test_space_width_matches_afm() {
        let w = get_metrics(FontKind::Regular).measure_str(" ");
        assert!((w - 0.278).abs() < 1e-4);
    }

    #[test]
    fn test_digits_are_tabular() {
        // All Helvetica digits share the 0.556 em advance, so page numbers
        // of equal digit count measure identically.
        let m = get_metrics(FontKind::Regular);
        assert!((m.measure_str("1 de 1") - m.measure_str("9 de 9")).abs() < 1e-4);
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "Página 2 de 3";
        let regular = get_metrics(FontKind::Regular).measure_str(text);
        let bold = get_metrics(FontKind::Bold).measure_str(text);
        assert!(bold > regular);
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let m = get_metrics(FontKind::Regular);
        let w = m.measure_str("á");
        assert!((w - m.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_measure_mm_scales_with_size() {
        let m = get_metrics(FontKind::Regular);
        let at_9 = m.measure_mm("Página 1 de 1", 9.0);
        let at_18 = m.measure_mm("Página 1 de 1", 18.0);
        assert!((at_18 - 2.0 * at_9).abs() < 1e-3);
    }
}
