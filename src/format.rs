use crate::Error;

/// The glyph set used to paint a bar.
///
/// `fill` runs from the least filled glyph to the fully filled one; the last
/// entry is used for every complete cell and the others for the partial cell
/// at the boundary.
///
/// ```rust,ignore
/// let f = Format::new(&["="], " ").head(">").ends("[", "]");
/// // => [=====>        ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub(crate) fill: &'static [&'static str],
    pub(crate) head: &'static str,
    pub(crate) empty: &'static str,
    pub(crate) left_end: &'static str,
    pub(crate) right_end: &'static str,
}

impl Format {
    /// Every predefined style, in catalog order.
    pub const CATALOG: [Format; 9] = [
        Self::blocks(),
        Self::dot(),
        Self::square(),
        Self::circle(),
        Self::triangle(),
        Self::large_square(),
        Self::braille(),
        Self::ascii(),
        Self::eighths(),
    ];

    /// Creates a style without head or end markers.
    ///
    /// Panics if `fill` is empty; use [`Format::try_new`] for styles built at runtime.
    pub const fn new(fill: &'static [&'static str], empty: &'static str) -> Self {
        assert!(!fill.is_empty(), "fill must contain at least one glyph");
        Self {
            fill,
            head: "",
            empty,
            left_end: "",
            right_end: "",
        }
    }

    /// Like [`Format::new`] but reports an empty `fill` as [`Error::EmptyFill`].
    pub fn try_new(fill: &'static [&'static str], empty: &'static str) -> Result<Self, Error> {
        if fill.is_empty() {
            return Err(Error::EmptyFill);
        }
        Ok(Self::new(fill, empty))
    }

    /// Sets the glyph drawn between the filled and empty regions.
    pub const fn head(mut self, head: &'static str) -> Self {
        self.head = head;
        self
    }

    /// Sets the delimiters drawn around the bar.
    pub const fn ends(mut self, left: &'static str, right: &'static str) -> Self {
        self.left_end = left;
        self.right_end = right;
        self
    }

    /// Returns a copy of the catalog entry at `index`.
    pub fn catalog(index: usize) -> Option<Self> {
        Self::CATALOG.get(index).copied()
    }

    /// `█▓░░░░░░░░░░ 9%`
    pub const fn blocks() -> Self {
        Self::new(&["▓", "█"], "░")
    }

    /// `⬤◯◯◯◯◯◯◯◯◯ 9%`
    pub const fn dot() -> Self {
        Self::new(&["⬤"], "◯")
    }

    /// `■□□□□□□□□□□□ 9%`
    pub const fn square() -> Self {
        Self::new(&["■"], "□")
    }

    /// `⚫⚫⚫⚫⚪⚪⚪⚪⚪⚪ 41%`
    pub const fn circle() -> Self {
        Self::new(&["⚫"], "⚪")
    }

    /// `▰▰▰▰▱▱▱▱▱▱ 41%`
    pub const fn triangle() -> Self {
        Self::new(&["▰"], "▱")
    }

    /// `⬛⬛⬛⬛⬜⬜⬜⬜⬜⬜ 41%`
    pub const fn large_square() -> Self {
        Self::new(&["⬛"], "⬜")
    }

    /// `⣿⣿⣿⣿⡟⣀⣀⣀⣀⣀⣀ 41%`
    pub const fn braille() -> Self {
        Self::new(&["⡀", "⡄", "⡆", "⡇", "⡏", "⡟", "⡿", "⣿"], "⣀")
    }

    /// `[======>             ]`
    pub const fn ascii() -> Self {
        Self::new(&["="], " ").head(">").ends("[", "]")
    }

    /// `▉▉▋            41%`
    pub const fn eighths() -> Self {
        Self::new(&["▏", "▎", "▍", "▌", "▋", "▊", "▉"], " ")
    }

    /// Fill levels per cell.
    pub fn levels(&self) -> usize {
        self.fill.len()
    }

    /// The glyph for a completely filled cell.
    pub fn full(&self) -> &'static str {
        self.fill[self.fill.len() - 1]
    }

    /// The glyph for a cell filled to `level` (`0..levels()`).
    pub fn partial(&self, level: usize) -> Option<&'static str> {
        self.fill.get(level).copied()
    }

    pub fn fill_glyphs(&self) -> &'static [&'static str] {
        self.fill
    }

    pub fn head_glyph(&self) -> &'static str {
        self.head
    }

    pub fn empty_glyph(&self) -> &'static str {
        self.empty
    }

    pub fn left_end(&self) -> &'static str {
        self.left_end
    }

    pub fn right_end(&self) -> &'static str {
        self.right_end
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::blocks()
    }
}

/// Display width of `s` in columns, counted as codepoints.
pub(crate) fn display_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_stable() {
        for i in 0..Format::CATALOG.len() {
            assert_eq!(Format::catalog(i), Format::catalog(i));
            assert_eq!(Format::catalog(i).unwrap(), Format::CATALOG[i]);
        }
        assert_eq!(Format::catalog(9), None);
    }

    #[test]
    fn catalog_order_matches_named_styles() {
        assert_eq!(Format::default(), Format::CATALOG[0]);
        assert_eq!(Format::CATALOG[6].fill_glyphs().len(), 8);
        assert_eq!(Format::CATALOG[7].head_glyph(), ">");
        assert_eq!(Format::CATALOG[7].left_end(), "[");
        assert_eq!(Format::CATALOG[7].right_end(), "]");
        assert_eq!(Format::CATALOG[8].empty_glyph(), " ");
    }

    #[test]
    fn full_is_last_fill_glyph() {
        assert_eq!(Format::blocks().full(), "█");
        assert_eq!(Format::blocks().partial(0), Some("▓"));
        assert_eq!(Format::braille().full(), "⣿");
        assert_eq!(Format::eighths().partial(7), None);
    }

    #[test]
    fn empty_fill_is_rejected() {
        assert!(matches!(Format::try_new(&[], " "), Err(Error::EmptyFill)));
        assert!(Format::try_new(&["#"], ".").is_ok());
    }

    #[test]
    fn width_counts_codepoints_not_bytes() {
        assert_eq!("⣿".len(), 3);
        assert_eq!(display_width("⣿"), 1);
        assert_eq!(display_width("[⬛⬜]"), 4);
        assert_eq!(display_width(""), 0);
    }
}
