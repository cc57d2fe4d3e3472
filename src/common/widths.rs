use std::ops::Deref;

use super::symbol::Pattern;

// Segment
//------------------------------------------------------------------------------

/// A single bar or space, measured in modules.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Segment {
    pub is_bar: bool,
    pub width: u8,
}

impl Segment {
    pub fn bar(width: u8) -> Self {
        Self { is_bar: true, width }
    }

    pub fn space(width: u8) -> Self {
        Self { is_bar: false, width }
    }
}

// Module widths
//------------------------------------------------------------------------------

/// Flat bar/space sequence of a whole barcode, alternating and starting with a bar.
///
/// Renderers only need to walk this left to right; symbol boundaries are not
/// preserved.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ModuleWidths(Vec<Segment>);

impl ModuleWidths {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push_pattern(&mut self, pattern: &Pattern) {
        for &w in pattern.widths() {
            let is_bar = self.0.len() % 2 == 0;
            self.0.push(Segment { is_bar, width: w });
        }
    }

    pub fn total_modules(&self) -> usize {
        self.0.iter().map(|s| s.width as usize).sum()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn widths(&self) -> Vec<u8> {
        self.0.iter().map(|s| s.width).collect()
    }

    /// Expands the sequence to one bool per module, `true` for bar modules.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().flat_map(|s| std::iter::repeat(s.is_bar).take(s.width as usize))
    }
}

impl Deref for ModuleWidths {
    type Target = [Segment];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Builds a sequence from raw widths, assigning bar/space by position.
impl From<&[u8]> for ModuleWidths {
    fn from(widths: &[u8]) -> Self {
        let segs = widths.iter().enumerate().map(|(i, &width)| Segment { is_bar: i % 2 == 0, width });
        Self(segs.collect())
    }
}

impl<'a> IntoIterator for &'a ModuleWidths {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
