//! Ordered collection of input segments.
//!
//! Segments are appended one at a time and the store is cleared as a whole;
//! there is no removal or mutation of individual entries.

use crate::basics::Segment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Segment>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment, preserving insertion order.
    pub fn add(&mut self, seg: Segment) {
        self.lines.push(seg);
    }

    pub fn add_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.add(Segment::from_coords(x1, y1, x2, y2));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.lines
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a LineStore {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Segment> for LineStore {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
