/// Per-pixel classification produced by the Newton engine.
///
/// `Undetermined` covers both a vanishing derivative mid-iteration and an
/// exhausted iteration budget; it is a defined sentinel, never folded into a
/// real root index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RootClass {
    Root(usize),
    Undetermined,
}

/// `width × height` grid of escape iteration counts, row-major.
///
/// Owned by the engine call that produced it; rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    width: u32,
    height: u32,
    counts: Vec<u32>,
}

impl IterationField {
    pub(crate) fn from_counts(width: u32, height: u32, counts: Vec<u32>) -> Self {
        debug_assert_eq!(counts.len(), width as usize * height as usize);

        Self {
            width,
            height,
            counts,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.counts[y as usize * self.width as usize + x as usize]
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}

/// `width × height` grid of [`RootClass`] values, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootField {
    width: u32,
    height: u32,
    classes: Vec<RootClass>,
}

impl RootField {
    pub(crate) fn from_classes(width: u32, height: u32, classes: Vec<RootClass>) -> Self {
        debug_assert_eq!(classes.len(), width as usize * height as usize);

        Self {
            width,
            height,
            classes,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> RootClass {
        self.classes[y as usize * self.width as usize + x as usize]
    }

    #[must_use]
    pub fn classes(&self) -> &[RootClass] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_field_indexing_is_row_major() {
        let field = IterationField::from_counts(3, 2, vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(field.get(0, 0), 0);
        assert_eq!(field.get(2, 0), 2);
        assert_eq!(field.get(0, 1), 3);
        assert_eq!(field.get(2, 1), 5);
    }

    #[test]
    fn test_root_field_indexing_is_row_major() {
        let field = RootField::from_classes(
            2,
            2,
            vec![
                RootClass::Root(0),
                RootClass::Root(1),
                RootClass::Undetermined,
                RootClass::Root(0),
            ],
        );

        assert_eq!(field.get(1, 0), RootClass::Root(1));
        assert_eq!(field.get(0, 1), RootClass::Undetermined);
    }
}
