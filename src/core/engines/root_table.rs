use num::complex::Complex64;
use std::sync::Mutex;

/// Append-only set of discovered roots, unique up to a tolerance.
///
/// Roots are found online during a render, so the table is shared read-write
/// across parallel pixel classification. The lookup-or-append step is the
/// only cross-pixel write and is serialized here; the numeric iteration
/// around it stays lock-free.
#[derive(Debug)]
pub struct RootTable {
    tolerance: f64,
    roots: Mutex<Vec<Complex64>>,
}

impl RootTable {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            roots: Mutex::new(Vec::new()),
        }
    }

    /// Index of the stored root within `tolerance` of `root`, appending it
    /// as a new entry when no such root exists. Insertion order defines the
    /// index, which is stable for the lifetime of the table.
    #[must_use]
    pub fn index_of(&self, root: Complex64) -> usize {
        let mut roots = self.roots.lock().unwrap();

        let tolerance_sqr = self.tolerance * self.tolerance;
        match roots
            .iter()
            .position(|known| (known - root).norm_sqr() < tolerance_sqr)
        {
            Some(index) => index,
            None => {
                roots.push(root);
                roots.len() - 1
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.lock().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Complex64> {
        self.roots.lock().unwrap().clone()
    }

    pub fn clear(&mut self) {
        self.roots.lock().unwrap().clear();
    }
}
