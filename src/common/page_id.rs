//! Virtual page identifier type.

use std::fmt;

/// Identifies a page in the virtual address space.
///
/// Pages are small non-negative integers in `[0, V)` where `V` is the
/// virtual-space size the engine was built with. Using `usize` lets the
/// engine index its per-page metadata directly: `metadata[page_id.0]`.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(7);
/// assert_eq!(page_id.0, 7);
/// assert_eq!(page_id.to_string(), "Page(7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: usize) -> Self {
        PageId(id)
    }

    /// The raw page number.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for PageId {
    fn from(id: usize) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(pid.get(), 42);
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_from_usize() {
        let pid: PageId = 3usize.into();
        assert_eq!(pid, PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
    }
}
