//! Reference strings: parsing, loading and random generation.
//!
//! A [`ReferenceString`] is the ordered list of page references the engine
//! replays. Every value is already known to lie inside the virtual space
//! it was built for.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::common::{Error, PageId, Result};

/// A validated sequence of page references.
///
/// # Example
/// ```
/// use pagesim::ReferenceString;
///
/// let refs = ReferenceString::parse("7 0 1, 2 0", 10).unwrap();
/// assert_eq!(refs.len(), 5);
/// assert_eq!(refs.to_string(), "7, 0, 1, 2, 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Parse whitespace- or comma-separated page numbers.
    ///
    /// Tokens that are not integers, or that fall outside
    /// `[0, virtual_pages)`, are skipped with a warning.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if no valid page number remains
    pub fn parse(text: &str, virtual_pages: usize) -> Result<Self> {
        let mut pages = Vec::new();

        for token in text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            match token.parse::<i64>() {
                Ok(value) if value >= 0 && (value as u64) < virtual_pages as u64 => {
                    pages.push(PageId::new(value as usize));
                }
                Ok(_) => warn!(
                    "Page number must be between 0 and {}: {} ignored",
                    virtual_pages.saturating_sub(1),
                    token
                ),
                Err(_) => warn!("Non-integer entered: {} ignored", token),
            }
        }

        if pages.is_empty() {
            return Err(Error::InvalidConfiguration(
                "reference string needs at least one valid page number".to_string(),
            ));
        }

        debug!("Parsed reference string of {} pages", pages.len());
        Ok(Self { pages })
    }

    /// Read and parse a reference string from a file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::InvalidConfiguration` as for [`ReferenceString::parse`]
    pub fn from_file<P: AsRef<Path>>(path: P, virtual_pages: usize) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text, virtual_pages)
    }

    /// Draw `len` pages uniformly from `[0, virtual_pages)`.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `len` or `virtual_pages` is 0
    pub fn generate(len: usize, virtual_pages: usize, rng: &mut fastrand::Rng) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidConfiguration(
                "reference string length must be at least one".to_string(),
            ));
        }
        if virtual_pages == 0 {
            return Err(Error::InvalidConfiguration(
                "virtual page space must hold at least one page".to_string(),
            ));
        }

        let pages = (0..len)
            .map(|_| PageId::new(rng.usize(..virtual_pages)))
            .collect();
        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl From<ReferenceString> for Vec<PageId> {
    fn from(refs: ReferenceString) -> Self {
        refs.pages
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page.0)?;
        }
        Ok(())
    }
}
