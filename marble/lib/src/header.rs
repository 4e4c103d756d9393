//! ATX headers, from `# Title` down to `###### Title`.

use strum::EnumIter;
use tracing::debug;

use crate::error::{MarbleError, Result};

/// Header level, 1 (largest) through 6.
///
/// ## Examples
///
/// ```
/// use marble::{HeaderLevel, header};
///
/// let level = HeaderLevel::try_from(3u8).unwrap();
/// assert_eq!(header(level, "Usage"), "### Usage");
///
/// assert!(HeaderLevel::try_from(7u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum HeaderLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeaderLevel {
    /// Number of `#` characters for this level.
    pub fn depth(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

impl TryFrom<u8> for HeaderLevel {
    type Error = MarbleError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            5 => Ok(Self::H5),
            6 => Ok(Self::H6),
            other => {
                debug!(level = other, "rejected header level");
                Err(MarbleError::InvalidHeaderLevel(other))
            }
        }
    }
}

/// Creates a header of the given level.
pub fn header(level: HeaderLevel, title: &str) -> String {
    format!("{} {title}", "#".repeat(level.depth()))
}

/// Level-1 header: `# title`.
pub fn h1(title: &str) -> String {
    header(HeaderLevel::H1, title)
}

/// Level-2 header: `## title`.
pub fn h2(title: &str) -> String {
    header(HeaderLevel::H2, title)
}

/// Level-3 header: `### title`.
pub fn h3(title: &str) -> String {
    header(HeaderLevel::H3, title)
}

/// Level-4 header: `#### title`.
pub fn h4(title: &str) -> String {
    header(HeaderLevel::H4, title)
}

/// Level-5 header: `##### title`.
pub fn h5(title: &str) -> String {
    header(HeaderLevel::H5, title)
}

/// Level-6 header: `###### title`.
pub fn h6(title: &str) -> String {
    header(HeaderLevel::H6, title)
}
