use std::fmt::Formatter;

const USER_MANUAL_ROOT: &str = "https://docs.keel.build/userguide";

/// A stable link into the documentation, attached to a [`Problem`] so that
/// users can read up on what was reported and how to address it.
///
/// Links are built from a section and an anchor rather than a raw URL so
/// that every problem points into the same versioned manual.
///
/// [`Problem`]: crate::Problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DocLink {
    section: &'static str,
    anchor: &'static str,
}

impl DocLink {
    /// Creates a link to a section of the user manual, pointing at the given
    /// anchor within that section.
    pub const fn user_manual(section: &'static str, anchor: &'static str) -> DocLink {
        DocLink { section, anchor }
    }

    /// The manual section this link points into.
    pub const fn section(&self) -> &'static str {
        self.section
    }

    /// The anchor within the section.
    pub const fn anchor(&self) -> &'static str {
        self.anchor
    }

    /// Renders the link as an absolute URL into the published manual.
    pub fn url(&self) -> String {
        format!("{USER_MANUAL_ROOT}/{}.html#{}", self.section, self.anchor)
    }
}

impl std::fmt::Display for DocLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url())
    }
}
