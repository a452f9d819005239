#![forbid(unsafe_code)]

//! Library naming strategy.
//!
//! Every emitted artifact name derives from one [`Naming`] value, so an
//! alternate scheme changes a single constructor argument instead of the
//! generator. The default scheme produces `GB2312_16_FangSong` style
//! library names and `FangSong16` style object names.

/// Derives library, object, and crate names for one generated font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    prefix: String,
    family: String,
    size: u16,
}

impl Naming {
    /// Default scheme with the `GB2312` prefix.
    #[must_use]
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            prefix: "GB2312".to_owned(),
            family: family.into(),
            size,
        }
    }

    /// Override the library prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Font family name as given on the command line.
    #[inline]
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Cell size this library is generated at.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Library name: `GB2312_16_FangSong`.
    #[must_use]
    pub fn lib_name(&self) -> String {
        format!("{}_{}_{}", self.prefix, self.size, self.family)
    }

    /// Object name: `FangSong16`. Distinct per size so multiple sizes of
    /// one family can coexist in a build.
    #[must_use]
    pub fn obj_name(&self) -> String {
        format!("{}{}", self.family, self.size)
    }

    /// Cargo package name: `gb2312-16-fangsong`.
    #[must_use]
    pub fn crate_name(&self) -> String {
        self.lib_name().to_ascii_lowercase().replace('_', "-")
    }
}
