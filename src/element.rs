use std::fmt;

/// Trait for single input elements that primitive parsers can match
///
/// Matching only needs equality; `Display` is used to render mismatch
/// diagnostics and `Debug` to render outcomes.
pub trait Element: Copy + PartialEq + fmt::Debug + fmt::Display {}

impl<T> Element for T where T: Copy + PartialEq + fmt::Debug + fmt::Display {}
