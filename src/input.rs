use crate::element::Element;

/// Remaining input handed from one parser to the next
///
/// An input is a cheap, copyable view. Parsers read the head with `first`
/// and hand `rest` on; the original view stays valid, which is what lets
/// `OrElse` retry its second alternative from the same place.
pub trait Input: Copy {
    /// The type of elements this input yields
    type Element: Element;

    /// The head element, or `None` if nothing is left
    fn first(&self) -> Option<Self::Element>;

    /// Everything after the head
    ///
    /// The rest of an empty input is empty.
    fn rest(self) -> Self;

    fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}

impl<'a> Input for &'a str {
    type Element = char;

    fn first(&self) -> Option<char> {
        self.chars().next()
    }

    fn rest(self) -> Self {
        let mut chars = self.chars();
        chars.next();
        chars.as_str()
    }
}

impl<'a, T: Element> Input for &'a [T] {
    type Element = T;

    fn first(&self) -> Option<T> {
        <[T]>::first(self).copied()
    }

    fn rest(self) -> Self {
        self.get(1..).unwrap_or(&[])
    }
}
