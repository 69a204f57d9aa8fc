//! Element handler seam shared by the mount handler and its sub-parsers.

use crate::warning::WarningSink;

use super::Attributes;

/// Which handler takes over the children of an element that was just opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delegate {
    /// The motor sub-parser.
    Motor,
    /// The ignition configuration sub-parser.
    IgnitionConfiguration,
    /// A plain-text leaf; its content is delivered on close.
    PlainText,
}

/// Receives the open and close events of its direct child elements.
pub trait ElementHandler {
    /// A child element opened.
    ///
    /// Returns the handler for the child's own children, or `None` to have the caller
    /// ignore the child and its subtree.
    fn open_element(
        &mut self,
        element: &str,
        attributes: &Attributes,
        warnings: &mut dyn WarningSink,
    ) -> Option<Delegate>;

    /// A child element closed with its whitespace-normalized text `content`.
    fn close_element(
        &mut self,
        element: &str,
        attributes: &Attributes,
        content: &str,
        warnings: &mut dyn WarningSink,
    );
}
