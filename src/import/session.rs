//! Mount import session: drives the handlers from a depth-first event stream.

use heapless::{String, Vec};

use crate::catalog::MotorFinder;
use crate::error::{truncated, Error, ImportError, Result};
use crate::rocket::{MountId, Rocket};
use crate::warning::{Warning, WarningSink};

use super::mount::MotorMountHandler;
use super::{Attributes, Delegate, ElementHandler};

/// Maximum captured text per plain-text element in bytes.
pub const MAX_CONTENT_LEN: usize = 128;

/// Mount child, sub-parser child, and text leaf, plus one spare level.
const MAX_DEPTH: usize = 4;

/// Handler that owns a frame's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Mount,
    Motor,
    Ignition,
    Text,
}

impl From<Delegate> for Route {
    fn from(delegate: Delegate) -> Self {
        match delegate {
            Delegate::Motor => Route::Motor,
            Delegate::IgnitionConfiguration => Route::Ignition,
            Delegate::PlainText => Route::Text,
        }
    }
}

#[derive(Debug)]
struct Frame {
    element: String<32>,
    attributes: Attributes,
    content: String<MAX_CONTENT_LEN>,
    overflowed: bool,
    /// Receives this element's close.
    owner: Route,
    /// Receives the opens of this element's children.
    children: Route,
}

/// Feeds the children of one mount-bearing element into a [`MotorMountHandler`].
///
/// The caller reports `start_element`/`characters`/`end_element` for everything
/// between the mount element's start and end tags, then calls [`MountSession::finish`].
/// Elements rejected by a handler are skipped together with their subtree.
pub struct MountSession<'a, F: MotorFinder + ?Sized> {
    handler: MotorMountHandler<'a, F>,
    frames: Vec<Frame, MAX_DEPTH>,
    skip_depth: usize,
}

impl<'a, F: MotorFinder + ?Sized> MountSession<'a, F> {
    /// Wrap an existing handler.
    pub fn new(handler: MotorMountHandler<'a, F>) -> Self {
        Self {
            handler,
            frames: Vec::new(),
            skip_depth: 0,
        }
    }

    /// Start a session for one mount of `rocket`.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::UnknownMount` if `mount` does not exist.
    pub fn for_rocket(rocket: &'a mut Rocket, mount: MountId, finder: &'a F) -> Result<Self> {
        let (mount, configurations) = rocket.mount_and_configurations_mut(mount)?;
        Ok(Self::new(MotorMountHandler::new(mount, configurations, finder)))
    }

    /// The underlying mount handler.
    pub fn handler(&self) -> &MotorMountHandler<'a, F> {
        &self.handler
    }

    /// Number of elements currently open, skipped ones included.
    pub fn depth(&self) -> usize {
        self.frames.len() + self.skip_depth
    }

    /// An element opened.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::NestingTooDeep` if the frame stack is exhausted.
    pub fn start_element(
        &mut self,
        element: &str,
        attributes: Attributes,
        warnings: &mut dyn WarningSink,
    ) -> Result<()> {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return Ok(());
        }

        let owner = self.frames.last().map_or(Route::Mount, |f| f.children);
        let delegate = match owner {
            Route::Mount => self.handler.open_element(element, &attributes, warnings),
            Route::Motor => self
                .handler
                .motor_handler_mut()
                .and_then(|h| h.open_element(element, &attributes, warnings)),
            Route::Ignition => self
                .handler
                .ignition_handler_mut()
                .and_then(|h| h.open_element(element, &attributes, warnings)),
            Route::Text => {
                warnings.add(Warning::unknown_element(element));
                None
            }
        };

        let (Some(delegate), Ok(name)) = (delegate, String::<32>::try_from(element)) else {
            self.skip_depth = 1;
            return Ok(());
        };

        self.frames
            .push(Frame {
                element: name,
                attributes,
                content: String::new(),
                overflowed: false,
                owner,
                children: delegate.into(),
            })
            .map_err(|_| Error::Import(ImportError::NestingTooDeep))
    }

    /// Text inside the innermost open element.
    ///
    /// Only plain-text leaves keep their text; anything else is dropped.
    pub fn characters(&mut self, text: &str) {
        if self.skip_depth > 0 {
            return;
        }
        if let Some(frame) = self.frames.last_mut().filter(|f| f.children == Route::Text) {
            if frame.content.push_str(text).is_err() {
                frame.overflowed = true;
            }
        }
    }

    /// An element closed.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::UnbalancedEnd` if nothing is open, or
    /// `ImportError::MismatchedEnd` if `element` is not the innermost open element.
    pub fn end_element(&mut self, element: &str, warnings: &mut dyn WarningSink) -> Result<()> {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return Ok(());
        }

        let Some(frame) = self.frames.pop() else {
            return Err(ImportError::UnbalancedEnd(truncated(element)).into());
        };
        if frame.element.as_str() != element {
            return Err(ImportError::MismatchedEnd {
                expected: frame.element,
                found: truncated(element),
            }
            .into());
        }

        if frame.overflowed {
            warnings.add(Warning::ContentTooLong(frame.element));
            if frame.owner == Route::Mount {
                self.handler.abandon_element();
            }
            return Ok(());
        }

        let content = collapse_whitespace(&frame.content);
        let (element, attributes) = (frame.element.as_str(), &frame.attributes);
        match frame.owner {
            Route::Mount => self.handler.close_element(element, attributes, &content, warnings),
            Route::Motor => {
                if let Some(h) = self.handler.motor_handler_mut() {
                    h.close_element(element, attributes, &content, warnings);
                }
            }
            Route::Ignition => {
                if let Some(h) = self.handler.ignition_handler_mut() {
                    h.close_element(element, attributes, &content, warnings);
                }
            }
            // Children of text leaves are always skipped
            Route::Text => {}
        }
        Ok(())
    }

    /// End the session.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::UnexpectedEof` if elements are still open.
    pub fn finish(self) -> Result<()> {
        if self.depth() > 0 {
            return Err(ImportError::UnexpectedEof.into());
        }
        Ok(())
    }
}

/// Collapse whitespace runs into single spaces and trim the ends.
fn collapse_whitespace(raw: &str) -> String<MAX_CONTENT_LEN> {
    let mut out = String::new();
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            let _ = out.push(' ');
        }
        let _ = out.push_str(word);
    }
    out
}
