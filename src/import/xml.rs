//! XML front-end (std only).

use std::fmt::Display;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::catalog::MotorFinder;
use crate::error::{truncated, Error, ImportError, Result};
use crate::rocket::{MountId, Rocket};
use crate::warning::WarningSink;

use super::{Attributes, MountSession};

/// Import one mount-bearing element from XML into `rocket`.
///
/// The document root is the mount-bearing element itself (its name is not checked).
/// Recoverable problems go to `warnings`; only markup-level failures are errors.
///
/// # Errors
///
/// Returns an error if `mount` does not exist or the markup is malformed.
///
/// # Example
///
/// ```rust,ignore
/// use motor_mount::{import_mount_xml, MotorCatalog, Rocket, WarningSet};
///
/// let mut rocket = Rocket::new("Alpha")?;
/// let tube = rocket.add_mount("Body tube")?;
/// let mut warnings = WarningSet::new();
/// import_mount_xml(&mut rocket, tube, &MotorCatalog::new(), xml, &mut warnings)?;
/// ```
pub fn import_mount_xml<F: MotorFinder + ?Sized>(
    rocket: &mut Rocket,
    mount: MountId,
    finder: &F,
    xml: &str,
    warnings: &mut dyn WarningSink,
) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut session = MountSession::for_rocket(rocket, mount, finder)?;
    let mut root_open = false;
    let mut root_closed = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                if root_closed {
                    return Err(xml_error("content after the root element"));
                }
                if !root_open {
                    root_open = true;
                    continue;
                }
                let (name, attributes) = element(&e)?;
                session.start_element(name, attributes, warnings)?;
                depth += 1;
            }
            Event::Empty(e) => {
                if root_closed {
                    return Err(xml_error("content after the root element"));
                }
                if !root_open {
                    root_open = true;
                    root_closed = true;
                    continue;
                }
                let (name, attributes) = element(&e)?;
                session.start_element(name, attributes, warnings)?;
                session.end_element(name, warnings)?;
            }
            Event::End(e) => {
                if depth == 0 {
                    root_closed = true;
                    continue;
                }
                let qname = e.name();
                let name = std::str::from_utf8(qname.as_ref()).map_err(xml_error)?;
                session.end_element(name, warnings)?;
                depth -= 1;
            }
            Event::Text(t) => {
                if root_open && !root_closed {
                    session.characters(&t.unescape().map_err(xml_error)?);
                }
            }
            Event::CData(c) => {
                if root_open && !root_closed {
                    session.characters(std::str::from_utf8(&c).map_err(xml_error)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_open {
        return Err(ImportError::MissingRoot.into());
    }
    if !root_closed {
        return Err(ImportError::UnexpectedEof.into());
    }
    session.finish()
}

fn element<'e>(e: &'e BytesStart<'_>) -> Result<(&'e str, Attributes)> {
    let name = std::str::from_utf8(e.name().into_inner()).map_err(xml_error)?;
    let mut attributes = Attributes::new();
    for attr in e.attributes() {
        let attr = attr.map_err(xml_error)?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(xml_error)?;
        let value = attr.unescape_value().map_err(xml_error)?;
        attributes.insert(key, &value);
    }
    Ok((name, attributes))
}

fn xml_error(err: impl Display) -> Error {
    Error::Import(ImportError::Xml(truncated(&err.to_string())))
}
