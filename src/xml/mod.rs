//! XML marshaling for boundary data objects. Tag-based (de)serialization is
//! delegated to `quick_xml`'s serde support; this module only wires it to
//! the runtime constraint validation that boundary objects require after
//! population.

pub mod model;

use crate::core::registry::BoundaryRegistry;
use crate::domain::boundary::{Boundary, BOUNDARY};
use crate::utils::constraint::Validate;
use crate::utils::error::Result;
use quick_xml::se::Serializer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{BufRead, Write};

/// Marker capability for objects serialized to/from XML.
pub trait XmlObject: Boundary {}

/// Name of the marker capability in a [`BoundaryRegistry`].
pub const XML_OBJECT: &str = "XmlObject";

/// Write `object` as indented XML. A structural failure is terminal.
pub fn serialize<T, W>(object: &T, mut writer: W) -> Result<()>
where
    T: XmlObject + Serialize,
    W: Write,
{
    let mut buffer = String::new();
    let mut serializer = Serializer::new(&mut buffer);
    serializer.indent(' ', 2);
    object.serialize(serializer)?;
    writer.write_all(buffer.as_bytes())?;
    Ok(())
}

/// Read one object from XML, then run its constraint validation. Malformed
/// input and constraint violations surface as distinct errors; neither is
/// retried.
pub fn deserialize<T, R>(reader: R) -> Result<T>
where
    T: XmlObject + DeserializeOwned + Validate,
    R: BufRead,
{
    let object: T = quick_xml::de::from_reader(reader)?;
    object.validate().into_result()?;
    Ok(object)
}

/// Registry of every XML boundary type in this crate, with the capability
/// graph rooting `XmlObject` in the boundary capability.
pub fn xml_registry() -> BoundaryRegistry {
    let mut registry = BoundaryRegistry::new();
    registry.capability(BOUNDARY, &[]);
    registry.capability(XML_OBJECT, &[BOUNDARY]);
    registry.register::<model::User>();
    registry.register::<model::Product>();
    registry
}
