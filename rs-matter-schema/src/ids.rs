/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use core::fmt;
use core::str::FromStr;

use strum::FromRepr;
use thiserror::Error;

/// The numeric ID of a cluster.
///
/// Standard clusters use small values, while manufacturer specific and test
/// clusters live in the `0xFFF1_xxxx` range.
pub type ClusterId = u32;

/// The numeric ID of an attribute, event or command.
///
/// Only unique within a single cluster and [`FieldKind`].
pub type FieldId = u32;

/// The three independent namespaces a cluster defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Attribute,
    Event,
    Command,
}

impl FieldKind {
    /// All kinds, in the order clusters usually list them.
    pub const ALL: [FieldKind; 3] = [FieldKind::Attribute, FieldKind::Event, FieldKind::Command];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "Attribute",
            Self::Event => "Event",
            Self::Command => "Command",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field kind `{0}` (expected attribute, event or command)")]
pub struct ParseFieldKindError(pub String);

/// Parses a field kind, ignoring case.
///
/// Examples:
///
/// ```
/// use rs_matter_schema::FieldKind;
///
/// assert_eq!("attribute".parse(), Ok(FieldKind::Attribute));
/// assert_eq!("Event".parse(), Ok(FieldKind::Event));
/// assert_eq!("cmd".parse(), Ok(FieldKind::Command));
/// assert!("struct".parse::<FieldKind>().is_err());
/// ```
impl FromStr for FieldKind {
    type Err = ParseFieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "attribute" | "attr" => Ok(Self::Attribute),
            "event" => Ok(Self::Event),
            "command" | "cmd" => Ok(Self::Command),
            _ => Err(ParseFieldKindError(s.into())),
        }
    }
}

/// The global attributes the data model base mandates on (nearly) every cluster.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, FromRepr)]
#[repr(u32)]
pub enum GlobalAttribute {
    GeneratedCommandList = 0xFFF8,
    AcceptedCommandList = 0xFFF9,
    EventList = 0xFFFA,
    AttributeList = 0xFFFB,
    FeatureMap = 0xFFFC,
    ClusterRevision = 0xFFFD,
}

impl GlobalAttribute {
    pub const ALL: [GlobalAttribute; 6] = [
        Self::GeneratedCommandList,
        Self::AcceptedCommandList,
        Self::EventList,
        Self::AttributeList,
        Self::FeatureMap,
        Self::ClusterRevision,
    ];

    pub const fn id(self) -> FieldId {
        self as FieldId
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::GeneratedCommandList => "GeneratedCommandList",
            Self::AcceptedCommandList => "AcceptedCommandList",
            Self::EventList => "EventList",
            Self::AttributeList => "AttributeList",
            Self::FeatureMap => "FeatureMap",
            Self::ClusterRevision => "ClusterRevision",
        }
    }

    /// Return the global attribute with the given ID, if it is one.
    pub fn from_id(id: FieldId) -> Option<Self> {
        Self::from_repr(id)
    }

    /// Return `true` if the attribute ID belongs to the global range.
    pub fn is_global(id: FieldId) -> bool {
        id >= Self::GeneratedCommandList.id() && id <= Self::ClusterRevision.id()
    }
}

impl fmt::Display for GlobalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_attribute_ids() {
        assert_eq!(GlobalAttribute::ClusterRevision.id(), 65533);
        assert_eq!(GlobalAttribute::GeneratedCommandList.id(), 65528);
        assert_eq!(
            GlobalAttribute::from_id(0xFFFC),
            Some(GlobalAttribute::FeatureMap)
        );
        assert_eq!(GlobalAttribute::from_id(0), None);
    }

    #[test]
    fn global_range() {
        for attr in GlobalAttribute::ALL {
            assert!(GlobalAttribute::is_global(attr.id()), "{attr}");
        }
        assert!(!GlobalAttribute::is_global(0x4000));
        assert!(!GlobalAttribute::is_global(0xFFFE));
    }

    #[test]
    fn kind_display() {
        assert_eq!(FieldKind::Command.to_string(), "Command");
        assert_eq!(
            FieldKind::ALL.map(|k| k.as_str()),
            ["Attribute", "Event", "Command"]
        );
    }
}
