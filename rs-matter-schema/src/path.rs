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

//! Human readable rendering of (cluster, kind, field) triples.

use core::fmt;

use crate::ids::{ClusterId, FieldId, FieldKind};
use crate::registry::SchemaRegistry;

/// A (cluster, kind, field) triple, together with the names a registry
/// knows for it.
///
/// Displays as `OnOff::Command::Toggle` when everything is known and falls
/// back to hex for the unknown parts, e.g. `OnOff::Attribute(0x1234)` or
/// `Cluster(0x9999)::Attribute(0x0001)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath<'a> {
    cluster: ClusterId,
    kind: FieldKind,
    field: FieldId,
    cluster_name: Option<&'a str>,
    field_name: Option<&'a str>,
}

impl<'a> FieldPath<'a> {
    /// A path with no names attached; it always displays in hex.
    pub const fn new(cluster: ClusterId, kind: FieldKind, field: FieldId) -> Self {
        Self {
            cluster,
            kind,
            field,
            cluster_name: None,
            field_name: None,
        }
    }

    pub fn resolve(
        registry: &'a SchemaRegistry,
        cluster: ClusterId,
        kind: FieldKind,
        field: FieldId,
    ) -> Self {
        let mut path = Self::new(cluster, kind, field);

        if let Ok(schema) = registry.resolve_cluster(cluster) {
            path.cluster_name = Some(schema.name());
            path.field_name = schema.field_name(kind, field).ok();
        }

        path
    }

    pub fn cluster(&self) -> ClusterId {
        self.cluster
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    pub fn cluster_name(&self) -> Option<&'a str> {
        self.cluster_name
    }

    pub fn field_name(&self) -> Option<&'a str> {
        self.field_name
    }

    /// True if both the cluster and the field were found.
    pub fn is_known(&self) -> bool {
        self.cluster_name.is_some() && self.field_name.is_some()
    }
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cluster_name {
            Some(name) => write!(f, "{name}::")?,
            None => write!(f, "Cluster(0x{:04x})::", self.cluster)?,
        }

        match self.field_name {
            Some(name) => write!(f, "{}::{name}", self.kind),
            None => write!(f, "{}(0x{:04x})", self.kind, self.field),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x0006, FieldKind::Attribute, 0x0000, "OnOff::Attribute::OnOff")]
    #[case(0x0006, FieldKind::Command, 0x0002, "OnOff::Command::Toggle")]
    #[case(0x0006, FieldKind::Attribute, 0x1234, "OnOff::Attribute(0x1234)")]
    #[case(0x0006, FieldKind::Event, 0x0000, "OnOff::Event(0x0000)")]
    #[case(0x0028, FieldKind::Event, 0x0000, "BasicInformation::Event::StartUp")]
    #[case(0x9999, FieldKind::Attribute, 0x0001, "Cluster(0x9999)::Attribute(0x0001)")]
    #[case(
        0xFFF1_FC05,
        FieldKind::Attribute,
        0xFFFD,
        "UnitTesting::Attribute::ClusterRevision"
    )]
    fn display(
        #[case] cluster: ClusterId,
        #[case] kind: FieldKind,
        #[case] field: FieldId,
        #[case] expected: &str,
    ) {
        let path = SchemaRegistry::standard().path(cluster, kind, field);
        assert_eq!(path.to_string(), expected);
    }

    #[test]
    fn unresolved() {
        let path = FieldPath::new(0x0006, FieldKind::Command, 1);

        assert!(!path.is_known());
        assert_eq!(path.to_string(), "Cluster(0x0006)::Command(0x0001)");
    }

    #[test]
    fn names_are_exposed() {
        let path = SchemaRegistry::standard().path(0x0008, FieldKind::Command, 0x04);

        assert!(path.is_known());
        assert_eq!(path.cluster_name(), Some("LevelControl"));
        assert_eq!(path.field_name(), Some("MoveToLevelWithOnOff"));
        assert_eq!((path.cluster(), path.kind(), path.field()), (8, FieldKind::Command, 4));
    }
}
