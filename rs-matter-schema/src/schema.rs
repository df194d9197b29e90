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

use std::borrow::Cow;

use crate::clusters::ClusterDef;
use crate::error::{BuildError, SchemaError};
use crate::ids::{ClusterId, FieldId, FieldKind};
use crate::table::{Conflict, FieldName, FieldTable};

/// The schema of a single cluster: its ID and name, and one
/// [`FieldTable`] per [`FieldKind`].
///
/// A kind the cluster does not use (e.g. no events) has an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSchema {
    id: ClusterId,
    name: FieldName,
    attributes: FieldTable,
    events: FieldTable,
    commands: FieldTable,
}

impl ClusterSchema {
    /// Start building the schema of cluster `id`.
    pub fn builder(id: ClusterId, name: impl Into<Cow<'static, str>>) -> ClusterSchemaBuilder {
        ClusterSchemaBuilder {
            schema: Self {
                id,
                name: name.into(),
                attributes: FieldTable::new(),
                events: FieldTable::new(),
                commands: FieldTable::new(),
            },
        }
    }

    /// Build the schema described by a static table row.
    pub fn from_def(def: &ClusterDef) -> Result<Self, BuildError> {
        let mut builder = Self::builder(def.id, def.name);

        for (kind, entries) in [
            (FieldKind::Attribute, def.attributes),
            (FieldKind::Event, def.events),
            (FieldKind::Command, def.commands),
        ] {
            for (id, name) in entries {
                builder.field(kind, *id, *name)?;
            }
        }

        Ok(builder.build())
    }

    pub fn id(&self) -> ClusterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the table of the given kind.
    pub fn table(&self, kind: FieldKind) -> &FieldTable {
        match kind {
            FieldKind::Attribute => &self.attributes,
            FieldKind::Event => &self.events,
            FieldKind::Command => &self.commands,
        }
    }

    pub fn attributes(&self) -> &FieldTable {
        &self.attributes
    }

    pub fn events(&self) -> &FieldTable {
        &self.events
    }

    pub fn commands(&self) -> &FieldTable {
        &self.commands
    }

    /// Resolve a numeric field ID of the given kind to its name.
    ///
    /// Only this cluster's table is consulted, so an ID defined elsewhere
    /// still yields [`SchemaError::FieldNotFound`].
    pub fn field_name(&self, kind: FieldKind, id: FieldId) -> Result<&str, SchemaError> {
        self.table(kind)
            .name(id)
            .ok_or(SchemaError::FieldNotFound {
                cluster: self.id,
                kind,
                id,
            })
    }

    /// Resolve a field name of the given kind to its numeric ID.
    ///
    /// Names are compared exactly: no case folding, prefixes or aliases.
    pub fn field_id(&self, kind: FieldKind, name: &str) -> Result<FieldId, SchemaError> {
        self.table(kind)
            .id(name)
            .ok_or_else(|| SchemaError::InvalidName {
                cluster: self.id,
                kind,
                name: name.into(),
            })
    }

    /// Total number of fields across all three kinds.
    pub fn field_count(&self) -> usize {
        self.attributes.len() + self.events.len() + self.commands.len()
    }

    fn table_mut(&mut self, kind: FieldKind) -> &mut FieldTable {
        match kind {
            FieldKind::Attribute => &mut self.attributes,
            FieldKind::Event => &mut self.events,
            FieldKind::Command => &mut self.commands,
        }
    }
}

/// Collects the fields of a [`ClusterSchema`], rejecting duplicates as they come.
#[derive(Debug, Clone)]
pub struct ClusterSchemaBuilder {
    schema: ClusterSchema,
}

impl ClusterSchemaBuilder {
    /// Add a field of the given kind.
    ///
    /// Fails if the ID or the name is already used by another field of the
    /// same kind in this cluster; the builder is left unchanged in that case.
    pub fn field(
        &mut self,
        kind: FieldKind,
        id: FieldId,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, BuildError> {
        let cluster = self.schema.id;
        let name = name.into();

        match self.schema.table_mut(kind).insert(id, name.clone()) {
            Ok(()) => Ok(self),
            Err(Conflict::Id(existing)) => Err(BuildError::DuplicateFieldId {
                cluster,
                kind,
                id,
                existing,
            }),
            Err(Conflict::Name(existing)) => Err(BuildError::DuplicateFieldName {
                cluster,
                kind,
                name: name.into_owned(),
                existing,
            }),
        }
    }

    pub fn attribute(
        &mut self,
        id: FieldId,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, BuildError> {
        self.field(FieldKind::Attribute, id, name)
    }

    pub fn event(
        &mut self,
        id: FieldId,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, BuildError> {
        self.field(FieldKind::Event, id, name)
    }

    pub fn command(
        &mut self,
        id: FieldId,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, BuildError> {
        self.field(FieldKind::Command, id, name)
    }

    pub fn build(self) -> ClusterSchema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn on_off() -> ClusterSchema {
        let mut builder = ClusterSchema::builder(0x0006, "OnOff");
        builder
            .attribute(0x0000, "OnOff")
            .and_then(|b| b.attribute(0x4003, "StartUpOnOff"))
            .and_then(|b| b.command(0x00, "Off"))
            .and_then(|b| b.command(0x01, "On"))
            .and_then(|b| b.command(0x02, "Toggle"))
            .expect("valid cluster");
        builder.build()
    }

    #[test]
    fn lookups() {
        let cluster = on_off();

        assert_eq!(cluster.id(), 6);
        assert_eq!(cluster.name(), "OnOff");
        assert_eq!(cluster.field_id(FieldKind::Command, "On"), Ok(1));
        assert_eq!(cluster.field_name(FieldKind::Command, 1), Ok("On"));
        assert_eq!(cluster.field_name(FieldKind::Attribute, 0), Ok("OnOff"));
        assert_eq!(cluster.field_count(), 5);
    }

    #[test]
    fn kinds_are_separate_namespaces() {
        let cluster = on_off();

        // attribute 0 and command 0 are distinct entities
        assert_eq!(cluster.field_name(FieldKind::Attribute, 0), Ok("OnOff"));
        assert_eq!(cluster.field_name(FieldKind::Command, 0), Ok("Off"));
        assert_eq!(
            cluster.field_id(FieldKind::Attribute, "Off").map_err(|e| e.code()),
            Err(ErrorCode::InvalidName)
        );
    }

    #[test]
    fn empty_events() {
        let cluster = on_off();

        assert!(cluster.events().is_empty());
        for id in [0, 1, 0xFFFF] {
            assert_eq!(
                cluster.field_name(FieldKind::Event, id),
                Err(SchemaError::FieldNotFound {
                    cluster: 6,
                    kind: FieldKind::Event,
                    id
                })
            );
        }
        assert_eq!(
            cluster.field_id(FieldKind::Event, "AnythingAtAll"),
            Err(SchemaError::InvalidName {
                cluster: 6,
                kind: FieldKind::Event,
                name: "AnythingAtAll".into()
            })
        );
    }

    #[test]
    fn case_sensitive_names() {
        let cluster = on_off();

        assert!(cluster.field_id(FieldKind::Command, "on").is_err());
        assert!(cluster.field_id(FieldKind::Command, "ON").is_err());
        assert!(cluster.field_id(FieldKind::Command, "On ").is_err());
    }

    #[test]
    fn duplicates_rejected() {
        let mut builder = ClusterSchema::builder(0x0008, "LevelControl");
        builder.attribute(0, "CurrentLevel").expect("first");

        assert_eq!(
            builder.attribute(0, "MinLevel").map(|_| ()),
            Err(BuildError::DuplicateFieldId {
                cluster: 8,
                kind: FieldKind::Attribute,
                id: 0,
                existing: "CurrentLevel".into()
            })
        );
        assert_eq!(
            builder.attribute(2, "CurrentLevel").map(|_| ()),
            Err(BuildError::DuplicateFieldName {
                cluster: 8,
                kind: FieldKind::Attribute,
                name: "CurrentLevel".into(),
                existing: 0
            })
        );

        // same id and name are fine in another kind
        builder.command(0, "CurrentLevel").expect("other namespace");
        assert_eq!(builder.build().field_count(), 2);
    }

    #[test]
    fn from_static_row() {
        let def = ClusterDef {
            id: 0x0003,
            name: "Identify",
            attributes: &[(0x0000, "IdentifyTime"), (0x0001, "IdentifyType")],
            events: &[],
            commands: &[(0x00, "Identify"), (0x40, "TriggerEffect")],
        };
        let cluster = ClusterSchema::from_def(&def).expect("valid row");

        assert_eq!(cluster.name(), "Identify");
        assert_eq!(cluster.attributes().len(), 2);
        assert_eq!(cluster.field_id(FieldKind::Command, "TriggerEffect"), Ok(0x40));

        let broken = ClusterDef {
            commands: &[(0x00, "Identify"), (0x00, "TriggerEffect")],
            ..def
        };
        assert!(matches!(
            ClusterSchema::from_def(&broken),
            Err(BuildError::DuplicateFieldId { id: 0, .. })
        ));
    }
}
