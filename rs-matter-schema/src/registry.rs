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

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use crate::clusters::{self, ClusterDef};
use crate::error::{BuildError, SchemaError};
use crate::ids::{ClusterId, FieldId, FieldKind};
use crate::path::FieldPath;
use crate::schema::ClusterSchema;

#[cfg(feature = "idl")]
use crate::idl::{self, LoadError};

/// An immutable set of cluster schemas, keyed by cluster ID and by cluster name.
///
/// Registries are only ever created through a [`RegistryBuilder`] (or one of
/// the constructors wrapping it) and never change afterwards, so a shared
/// reference can be handed to any number of threads without locking.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    // sorted by cluster ID
    clusters: Vec<ClusterSchema>,
    by_id: HashMap<ClusterId, usize>,
    by_name: HashMap<String, usize>,
}

impl SchemaRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registry of all clusters defined by the Matter specification.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn standard() -> &'static SchemaRegistry {
        static STANDARD: OnceLock<SchemaRegistry> = OnceLock::new();

        STANDARD.get_or_init(|| match Self::from_defs(clusters::standard()) {
            Ok(registry) => registry,
            // The built-in rows are checked by the test-suite; a conflict here
            // is a bug in the tables themselves.
            Err(e) => panic!("Built-in cluster tables are inconsistent: {e}"),
        })
    }

    /// Build a registry from static table rows.
    pub fn from_defs<'a>(
        defs: impl IntoIterator<Item = &'a ClusterDef>,
    ) -> Result<Self, BuildError> {
        let mut builder = RegistryBuilder::new();
        for def in defs {
            builder.insert(ClusterSchema::from_def(def)?)?;
        }

        Ok(builder.build())
    }

    /// Build a registry from the clusters of a Matter IDL file.
    #[cfg(feature = "idl")]
    pub fn from_idl(text: &str) -> Result<Self, LoadError> {
        let mut builder = RegistryBuilder::new();
        for schema in idl::load(text)? {
            builder.insert(schema)?;
        }

        Ok(builder.build())
    }

    /// Return the schema of cluster `id`.
    pub fn resolve_cluster(&self, id: ClusterId) -> Result<&ClusterSchema, SchemaError> {
        self.by_id
            .get(&id)
            .map(|index| &self.clusters[*index])
            .ok_or(SchemaError::ClusterNotFound { cluster: id })
    }

    /// Return the schema of the cluster called `name` (exact match).
    pub fn resolve_cluster_by_name(&self, name: &str) -> Result<&ClusterSchema, SchemaError> {
        self.by_name
            .get(name)
            .map(|index| &self.clusters[*index])
            .ok_or_else(|| SchemaError::InvalidClusterName { name: name.into() })
    }

    pub fn field_name(
        &self,
        cluster: ClusterId,
        kind: FieldKind,
        id: FieldId,
    ) -> Result<&str, SchemaError> {
        self.resolve_cluster(cluster)?.field_name(kind, id)
    }

    pub fn field_id(
        &self,
        cluster: ClusterId,
        kind: FieldKind,
        name: &str,
    ) -> Result<FieldId, SchemaError> {
        self.resolve_cluster(cluster)?.field_id(kind, name)
    }

    /// Describe a (cluster, kind, field) triple for display, with whatever
    /// parts of it this registry knows.
    pub fn path(&self, cluster: ClusterId, kind: FieldKind, field: FieldId) -> FieldPath<'_> {
        FieldPath::resolve(self, cluster, kind, field)
    }

    /// Iterate over all clusters, in ascending ID order.
    pub fn clusters(&self) -> impl ExactSizeIterator<Item = &ClusterSchema> + '_ {
        self.clusters.iter()
    }

    pub fn contains(&self, id: ClusterId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Collects cluster schemas, enforcing unique cluster IDs and names.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    clusters: BTreeMap<ClusterId, ClusterSchema>,
    names: HashMap<String, ClusterId>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the clusters of an existing registry.
    pub fn from_registry(registry: &SchemaRegistry) -> Self {
        let mut builder = Self::new();
        for schema in registry.clusters() {
            builder.names.insert(schema.name().to_owned(), schema.id());
            builder.clusters.insert(schema.id(), schema.clone());
        }
        builder
    }

    /// Add a cluster that must not be known yet, neither by ID nor by name.
    pub fn insert(&mut self, schema: ClusterSchema) -> Result<&mut Self, BuildError> {
        if self.clusters.contains_key(&schema.id()) {
            return Err(BuildError::DuplicateCluster {
                cluster: schema.id(),
            });
        }
        self.check_name(&schema)?;

        self.names.insert(schema.name().to_owned(), schema.id());
        self.clusters.insert(schema.id(), schema);

        Ok(self)
    }

    /// Add a cluster, replacing any cluster with the same ID.
    ///
    /// The name still has to be unique among the other clusters. Returns the
    /// replaced schema, if any.
    pub fn replace(&mut self, schema: ClusterSchema) -> Result<Option<ClusterSchema>, BuildError> {
        self.check_name(&schema)?;

        let previous = self.clusters.remove(&schema.id());
        if let Some(previous) = &previous {
            debug!(
                "Replacing cluster 0x{:04x} ({} -> {})",
                schema.id(),
                previous.name(),
                schema.name()
            );
            self.names.remove(previous.name());
        }

        self.names.insert(schema.name().to_owned(), schema.id());
        self.clusters.insert(schema.id(), schema);

        Ok(previous)
    }

    /// Replace (or add) every cluster defined by a Matter IDL file.
    #[cfg(feature = "idl")]
    pub fn replace_from_idl(&mut self, text: &str) -> Result<&mut Self, LoadError> {
        for schema in idl::load(text)? {
            self.replace(schema)?;
        }

        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn build(self) -> SchemaRegistry {
        let clusters: Vec<_> = self.clusters.into_values().collect();

        let by_id = clusters
            .iter()
            .enumerate()
            .map(|(index, schema)| (schema.id(), index))
            .collect();
        let by_name = clusters
            .iter()
            .enumerate()
            .map(|(index, schema)| (schema.name().to_owned(), index))
            .collect();

        debug!("Built schema registry with {} clusters", clusters.len());

        SchemaRegistry {
            clusters,
            by_id,
            by_name,
        }
    }

    fn check_name(&self, schema: &ClusterSchema) -> Result<(), BuildError> {
        match self.names.get(schema.name()) {
            Some(existing) if *existing != schema.id() => Err(BuildError::DuplicateClusterName {
                name: schema.name().to_owned(),
                existing: *existing,
                cluster: schema.id(),
            }),
            _ => Ok(()),
        }
    }
}
