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

use miette::Diagnostic;
use thiserror::Error;

use crate::ids::{ClusterId, FieldId, FieldKind};

/// The kind of a failed lookup.
///
/// Both kinds are ordinary outcomes of speculative lookups (e.g. a field ID
/// defined by a newer revision of the specification) and never fatal to the
/// registry.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorCode {
    /// A numeric cluster or field ID has no mapping.
    NotFound,
    /// A symbolic cluster or field name has no mapping.
    InvalidName,
}

/// A failed registry lookup.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Cluster 0x{cluster:04x} is not defined")]
    #[diagnostic(code(matter::schema::cluster_not_found))]
    ClusterNotFound { cluster: ClusterId },

    #[error("Cluster `{name}` is not defined")]
    #[diagnostic(code(matter::schema::invalid_cluster_name))]
    InvalidClusterName { name: String },

    #[error("{kind} 0x{id:04x} is not defined by cluster 0x{cluster:04x}")]
    #[diagnostic(code(matter::schema::field_not_found))]
    FieldNotFound {
        cluster: ClusterId,
        kind: FieldKind,
        id: FieldId,
    },

    #[error("{kind} `{name}` is not defined by cluster 0x{cluster:04x}")]
    #[diagnostic(
        code(matter::schema::invalid_name),
        help("Names are matched exactly and are case-sensitive")
    )]
    InvalidName {
        cluster: ClusterId,
        kind: FieldKind,
        name: String,
    },
}

impl SchemaError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ClusterNotFound { .. } | Self::FieldNotFound { .. } => ErrorCode::NotFound,
            Self::InvalidClusterName { .. } | Self::InvalidName { .. } => ErrorCode::InvalidName,
        }
    }
}

/// A violated invariant while building a registry.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Cluster 0x{cluster:04x} is defined more than once")]
    #[diagnostic(code(matter::schema::duplicate_cluster))]
    DuplicateCluster { cluster: ClusterId },

    #[error("Cluster name `{name}` is used by both 0x{existing:04x} and 0x{cluster:04x}")]
    #[diagnostic(code(matter::schema::duplicate_cluster_name))]
    DuplicateClusterName {
        name: String,
        existing: ClusterId,
        cluster: ClusterId,
    },

    #[error("{kind} 0x{id:04x} of cluster 0x{cluster:04x} is already named `{existing}`")]
    #[diagnostic(code(matter::schema::duplicate_field_id))]
    DuplicateFieldId {
        cluster: ClusterId,
        kind: FieldKind,
        id: FieldId,
        existing: String,
    },

    #[error("{kind} `{name}` of cluster 0x{cluster:04x} already has ID 0x{existing:04x}")]
    #[diagnostic(code(matter::schema::duplicate_field_name))]
    DuplicateFieldName {
        cluster: ClusterId,
        kind: FieldKind,
        name: String,
        existing: FieldId,
    },

    #[error("{what} code {code} does not fit in 32 bits")]
    #[diagnostic(code(matter::schema::id_out_of_range))]
    IdOutOfRange { what: &'static str, code: u64 },
}
