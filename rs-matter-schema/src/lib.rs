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

//! Cluster schema registry for the Matter (Smart-Home) data model
//!
//! Maps numeric cluster IDs to cluster definitions and, within every
//! cluster, numeric attribute / event / command IDs to their symbolic names
//! and back. The registry is static metadata: it is built once, never
//! changes and can be shared freely between threads.
//!
//! # Examples
//! ```
//! use rs_matter_schema::{ErrorCode, FieldKind, SchemaRegistry};
//!
//! let registry = SchemaRegistry::standard();
//!
//! let on_off = registry.resolve_cluster(0x0006).unwrap();
//! assert_eq!(on_off.name(), "OnOff");
//! assert_eq!(on_off.field_id(FieldKind::Command, "On"), Ok(1));
//! assert_eq!(on_off.field_name(FieldKind::Attribute, 0xFFFD), Ok("ClusterRevision"));
//!
//! let err = registry.resolve_cluster(9999).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::NotFound);
//!
//! // Unknown parts are rendered in hex
//! assert_eq!(
//!     registry.path(0x0006, FieldKind::Attribute, 0x1234).to_string(),
//!     "OnOff::Attribute(0x1234)"
//! );
//! ```
//!
//! Custom registries are assembled with a [`RegistryBuilder`], optionally
//! starting from [`SchemaRegistry::standard`] and replacing clusters with
//! the ones of a Matter IDL file (see the `idl` module, enabled by the `idl`
//! feature).

pub mod clusters;
pub mod error;
#[cfg(feature = "idl")]
pub mod idl;
pub mod ids;
pub mod path;
pub mod registry;
pub mod schema;
pub mod table;

pub use clusters::ClusterDef;
pub use error::{BuildError, ErrorCode, SchemaError};
pub use ids::{ClusterId, FieldId, FieldKind, GlobalAttribute, ParseFieldKindError};
pub use path::FieldPath;
pub use registry::{RegistryBuilder, SchemaRegistry};
pub use schema::{ClusterSchema, ClusterSchemaBuilder};
pub use table::{FieldName, FieldTable};
