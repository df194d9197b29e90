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

//! The built-in cluster tables of the Matter specification.
//!
//! Every cluster is one [`ClusterDef`] row: plain `(id, name)` pairs per
//! field kind. The rows are data; [`crate::SchemaRegistry::standard`] turns
//! them into hashed tables once per process.

use crate::ids::{ClusterId, FieldId, GlobalAttribute};

/// A static description of one cluster, as (id, name) pairs per field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterDef {
    pub id: ClusterId,
    pub name: &'static str,
    pub attributes: &'static [(FieldId, &'static str)],
    pub events: &'static [(FieldId, &'static str)],
    pub commands: &'static [(FieldId, &'static str)],
}

pub(crate) const fn global(attr: GlobalAttribute) -> (FieldId, &'static str) {
    (attr.id(), attr.name())
}

/// Declares a `CLUSTERS` table of [`ClusterDef`] rows.
///
/// The global attributes are appended to the attributes of every cluster,
/// the same way the data model base mandates them.
macro_rules! clusters {
    ($(
        $cluster:ident = $code:literal {
            attributes { $($attr_code:literal => $attr:ident),* $(,)? }
            events { $($event_code:literal => $event:ident),* $(,)? }
            commands { $($cmd_code:literal => $cmd:ident),* $(,)? }
        }
    )*) => {
        pub(crate) const CLUSTERS: &[$crate::clusters::ClusterDef] = &[$(
            $crate::clusters::ClusterDef {
                id: $code,
                name: stringify!($cluster),
                attributes: &[
                    $(($attr_code, stringify!($attr)),)*
                    $crate::clusters::global($crate::ids::GlobalAttribute::GeneratedCommandList),
                    $crate::clusters::global($crate::ids::GlobalAttribute::AcceptedCommandList),
                    $crate::clusters::global($crate::ids::GlobalAttribute::EventList),
                    $crate::clusters::global($crate::ids::GlobalAttribute::AttributeList),
                    $crate::clusters::global($crate::ids::GlobalAttribute::FeatureMap),
                    $crate::clusters::global($crate::ids::GlobalAttribute::ClusterRevision),
                ],
                events: &[$(($event_code, stringify!($event)),)*],
                commands: &[$(($cmd_code, stringify!($cmd)),)*],
            },
        )*];
    };
}

mod appliances;
mod closures;
mod general;
mod hvac;
mod lighting;
mod measurement;
mod media;
mod system;
mod testing;

const GROUPS: &[&[ClusterDef]] = &[
    general::CLUSTERS,
    system::CLUSTERS,
    appliances::CLUSTERS,
    closures::CLUSTERS,
    hvac::CLUSTERS,
    lighting::CLUSTERS,
    measurement::CLUSTERS,
    media::CLUSTERS,
    testing::CLUSTERS,
];

/// Iterate over every built-in cluster row.
pub fn standard() -> impl Iterator<Item = &'static ClusterDef> {
    GROUPS.iter().flat_map(|group| group.iter())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn globals_appended() {
        let on_off = standard().find(|c| c.name == "OnOff").expect("OnOff row");

        let tail: Vec<_> = on_off.attributes.iter().rev().take(6).rev().copied().collect();
        assert_eq!(tail, GlobalAttribute::ALL.map(global).to_vec());
    }

    #[test]
    fn rows_are_unique() {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for def in standard() {
            assert!(ids.insert(def.id), "duplicate id 0x{:04x}", def.id);
            assert!(names.insert(def.name), "duplicate name {}", def.name);
        }
    }
}
