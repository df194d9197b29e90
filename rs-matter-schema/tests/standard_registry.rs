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


use std::thread;

use rs_matter_schema::{
    clusters, ClusterId, ErrorCode, FieldId, FieldKind, GlobalAttribute, SchemaError,
    SchemaRegistry,
};
use rstest::rstest;

mod common;

use common::init_tracing;

#[test]
fn every_table_is_a_bijection() {
    init_tracing();

    for schema in SchemaRegistry::standard().clusters() {
        for kind in FieldKind::ALL {
            for (id, name) in schema.table(kind).iter() {
                assert_eq!(schema.field_name(kind, id), Ok(name));
                assert_eq!(schema.field_id(kind, name), Ok(id));
            }
        }
    }
}

#[test]
fn rows_load_without_conflicts() {
    let registry = SchemaRegistry::standard();

    assert_eq!(registry.len(), clusters::standard().count());

    for def in clusters::standard() {
        let schema = registry.resolve_cluster(def.id).expect("row is registered");

        assert_eq!(schema.name(), def.name);
        assert_eq!(schema.attributes().len(), def.attributes.len(), "{}", def.name);
        assert_eq!(schema.events().len(), def.events.len(), "{}", def.name);
        assert_eq!(schema.commands().len(), def.commands.len(), "{}", def.name);
    }
}

#[rstest]
#[case(0x0006, FieldKind::Command, "On", 1)]
#[case(0x0006, FieldKind::Attribute, "OnOff", 0)]
#[case(0x0008, FieldKind::Attribute, "CurrentLevel", 0)]
#[case(0x0028, FieldKind::Event, "ShutDown", 1)]
#[case(0x0101, FieldKind::Command, "UnboltDoor", 0x27)]
#[case(0x0300, FieldKind::Attribute, "StartUpColorTemperatureMireds", 0x4010)]
#[case(0x0506, FieldKind::Command, "Seek", 0x0B)]
#[case(0xFFF1_FC05, FieldKind::Event, "TestFabricScopedEvent", 2)]
#[case(0xFFF1_FC06, FieldKind::Command, "FailRandomlyAtFault", 1)]
fn known_fields(
    #[case] cluster: ClusterId,
    #[case] kind: FieldKind,
    #[case] name: &str,
    #[case] id: FieldId,
) {
    let registry = SchemaRegistry::standard();

    assert_eq!(registry.field_id(cluster, kind, name), Ok(id));
    assert_eq!(registry.field_name(cluster, kind, id), Ok(name));
}

#[rstest]
#[case(9999)]
#[case(0x0000)]
#[case(0xFFF1_FC07)]
#[case(ClusterId::MAX)]
fn unknown_clusters(#[case] cluster: ClusterId) {
    let registry = SchemaRegistry::standard();

    assert!(!registry.contains(cluster));
    for kind in FieldKind::ALL {
        let err = registry
            .field_name(cluster, kind, 0)
            .expect_err("unknown cluster");
        assert_eq!(err, SchemaError::ClusterNotFound { cluster });
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}

#[test]
fn empty_namespaces() {
    let registry = SchemaRegistry::standard();

    // OnOff has no events, ProxyDiscovery has nothing but the globals
    for name in ["StateChange", "OnOff", ""] {
        assert_eq!(
            registry
                .field_id(0x0006, FieldKind::Event, name)
                .map_err(|e| e.code()),
            Err(ErrorCode::InvalidName)
        );
    }

    let proxy = registry
        .resolve_cluster_by_name("ProxyDiscovery")
        .expect("defined");
    assert!(proxy.events().is_empty());
    assert!(proxy.commands().is_empty());
    assert_eq!(proxy.attributes().len(), GlobalAttribute::ALL.len());
}

#[test]
fn no_fallback_to_other_clusters() {
    let registry = SchemaRegistry::standard();

    // CurrentLevel exists, but not in OnOff
    assert_eq!(
        registry.field_id(0x0006, FieldKind::Attribute, "CurrentLevel"),
        Err(SchemaError::InvalidName {
            cluster: 0x0006,
            kind: FieldKind::Attribute,
            name: "CurrentLevel".into()
        })
    );
    // LevelControl defines command 0x08, OnOff does not
    assert!(registry
        .field_name(0x0008, FieldKind::Command, 0x08)
        .is_ok());
    assert_eq!(
        registry
            .field_name(0x0006, FieldKind::Command, 0x08)
            .map_err(|e| e.code()),
        Err(ErrorCode::NotFound)
    );
}

#[test]
fn global_attributes_everywhere() {
    for schema in SchemaRegistry::standard().clusters() {
        for attr in GlobalAttribute::ALL {
            assert_eq!(
                schema.field_name(FieldKind::Attribute, attr.id()),
                Ok(attr.name()),
                "{} in {}",
                attr,
                schema.name()
            );
        }
        assert_eq!(
            schema.field_id(FieldKind::Attribute, "ClusterRevision"),
            Ok(65533)
        );
    }
}

#[test]
fn electrical_measurement_is_the_largest_table() {
    let registry = SchemaRegistry::standard();

    let largest = registry
        .clusters()
        .max_by_key(|c| c.attributes().len())
        .expect("not empty");

    assert_eq!(largest.name(), "ElectricalMeasurement");
    assert_eq!(largest.id(), 0x0B04);
    assert!(largest.attributes().len() > 100);
    assert_eq!(
        largest.field_id(FieldKind::Attribute, "RmsVoltageSwellPeriodPhaseC"),
        Ok(0x0A17)
    );
}

#[test]
fn concurrent_readers() {
    init_tracing();

    let addresses: Vec<_> = thread::scope(|s| {
        let readers: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    let registry = SchemaRegistry::standard();
                    assert_eq!(registry.field_id(0x0006, FieldKind::Command, "Toggle"), Ok(2));
                    registry as *const SchemaRegistry as usize
                })
            })
            .collect();

        readers
            .into_iter()
            .map(|r| r.join().expect("reader panicked"))
            .collect()
    });

    // everybody observed the same, single instance
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
