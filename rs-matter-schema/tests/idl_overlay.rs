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


use miette::GraphicalReportHandler;
use rs_matter_schema::idl::{self, LoadError};
use rs_matter_schema::{BuildError, FieldKind, RegistryBuilder, SchemaRegistry};

mod common;

use common::init_tracing;

const CLUSTERS: &str = include_str!("clusters.matter");

#[test]
fn parse_fixture() {
    init_tracing();

    let clusters = idl::parse_clusters(CLUSTERS).expect("valid IDL");
    let names: Vec<_> = clusters.iter().map(|c| c.name).collect();
    assert_eq!(names, ["OnOff", "SampleMei"]);

    let on_off = &clusters[0];
    assert_eq!(on_off.revision, 7);
    assert_eq!(on_off.attributes.len(), 12);
    assert_eq!(on_off.events.len(), 1);
    assert_eq!(on_off.commands.len(), 4);

    let sample = &clusters[1];
    assert_eq!(sample.code, 0xFFF1_FC20);
    assert_eq!(sample.maturity, idl::ApiMaturity::Provisional);
    assert_eq!(sample.commands.len(), 2);
}

#[test]
fn registry_from_idl() {
    init_tracing();

    let registry = SchemaRegistry::from_idl(CLUSTERS).expect("valid IDL");

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.field_id(0xFFF1_FC20, FieldKind::Attribute, "FlipFlop"),
        Ok(0)
    );
    assert_eq!(
        registry.field_name(0xFFF1_FC20, FieldKind::Event, 0),
        Ok("PingCountEvent")
    );
    assert_eq!(
        registry.field_id(0xFFF1_FC20, FieldKind::Command, "AddArguments"),
        Ok(2)
    );
    // lowerCamelCase in IDL, UpperCamelCase in the registry
    assert!(registry
        .field_id(0xFFF1_FC20, FieldKind::Attribute, "flipFlop")
        .is_err());
}

#[test]
fn overlay_replaces_standard_clusters() {
    init_tracing();

    let standard = SchemaRegistry::standard();

    let mut builder = RegistryBuilder::from_registry(standard);
    builder.replace_from_idl(CLUSTERS).expect("valid overlay");
    let overlay = builder.build();

    assert_eq!(overlay.len(), standard.len() + 1);

    // the replaced cluster knows what the IDL defines, and nothing else
    assert_eq!(
        overlay.field_id(0x0006, FieldKind::Attribute, "DimmerSetting"),
        Ok(0x4004)
    );
    assert_eq!(
        overlay.field_name(0x0006, FieldKind::Event, 0),
        Ok("StateChanged")
    );
    assert!(overlay
        .field_id(0x0006, FieldKind::Command, "OffWithEffect")
        .is_err());

    // untouched clusters and the original registry stay as they were
    assert_eq!(
        overlay.field_name(0x0008, FieldKind::Attribute, 0),
        Ok("CurrentLevel")
    );
    assert!(standard
        .field_id(0x0006, FieldKind::Attribute, "DimmerSetting")
        .is_err());
    assert_eq!(
        overlay.path(0xFFF1_FC20, FieldKind::Command, 0).to_string(),
        "SampleMei::Command::Ping"
    );
}

#[test]
fn overlay_rejects_name_clash() {
    let text = "client cluster LevelControl = 0xFFF1FC30 { revision 1; }";

    let mut builder = RegistryBuilder::from_registry(SchemaRegistry::standard());
    let err = builder.replace_from_idl(text).map(|_| ()).expect_err("name is taken");

    assert!(matches!(
        err,
        LoadError::Build(BuildError::DuplicateClusterName { existing: 0x0008, .. })
    ));
}

#[test]
fn duplicate_clusters_in_one_file() {
    let text = "client cluster A = 1 {} server cluster A = 1 {}";

    assert!(matches!(
        SchemaRegistry::from_idl(text),
        Err(LoadError::Build(BuildError::DuplicateCluster { cluster: 1 }))
    ));
}

#[test]
fn parse_errors_are_reported() {
    init_tracing();

    let broken = CLUSTERS.replace("command Toggle(): DefaultSuccess = 2;", "command Toggle() = 2;");

    let err = SchemaRegistry::from_idl(&broken).expect_err("broken IDL");
    let LoadError::Parse(parse_error) = &err else {
        panic!("expected a parse error, got {err:?}");
    };

    let toggle = broken.find("command Toggle").expect("present");
    assert!(parse_error.error_location.offset() >= toggle);

    let mut report = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut report, &err)
        .expect("report renders");
    assert!(report.contains("Failed to parse IDL"));
}
