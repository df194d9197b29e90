use divan::black_box;
use rs_matter_schema::{FieldKind, SchemaRegistry};

fn main() {
    // Run registered benchmarks.
    divan::main();
}

// Building the standard registry from the static tables
#[divan::bench]
fn build_standard_registry() -> SchemaRegistry {
    SchemaRegistry::from_defs(rs_matter_schema::clusters::standard())
        .expect("valid built-in tables")
}

#[divan::bench]
fn resolve_field_name() -> Option<&'static str> {
    SchemaRegistry::standard()
        .field_name(black_box(0x0B04), FieldKind::Attribute, black_box(0x0A17))
        .ok()
}

#[divan::bench]
fn resolve_field_id() -> Option<u32> {
    SchemaRegistry::standard()
        .field_id(
            black_box(0x0B04),
            FieldKind::Attribute,
            black_box("RmsVoltageSwellPeriodPhaseC"),
        )
        .ok()
}

#[divan::bench]
fn render_unknown_path() -> String {
    SchemaRegistry::standard()
        .path(black_box(0x0006), FieldKind::Attribute, black_box(0x1234))
        .to_string()
}
