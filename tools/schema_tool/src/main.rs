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
use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, WrapErr};
use rs_matter_schema::{
    ClusterId, ClusterSchema, FieldId, FieldKind, RegistryBuilder, SchemaError, SchemaRegistry,
};

use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

// Looks up Matter cluster, attribute, event and command IDs and names
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IDL file whose clusters replace or extend the standard ones
    #[arg(long, value_name = "FILE")]
    idl: Option<PathBuf>,

    #[arg(short, long)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ID, name and field counts of a cluster
    Cluster { cluster: ClusterArg },

    /// Resolve a numeric field ID to its name
    Name {
        cluster: ClusterArg,
        /// attribute, event or command
        kind: FieldKind,
        #[arg(value_parser = parse_number)]
        id: FieldId,
    },

    /// Resolve a field name to its numeric ID
    Id {
        cluster: ClusterArg,
        /// attribute, event or command
        kind: FieldKind,
        name: String,
    },

    /// List every field of one cluster, or of all clusters
    Dump { cluster: Option<ClusterArg> },
}

/// A cluster given either by ID (decimal or `0x` hex) or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ClusterArg {
    Id(ClusterId),
    Name(String),
}

impl ClusterArg {
    fn resolve<'a>(&self, registry: &'a SchemaRegistry) -> Result<&'a ClusterSchema, SchemaError> {
        match self {
            Self::Id(id) => registry.resolve_cluster(*id),
            Self::Name(name) => registry.resolve_cluster_by_name(name),
        }
    }
}

impl FromStr for ClusterArg {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            parse_number(s).map(Self::Id)
        } else {
            Ok(Self::Name(s.into()))
        }
    }
}

fn parse_number(s: &str) -> Result<u32, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn load_registry(idl: Option<&Path>) -> miette::Result<Cow<'static, SchemaRegistry>> {
    let standard = SchemaRegistry::standard();

    let Some(path) = idl else {
        return Ok(Cow::Borrowed(standard));
    };

    let text = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    let mut builder = RegistryBuilder::from_registry(standard);
    builder.replace_from_idl(&text)?;

    let registry = builder.build();
    info!(
        "Loaded {}, registry now has {} clusters",
        path.display(),
        registry.len()
    );

    Ok(Cow::Owned(registry))
}

fn print_summary(schema: &ClusterSchema) {
    println!(
        "0x{:04x} {} ({} attributes, {} events, {} commands)",
        schema.id(),
        schema.name(),
        schema.attributes().len(),
        schema.events().len(),
        schema.commands().len()
    );
}

fn dump(schema: &ClusterSchema) {
    print_summary(schema);
    for kind in FieldKind::ALL {
        for (id, name) in schema.table(kind).iter() {
            println!("  {kind:<9} 0x{id:04x} {name}");
        }
    }
}

fn run(registry: &SchemaRegistry, command: Command) -> miette::Result<()> {
    match command {
        Command::Cluster { cluster } => print_summary(cluster.resolve(registry)?),
        Command::Name { cluster, kind, id } => {
            println!("{}", cluster.resolve(registry)?.field_name(kind, id)?);
        }
        Command::Id {
            cluster,
            kind,
            name,
        } => {
            println!("0x{:04x}", cluster.resolve(registry)?.field_id(kind, &name)?);
        }
        Command::Dump { cluster: Some(cluster) } => dump(cluster.resolve(registry)?),
        Command::Dump { cluster: None } => registry.clusters().for_each(dump),
    }

    Ok(())
}

fn main() -> miette::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(args.log_level.unwrap_or(LevelFilter::ERROR)))
        .init();

    let registry = load_registry(args.idl.as_deref())?;

    run(&registry, args.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn cluster_args() {
        assert_eq!("6".parse(), Ok(ClusterArg::Id(6)));
        assert_eq!("0x0B04".parse(), Ok(ClusterArg::Id(0x0B04)));
        assert_eq!("0XFFF1FC05".parse(), Ok(ClusterArg::Id(0xFFF1_FC05)));
        assert_eq!("OnOff".parse(), Ok(ClusterArg::Name("OnOff".into())));
        assert!("0xZZ".parse::<ClusterArg>().is_err());
        assert!("6OnOff".parse::<ClusterArg>().is_err());
    }

    #[test]
    fn name_command() {
        let args = Args::try_parse_from(["schema-tool", "name", "OnOff", "command", "0x02"])
            .expect("valid arguments");

        match args.command {
            Command::Name { cluster, kind, id } => {
                assert_eq!(cluster, ClusterArg::Name("OnOff".into()));
                assert_eq!(kind, FieldKind::Command);
                assert_eq!(id, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn lookups() {
        let registry = SchemaRegistry::standard();

        assert!(run(registry, Command::Cluster { cluster: ClusterArg::Id(0x0006) }).is_ok());
        assert!(run(
            registry,
            Command::Id {
                cluster: ClusterArg::Name("OnOff".into()),
                kind: FieldKind::Command,
                name: "Toggle".into()
            }
        )
        .is_ok());
        assert!(run(registry, Command::Cluster { cluster: ClusterArg::Id(9999) }).is_err());
        assert!(run(
            registry,
            Command::Name {
                cluster: ClusterArg::Id(0x0006),
                kind: FieldKind::Event,
                id: 0
            }
        )
        .is_err());
    }

    #[test]
    fn standard_registry_without_idl() {
        let registry = load_registry(None).expect("standard registry");

        assert!(matches!(registry, Cow::Borrowed(_)));
        assert!(registry.contains(0x0006));
    }
}
