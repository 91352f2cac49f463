//! Compatibility check of the project consuming the generated schema.
//!
//! The generated module targets one major version of the GraphQL library. Its
//! version is read from the `Cargo.lock` of the consuming project: another version
//! is a warning, no version at all fails the generation.

use std::path::Path;

use anyhow::{bail, Context};
use semver::{Version, VersionReq};

/// Packages the generated code is used with, and the versions it supports.
const PEER_DEPENDENCIES: &[(&str, &str)] = &[("async-graphql", ">=7, <8")];

const NO_PEER_DEPENDENCY_CHECK: &str = "NO_PEER_DEPENDENCY_CHECK";
const PEER_DEPENDENCY_CHECK: &str = "PEER_DEPENDENCY_CHECK";

#[derive(Debug, serde::Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Debug, serde::Deserialize)]
struct LockedPackage {
    name: String,
    version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PeerStatus {
    Compatible {
        name: &'static str,
        version: String,
    },
    Mismatch {
        name: &'static str,
        version: String,
        requirement: &'static str,
    },
    Missing {
        name: &'static str,
    },
}

/// Runs the check against the lockfile, unless disabled from the environment.
pub(crate) fn run(lockfile: Option<&Path>) -> anyhow::Result<()> {
    let no_check = std::env::var(NO_PEER_DEPENDENCY_CHECK).ok();
    let check = std::env::var(PEER_DEPENDENCY_CHECK).ok();

    if is_disabled(no_check.as_deref(), check.as_deref()) {
        tracing::debug!("peer dependency check disabled from the environment");
        return Ok(());
    }

    let Some(lockfile) = lockfile else {
        tracing::debug!("no lockfile configured, skipping the peer dependency check");
        return Ok(());
    };

    let contents = std::fs::read_to_string(lockfile)
        .with_context(|| format!("could not read the lockfile at {}", lockfile.display()))?;

    let mut missing = Vec::new();

    for status in check_lockfile(&contents)? {
        match status {
            PeerStatus::Compatible { name, version } => {
                tracing::debug!("found {name} {version}");
            }
            PeerStatus::Mismatch {
                name,
                version,
                requirement,
            } => {
                tracing::warn!(
                    "{name} {version} is installed, but the generated code supports {requirement}. \
                     Set {NO_PEER_DEPENDENCY_CHECK}=true to silence this warning."
                );
            }
            PeerStatus::Missing { name } => missing.push(name),
        }
    }

    if !missing.is_empty() {
        bail!(
            "{} must be a dependency of the project using the generated code, none found in {}. \
             Set {NO_PEER_DEPENDENCY_CHECK}=true to skip this check.",
            missing.join(", "),
            lockfile.display()
        );
    }

    Ok(())
}

fn is_disabled(no_check: Option<&str>, check: Option<&str>) -> bool {
    matches!(no_check, Some("true" | "1")) || matches!(check, Some("false" | "0"))
}

pub(crate) fn check_lockfile(contents: &str) -> anyhow::Result<Vec<PeerStatus>> {
    let lockfile: Lockfile = toml::from_str(contents).context("invalid lockfile")?;

    let statuses = PEER_DEPENDENCIES
        .iter()
        .map(|&(name, requirement)| {
            let versions: Vec<_> = lockfile
                .package
                .iter()
                .filter(|package| package.name == name)
                .map(|package| package.version.as_str())
                .collect();

            status(name, requirement, &versions)
        })
        .collect();

    Ok(statuses)
}

fn status(name: &'static str, requirement: &'static str, versions: &[&str]) -> PeerStatus {
    let Some(first) = versions.first() else {
        return PeerStatus::Missing { name };
    };

    let compatible = VersionReq::parse(requirement).ok().and_then(|requirement| {
        versions
            .iter()
            .find(|version| Version::parse(version).is_ok_and(|version| requirement.matches(&version)))
    });

    match compatible {
        Some(version) => PeerStatus::Compatible {
            name,
            version: version.to_string(),
        },
        None => PeerStatus::Mismatch {
            name,
            version: first.to_string(),
            requirement,
        },
    }
}
