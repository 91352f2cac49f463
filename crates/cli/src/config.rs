use std::path::{Path, PathBuf};

use anyhow::Context;
use schema_bridge_projection::GeneratorSettings;

/// Directory of the generated files when neither the arguments nor the configuration name one.
pub(crate) const DEFAULT_OUTPUT: &str = "./generated";

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Configuration of a generation run.
pub(crate) struct Config {
    /// Options of the projection
    pub generator: GeneratorSettings,
    /// Directory for the generated files
    pub output: Option<PathBuf>,
    /// Compatibility check of the consuming project
    pub peer_dependencies: PeerDependenciesConfig,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PeerDependenciesConfig {
    /// The `Cargo.lock` of the project using the generated schema. No check without it.
    pub lockfile: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration file. A missing file is the default configuration.
    ///
    /// Relative paths are resolved against the directory of the file.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read the configuration at {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("invalid configuration at {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));

        Ok(config.relative_to(base))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        self.output = self.output.map(|output| base.join(output));
        self.peer_dependencies.lockfile = self.peer_dependencies.lockfile.map(|lockfile| base.join(lockfile));
        self
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use schema_bridge_projection::IdIntMapping;

    use super::*;

    #[test]
    fn empty_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.generator.jsdoc);
        assert_eq!(config.generator.prisma_client_context_field, "prisma");
    }

    #[test]
    fn full_config() {
        let config = indoc! {r#"
            output = "src/generated"

            [generator]
            project_id_int_to_graphql = "Int"
            jsdoc = false
            prisma_client_context_field = "db"

            [peer_dependencies]
            lockfile = "../Cargo.lock"
        "#};

        let config: Config = toml::from_str(config).unwrap();

        assert_eq!(config.output, Some(PathBuf::from("src/generated")));
        assert_eq!(config.generator.project_id_int_to_graphql, IdIntMapping::Int);
        assert!(!config.generator.jsdoc);
        assert_eq!(config.generator.prisma_client_context_field, "db");
        assert_eq!(config.peer_dependencies.lockfile, Some(PathBuf::from("../Cargo.lock")));
    }

    #[test]
    fn camel_case_generator_keys() {
        let config = indoc! {r#"
            [generator]
            projectIdIntToGraphQL = "ID"
            prismaClientContextField = "client"
        "#};

        let config: Config = toml::from_str(config).unwrap();

        assert_eq!(config.generator.project_id_int_to_graphql, IdIntMapping::Id);
        assert_eq!(config.generator.prisma_client_context_field, "client");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let config = indoc! {r#"
            [generator]
            jsdocs = true
        "#};

        let error = toml::from_str::<Config>(config).unwrap_err();

        assert!(error.to_string().contains("unknown field `jsdocs`"), "{error}");
    }

    #[test]
    fn paths_are_relative_to_the_file() {
        let config = Config {
            output: Some(PathBuf::from("generated")),
            peer_dependencies: PeerDependenciesConfig {
                lockfile: Some(PathBuf::from("Cargo.lock")),
            },
            ..Default::default()
        };

        let config = config.relative_to(Path::new("app"));

        assert_eq!(config.output, Some(PathBuf::from("app/generated")));
        assert_eq!(config.peer_dependencies.lockfile, Some(PathBuf::from("app/Cargo.lock")));
    }

    #[test]
    fn missing_file_is_the_default() {
        let config = Config::load(Path::new("./does/not/exist.toml")).unwrap();

        assert_eq!(config, Config::default());
    }
}
