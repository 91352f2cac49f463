use std::{fs, path::Path};

use anyhow::Context;
use schema_bridge_datamodel::DataModel;
use schema_bridge_projection::{codegen, project, render_sdl};

use crate::{
    args::GenerateArgs,
    config::{Config, DEFAULT_OUTPUT},
    peer,
};

pub(crate) const ARTIFACT_FILE: &str = "schema-bridge.json";
pub(crate) const SDL_FILE: &str = "schema.graphql";
pub(crate) const MODULE_FILE: &str = "schema_bridge.rs";

/// Projects the datamodel and writes the artifact, the SDL and the Rust module.
pub(crate) fn run(args: &GenerateArgs) -> anyhow::Result<()> {
    let config = Config::load(&args.config)?;

    peer::run(config.peer_dependencies.lockfile.as_deref())?;

    let document = fs::read_to_string(&args.datamodel)
        .with_context(|| format!("could not read the datamodel at {}", args.datamodel.display()))?;

    let datamodel = DataModel::from_json(&document).context("invalid datamodel")?;
    let schema = project(&datamodel, &config.generator).context("could not project the datamodel")?;

    let artifact = schema.to_json()?;
    let sdl = render_sdl(&schema).context("could not render the SDL")?;
    let module = codegen::generate(&schema).context("could not generate the Rust module")?;

    let output = args
        .output
        .clone()
        .or(config.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.into());

    fs::create_dir_all(&output).with_context(|| format!("could not create {}", output.display()))?;

    write(&output.join(ARTIFACT_FILE), &artifact)?;
    write(&output.join(SDL_FILE), &sdl)?;
    write(&output.join(MODULE_FILE), &module)?;

    tracing::info!(
        models = schema.models.len(),
        enums = schema.enums.len(),
        "generated the schema in {}",
        output.display()
    );

    Ok(())
}

fn write(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote generated file");

    Ok(())
}
