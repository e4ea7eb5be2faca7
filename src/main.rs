use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memberdoc::{Model, PageRenderer, PropertyConvention, RenderContext, RenderOptions, Resources};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("memberdoc")
        .about("Render the property sections of a type page as HTML")
        .arg(
            Arg::new("model")
                .help("Symbol model JSON file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .help("Qualified name of the type whose page is rendered")
                .required(true),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .help("JSON file with render options")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("summarize-overridden")
                .long("summarize-overridden")
                .help("Label inherited lists \"declared in\" instead of \"inherited from\"")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convention")
                .long("convention")
                .help("Property naming convention")
                .value_parser(value_parser!(PropertyConvention)),
        )
        .arg(
            Arg::new("deprecated")
                .long("deprecated")
                .help("Append the deprecated-properties list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write HTML here instead of stdout")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let mut options = match matches.get_one::<PathBuf>("options") {
        Some(path) => RenderOptions::load(path)?,
        None => RenderOptions::default(),
    };
    if matches.get_flag("summarize-overridden") {
        options.summarize_overridden_methods = true;
    }
    if let Some(convention) = matches.get_one::<PropertyConvention>("convention") {
        options.property_convention = *convention;
    }

    let model_path = matches
        .get_one::<PathBuf>("model")
        .context("model path is required")?;
    let type_name = matches
        .get_one::<String>("type")
        .context("type name is required")?;

    let model = Model::load(model_path)?;
    let resources = Resources::new();
    let renderer = PageRenderer::new(&model, &options, &resources);
    let html = renderer.render(type_name, matches.get_flag("deprecated"), &RenderContext::new())?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote property sections");
        }
        None => print!("{}", html),
    }

    Ok(())
}
