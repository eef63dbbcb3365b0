use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchboard::config::Config;
use sketchboard::draw::render::annotation_label;
use sketchboard::export;
use sketchboard::script::{self, Session};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version, about = "Vector shape editor for lines, rectangles and circles")]
struct Cli {
    /// Replay a JSON script of pointer, key and toolbar steps
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Write the final canvas to this PNG file
    #[arg(long, short = 'o', value_name = "PNG", requires = "replay")]
    output: Option<PathBuf>,

    /// Write the final canvas to the configured export directory
    #[arg(long, action = ArgAction::SetTrue, requires = "replay", conflicts_with = "output")]
    export: bool,

    /// Print the resulting shapes as JSON instead of a summary
    #[arg(long, action = ArgAction::SetTrue, requires = "replay")]
    json: bool,

    /// Use this config file instead of ~/.config/sketchboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.replay else {
        println!("sketchboard: vector shape editor for lines, rectangles and circles");
        println!();
        println!("Usage:");
        println!("  sketchboard --replay <SCRIPT> [--output <PNG> | --export] [--json]");
        println!("  sketchboard --help");
        println!();
        println!("Script steps (JSON array, \"type\" field):");
        println!("  pointer_down / pointer_move / pointer_up  {{\"x\": .., \"y\": ..}}");
        println!("  pointer_leave, key_down {{\"key\": \"delete\"}}");
        println!("  set_tool {{\"tool\": \"select|line|rectangle|circle\"}}");
        println!("  set_annotations {{\"visible\": true}}, toggle_annotations");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let steps = script::load_script(&script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    let mut session = Session::new(&config);
    session.run(&steps);

    let editor = session.editor();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(editor.shapes().shapes())?);
    } else {
        println!("{} shape(s)", editor.shapes().len());
        for (index, shape) in editor.shapes().shapes().iter().enumerate() {
            let (start, end) = (shape.start(), shape.end());
            println!(
                "  #{index} {:?} ({}, {}) -> ({}, {}) [{}]",
                shape.kind(),
                start.x,
                start.y,
                end.x,
                end.y,
                annotation_label(shape)
            );
        }
        match editor.selected() {
            Some(index) => println!("selected: #{index}"),
            None => println!("selected: none"),
        }
    }

    if let Some(path) = &cli.output {
        export::export_png(session.frame(), session.canvas(), path)
            .with_context(|| format!("Failed to export {}", path.display()))?;
    } else if cli.export {
        let directory = config
            .export
            .directory
            .clone()
            .unwrap_or_else(export::default_export_directory);
        let path = export::export_png_timestamped(
            session.frame(),
            session.canvas(),
            &directory,
            &config.export.filename_template,
        )
        .context("Failed to export canvas")?;
        println!("exported: {}", path.display());
    }

    Ok(())
}
