// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of memviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! memviz CLI entrypoint.
//!
//! Renders a JSON document (or the built-in demo tree) as Graphviz dot on stdout, or as a PNG via
//! `--png`.

use std::error::Error;
use std::path::{Path, PathBuf};

use memviz::model::Place;
use memviz::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <file.json> [options]\n  {program} --demo [options]\n\nOptions:\n  --config <file>      JSON render config (keys: max_items_to_inline, include_private_fields,\n                       abbreviated_type_names, max_depth)\n  --png <out>          rasterize with graphviz `dot` instead of printing dot text\n  --max-inline <n>     inline collections of at most n items (0 = always)\n  --max-depth <n>      stop descending into composites below depth n (0 = unlimited)\n  --full-type-names    keep module paths in type names\n  --hide-private       omit private record fields\n\nExactly one of <file.json> and --demo is required. Set RUST_LOG to control logging."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<PathBuf>,
    demo: bool,
    config: Option<PathBuf>,
    png: Option<PathBuf>,
    max_inline: Option<usize>,
    max_depth: Option<usize>,
    full_type_names: bool,
    hide_private: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--png" => {
                if options.png.is_some() {
                    return Err(());
                }
                options.png = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--max-inline" => {
                if options.max_inline.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.max_inline = Some(raw.parse().map_err(|_| ())?);
            }
            "--max-depth" => {
                if options.max_depth.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.max_depth = Some(raw.parse().map_err(|_| ())?);
            }
            "--full-type-names" => {
                if options.full_type_names {
                    return Err(());
                }
                options.full_type_names = true;
            }
            "--hide-private" => {
                if options.hide_private {
                    return Err(());
                }
                options.hide_private = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(PathBuf::from(arg));
            }
        }
    }

    if options.demo == options.input.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config(options: &CliOptions) -> Result<Config, memviz::ConfigError> {
    let mut config = match &options.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(max_inline) = options.max_inline {
        config = config.with_max_items_to_inline(max_inline);
    }
    if let Some(max_depth) = options.max_depth {
        config = config.with_max_depth(max_depth);
    }
    if options.full_type_names {
        config = config.with_abbreviated_type_names(false);
    }
    if options.hide_private {
        config = config.with_include_private_fields(false);
    }
    Ok(config)
}

fn load_json(path: &Path) -> Result<serde_json::Value, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .map_err(|err| format!("invalid JSON in {}: {err}", path.display()))?;
    Ok(value)
}

fn emit(options: &CliOptions, config: &Config, root: Place<'_>) -> Result<(), Box<dyn Error>> {
    match &options.png {
        Some(path) => {
            let written = memviz::write_png(path, config, &[root])?;
            println!("{}", written.display());
        }
        None => {
            let stdout = std::io::stdout();
            memviz::render(stdout.lock(), config, &[root])?;
        }
    }
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "memviz".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_logging();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let config = resolve_config(&options)?;
        tracing::debug!(?config, "resolved config");

        if options.demo {
            let tree = memviz::demo::shared_leaf_tree();
            return emit(&options, &config, Place::stored(&tree));
        }

        let Some(input) = &options.input else {
            return Err("no input given".into());
        };
        let document = load_json(input)?;
        emit(&options, &config, Place::stored(&document))
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
