mod catalog;
mod cli;
mod engine;
mod prelude;
mod quantity;
mod request;
mod tables;

use clap::Parser;

use crate::{
    catalog::Catalogs,
    cli::{Args, CatalogArgs, Command, SizeArgs},
    engine::SizingEngine,
    prelude::*,
    request::SizingRequest,
    tables::{
        build_battery_catalog_table, build_battery_table, build_generator_table,
        build_inverter_catalog_table, build_locations_table, build_protection_table,
        build_summary_table,
    },
};

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    match Args::parse().command {
        Command::Size(args) => size(&args),

        Command::Catalog(args) => {
            let catalogs = load_catalogs(&args)?;
            println!("{}", build_inverter_catalog_table(&catalogs));
            println!("{}", build_battery_catalog_table(&catalogs));
            Ok(())
        }

        Command::Locations(args) => {
            let catalogs = load_catalogs(&args)?;
            println!("{}", build_locations_table(&catalogs));
            Ok(())
        }
    }
}

fn size(args: &SizeArgs) -> Result {
    let catalogs = load_catalogs(&args.catalogs)?;
    let mut request = SizingRequest::from_toml_file(&args.request)?;
    let engine = SizingEngine::builder().catalogs(&catalogs).config(args.engine.into()).build();

    let mut result = engine.run(&request)?;

    // The re-entry loop is bounded to a single retry: one recommendation,
    // one override, done.
    if args.accept_upsize
        && let Some(warning) = &result.pv_warning
        && let Some(recommended) = warning.recommended_inverter_size
    {
        info!(size = %recommended, "re-running with the recommended inverter tier");
        request.preferences.preferred_inverter_size = Some(recommended);
        result = engine.run(&request)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", build_summary_table(&result));
    println!("{}", build_battery_table(&result));
    println!("{}", build_protection_table(&result));
    println!("{}", build_generator_table(&result));
    if let Some(warning) = &result.pv_warning {
        warn!("{warning}");
    }
    if result.inverter.exceeds_catalog {
        warn!("The load exceeds every catalog inverter; contact us for a custom design.");
    }
    Ok(())
}

fn load_catalogs(args: &CatalogArgs) -> Result<Catalogs> {
    match &args.path {
        Some(path) => Catalogs::from_toml_file(path),
        None => Ok(Catalogs::default()),
    }
}
