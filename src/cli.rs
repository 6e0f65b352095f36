use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    engine::Config,
    quantity::{power::Watts, voltage::Volts},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Size a full system from a request file.
    Size(Box<SizeArgs>),

    /// Print the built-in (or overridden) component catalogs.
    Catalog(CatalogArgs),

    /// List the known locations and their peak sun hours.
    Locations(CatalogArgs),
}

#[derive(Parser)]
pub struct SizeArgs {
    /// Path to the TOML sizing request.
    #[clap(long, env = "SIZING_REQUEST_PATH", default_value = "request.toml")]
    pub request: PathBuf,

    #[clap(flatten)]
    pub catalogs: CatalogArgs,

    /// Re-run once with the recommended inverter tier if the array would
    /// clip at the selected tier's PV input ceiling.
    #[clap(long)]
    pub accept_upsize: bool,

    /// Print the result as JSON instead of tables.
    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub engine: EngineArgs,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Optional TOML file overriding the built-in reference data.
    #[clap(long = "catalogs", env = "CATALOGS_PATH")]
    pub path: Option<PathBuf>,
}

/// Engine constants, overridable per run.
#[derive(Copy, Clone, Parser)]
pub struct EngineArgs {
    /// Peak-load multiplier applied before tier selection.
    #[clap(long, default_value = "1.3", env = "SAFETY_MARGIN")]
    pub safety_margin: f64,

    /// Fraction of usable bank capacity the array must refill daily.
    #[clap(long, default_value = "0.8", env = "CHARGE_DEPTH_FACTOR")]
    pub charge_depth_factor: f64,

    #[clap(long, default_value = "0.9", env = "CHARGE_EFFICIENCY")]
    pub charge_efficiency: f64,

    /// Generation head-room for wiring and conversion losses.
    #[clap(long, default_value = "1.2", env = "SYSTEM_LOSS_BUFFER")]
    pub system_loss_buffer: f64,

    #[clap(long, default_value = "230", env = "MAINS_VOLTAGE")]
    pub mains_voltage: Volts,

    #[clap(long, default_value = "0.8", env = "POWER_FACTOR")]
    pub power_factor: f64,

    /// Multiplier on computed currents before round-up.
    #[clap(long, default_value = "1.25", env = "CURRENT_ALLOWANCE")]
    pub current_allowance: f64,

    /// Inverter watts at or above which the changeover is automatic.
    #[clap(long, default_value = "5000", env = "AUTOMATIC_SWITCH_THRESHOLD_WATTS")]
    pub automatic_switch_threshold_watts: f64,

    /// Symmetric half-width of the quoted price band.
    #[clap(long, default_value = "0.15", env = "PRICE_UNCERTAINTY")]
    pub price_uncertainty: f64,
}

impl From<EngineArgs> for Config {
    fn from(args: EngineArgs) -> Self {
        Self {
            safety_margin: args.safety_margin,
            charge_depth_factor: args.charge_depth_factor,
            charge_efficiency: args.charge_efficiency,
            system_loss_buffer: args.system_loss_buffer,
            mains_voltage: args.mains_voltage,
            power_factor: args.power_factor,
            current_allowance: args.current_allowance,
            automatic_switch_threshold: Watts::from(args.automatic_switch_threshold_watts),
            price_uncertainty: args.price_uncertainty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    #[test]
    fn test_defaults_match_the_engine_config() {
        let args = Args::parse_from(["harmattan", "size", "--request", "request.toml"]);
        let Command::Size(size) = args.command else {
            panic!("expected the size command");
        };
        let config = Config::from(size.engine);
        assert_eq!(config.safety_margin, Config::default().safety_margin);
        assert_eq!(config.mains_voltage, Quantity(230.0));
        assert_eq!(config.automatic_switch_threshold, Quantity(5000.0));
    }
}
