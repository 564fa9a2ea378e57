use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rglib::{DecodedIui, IuiListResult};
use serde::Serialize;

/// Decode and check RG Nets installed unit identifiers and product names.
#[derive(Parser)]
#[command(name = "rglib")]
#[command(version)]
#[command(about = "Decode and check RG Nets installed unit identifiers and product names")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options available to all commands.
#[derive(Args, Clone)]
pub struct GlobalOptions {
    /// Output JSON instead of human-readable format.
    #[arg(long = "json", global = true)]
    pub is_json: bool,

    /// Enable verbose logging.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub is_verbose: bool,

    /// Suppress all logging output.
    #[arg(short = 'q', long = "quiet", global = true)]
    pub is_quiet: bool,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Delimited list of IUIs.
    pub list: String,

    /// Separator between IUIs. Defaults to ",".
    #[arg(short = 's', long, env = "RGLIB_SEPARATOR")]
    pub separator: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode one IUI into its components.
    Decode { iui: String },

    /// Print whether an IUI is valid.
    Validate { iui: String },

    /// Print the canonical form of an IUI.
    Clean { iui: String },

    /// Decode a delimited list of IUIs.
    DecodeList(ListArgs),

    /// Print whether a list holds at least one valid IUI.
    HasValid(ListArgs),

    /// Print how many nodes a product is expected to have.
    Nodes {
        product: String,

        /// Seat/unit quantity of the license.
        #[arg(allow_hyphen_values = true)]
        sul: i64,
    },

    /// Print the support part number for a product.
    SupportSku { product: String },
}

impl Cli {
    /// Runs the selected command, writing its output to `out`. Returns
    /// `false` when the input was rejected.
    pub fn run(&self, out: &mut impl Write) -> Result<bool> {
        let json = self.global.is_json;
        match &self.command {
            Commands::Decode { iui } => {
                let decoded = rglib::decode_iui(iui);
                if json {
                    write_json(out, &decoded)?;
                } else {
                    write_decoded(out, &decoded)?;
                }
                Ok(decoded.is_valid())
            }
            Commands::Validate { iui } => {
                let valid = rglib::is_valid_iui(iui);
                writeln!(out, "{valid}")?;
                Ok(valid)
            }
            Commands::Clean { iui } => {
                let cleaned = rglib::clean_iui(iui);
                if json {
                    write_json(out, &cleaned)?;
                } else {
                    writeln!(out, "{cleaned}")?;
                }
                Ok(!cleaned.is_empty())
            }
            Commands::DecodeList(args) => {
                let result = rglib::decode_iui_list(&args.list, args.separator.as_deref());
                if json {
                    write_json(out, &result)?;
                } else {
                    write_list(out, &result)?;
                }
                Ok(result.valid)
            }
            Commands::HasValid(args) => {
                let found = rglib::has_valid_iui(&args.list, args.separator.as_deref());
                writeln!(out, "{found}")?;
                Ok(found)
            }
            Commands::Nodes { product, sul } => {
                writeln!(out, "{}", rglib::expected_nodes(product, *sul))?;
                Ok(true)
            }
            Commands::SupportSku { product } => {
                let sku = rglib::support_part_number(product);
                if json {
                    write_json(out, &sku)?;
                } else {
                    writeln!(out, "{sku}")?;
                }
                Ok(true)
            }
        }
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn write_decoded(out: &mut impl Write, decoded: &DecodedIui) -> Result<()> {
    match decoded {
        DecodedIui::Valid(iui) => {
            writeln!(out, "cores: {}", iui.cores)?;
            writeln!(out, "speed: {}", iui.speed)?;
            writeln!(out, "ram:   {}", iui.ram)?;
            writeln!(out, "disk:  {}", iui.disk)?;
            writeln!(out, "macs:  {}", iui.macs)?;
            writeln!(out, "iui:   {}", iui.iui)?;
        }
        DecodedIui::Invalid(reason) => writeln!(out, "invalid: {reason}")?,
    }
    Ok(())
}

fn write_list(out: &mut impl Write, result: &IuiListResult) -> Result<()> {
    writeln!(out, "valid: {}", result.valid)?;
    for iui in &result.iuis {
        writeln!(out, "{iui}")?;
    }
    Ok(())
}
