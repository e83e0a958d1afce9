use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use marshal::Visibility;
use mvc::{Locale, PortletMode};
use portlet_tools::{
    apply_action, decode_int, decode_string, load_portlet, render_report, RenderOptions,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "portlet-tools",
    version,
    about = "Portlet parameter encoding and lifecycle tools"
)]
struct Cli {
    /// Log filter, e.g. `debug` or `mvc=trace`. Defaults to `RUST_LOG`, then `warn`.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a value into a token.
    Encode {
        #[arg(long, value_enum, default_value_t = Policy::Private)]
        policy: Policy,
        #[command(subcommand)]
        value: EncodeValue,
    },
    /// Decode a token and report whether the default was used.
    Decode {
        #[arg(long, value_enum, default_value_t = Policy::Private)]
        policy: Policy,
        #[command(subcommand)]
        value: DecodeValue,
    },
    /// Run the action phase and print the resulting render query.
    Action {
        /// Query string of the action URL.
        #[arg(long, default_value = "")]
        query: String,
        /// Urlencoded form body.
        #[arg(long, default_value = "")]
        form: String,
        /// Portlet config TOML.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run the render phase and print a JSON report.
    Render {
        /// Query string of the render URL.
        #[arg(long, default_value = "")]
        query: String,
        /// Response locale, e.g. `de_DE`.
        #[arg(long)]
        locale: Option<String>,
        /// Portlet mode.
        #[arg(long, default_value = "view")]
        mode: String,
        /// Web application context path.
        #[arg(long, default_value = "")]
        context_path: String,
        /// Portlet config TOML.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum EncodeValue {
    Int {
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    String { value: String },
}

#[derive(Subcommand)]
enum DecodeValue {
    Int {
        /// Token to decode; omit to decode an absent parameter.
        token: Option<String>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        default: i32,
    },
    String {
        token: Option<String>,
        #[arg(long, default_value = "")]
        default: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Public,
    Private,
}

impl From<Policy> for Visibility {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Public => Self::Public,
            Policy::Private => Self::Private,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match cli.command {
        Command::Encode { policy, value } => {
            let codec = Visibility::from(policy).codec();
            let token = match value {
                EncodeValue::Int { value } => codec.encode_int(value),
                EncodeValue::String { value } => codec.encode_string(&value),
            };
            println!("{token}");
        }
        Command::Decode { policy, value } => {
            let codec = Visibility::from(policy).codec();
            let json = match value {
                DecodeValue::Int { token, default } => {
                    serde_json::to_string_pretty(&decode_int(codec, token.as_deref(), default))
                }
                DecodeValue::String { token, default } => {
                    serde_json::to_string_pretty(&decode_string(codec, token.as_deref(), &default))
                }
            }
            .context("serialize json")?;
            println!("{json}");
        }
        Command::Action {
            query,
            form,
            config,
        } => {
            let portlet = load_portlet(config.as_deref()).context("load portlet")?;
            let render_query = apply_action(&portlet, &query, &form).context("process action")?;
            println!("{render_query}");
        }
        Command::Render {
            query,
            locale,
            mode,
            context_path,
            config,
        } => {
            let portlet = load_portlet(config.as_deref()).context("load portlet")?;
            let options = RenderOptions {
                query,
                locale: locale
                    .as_deref()
                    .map(Locale::parse)
                    .transpose()
                    .context("parse locale")?,
                mode: mode.parse::<PortletMode>().context("parse mode")?,
                context_path,
            };
            let report = render_report(&portlet, &options).context("render")?;
            let json = serde_json::to_string_pretty(&report).context("serialize json")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid log filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
