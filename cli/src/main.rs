//! elle CLI - fold gendered Spanish markdown into a neutral form.
//!
//! Reads markdown on stdin, writes markdown on stdout:
//!
//! ```text
//! $ echo '**Él** es **bienvenido**!' | elle
//! **Elle** es **bienvenide**!
//! ```
//!
//! Behavior comes from `~/.elle/config.toml` and the `ELLE_*` environment
//! variables (`ELLE_GENDER`, `ELLE_PRONOUN`, `ELLE_SUFFIX`, `ELLE_LANG`,
//! `ELLE_ALIGNMENT`, `ELLE_CONFIG`). Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use elle_config::ElleConfig;
use elle_core::{inflected, parse_markdown, render_markdown};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the folded text; logs must never mix into it.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let settings = ElleConfig::load()
        .resolve()
        .context("invalid elle configuration")?;

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;

    let text = parse_markdown(&source);
    let folded = inflected(&text, settings.context(), settings.inflector())
        .context("failed to fold text")?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", render_markdown(&folded)).context("failed to write stdout")?;
    Ok(())
}
