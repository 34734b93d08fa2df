//! `boxoffice` demo binary: wiring around the inventory ledger.
//!
//! Nothing here is part of the ledger contract. It builds a ledger from
//! configuration, drives it, and renders what happened.

pub mod config;
pub mod demo;
pub mod render;

use std::io::Write;

use anyhow::Context;

use crate::config::{Cli, Command};

/// Run the selected command, writing program output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let mut ledger = cli.build_ledger().context("invalid showtime configuration")?;
    tracing::debug!(slots = ledger.len(), capacity = cli.capacity, "ledger ready");

    let rendered = match cli.command.unwrap_or_default() {
        Command::Demo => {
            let report = demo::run(&mut ledger);
            render::report(&report, cli.format)?
        }
        Command::Shows => render::listing(&ledger.list_slots(), cli.format)?,
    };

    out.write_all(rendered.as_bytes())
        .context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
