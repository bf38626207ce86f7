use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use epoch_exhibit::cli::{Cli, Command, ScreenArgs};
use epoch_exhibit::model::Readout;
use epoch_exhibit::util::{format_bits, safe_calendar_string};
use epoch_exhibit::view::{render_json, render_text};
use epoch_exhibit::viewmodel::{tick_readouts, Clock, SystemClock};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so readouts can be piped.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let clock = SystemClock;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Bits { value, width } => {
            writeln!(stdout, "{}", format_bits(value, width))?;
        }
        Command::Date { value } => {
            writeln!(stdout, "{}", safe_calendar_string(value))?;
        }
        Command::Show(args) => {
            let readout = args.viewmodel().readout(&clock);
            write_readout(&mut stdout, &readout, args.json)?;
        }
        Command::Watch { screen, ticks } => {
            watch(&mut stdout, &screen, &clock, ticks).await?;
        }
    }

    Ok(())
}

async fn watch(out: &mut impl Write, args: &ScreenArgs, clock: &dyn Clock, ticks: Option<u64>) -> Result<()> {
    let vm = args.viewmodel();
    info!(screen = %vm.screen(), ?ticks, "watching");

    let refresh = tick_readouts(&vm, clock, ticks, |readout| {
        if !args.json {
            writeln!(out)?;
        }
        write_readout(&mut *out, readout, args.json)
    });

    tokio::select! {
        emitted = refresh => {
            let emitted = emitted?;
            debug!(emitted, "watch finished");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
        }
    }

    Ok(())
}

fn write_readout(out: &mut impl Write, readout: &Readout, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", render_json(readout)?)?;
    } else {
        writeln!(out, "{}", render_text(readout))?;
    }
    out.flush()?;
    Ok(())
}
