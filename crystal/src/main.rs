//! Entry point: parses args and wires provider -> sampler -> channel ->
//! scheduler.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crystal::app::App;
use crystal_telemetry::{
    spawn_sampler, MetricsSampler, SampleChannel, SystemProvider, SAMPLE_INTERVAL,
};

struct ParsedArgs {
    disk: String,
    sample_ms: u64,
    tick_ms: u64,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "crystal".into());
    let usage =
        format!("Usage: {prog} [--disk PATH|-d PATH] [--sample-ms MILLIS] [--tick-ms MILLIS]");

    let mut parsed = ParsedArgs {
        disk: "/".into(),
        sample_ms: SAMPLE_INTERVAL.as_millis() as u64,
        tick_ms: 80,
    };

    fn millis(v: Option<String>, usage: &str) -> Result<u64, String> {
        v.and_then(|s| s.parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .ok_or_else(|| usage.to_string())
    }

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage),
            "--disk" | "-d" => parsed.disk = it.next().ok_or_else(|| usage.clone())?,
            "--sample-ms" => parsed.sample_ms = millis(it.next(), &usage)?,
            "--tick-ms" => parsed.tick_ms = millis(it.next(), &usage)?,
            _ if arg.starts_with("--disk=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        parsed.disk = v.to_string();
                    }
                }
            }
            _ if arg.starts_with("--sample-ms=") => {
                parsed.sample_ms = millis(arg.split_once('=').map(|(_, v)| v.to_string()), &usage)?;
            }
            _ if arg.starts_with("--tick-ms=") => {
                parsed.tick_ms = millis(arg.split_once('=').map(|(_, v)| v.to_string()), &usage)?;
            }
            _ => return Err(usage),
        }
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    // Logs would tear the TUI, so they only go to stderr on request.
    if env::var_os("CRYSTAL_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_env("CRYSTAL_LOG"))
            .with_writer(std::io::stderr)
            .init();
    }

    let channel = SampleChannel::default();
    let stop = Arc::new(AtomicBool::new(false));
    let sampler = MetricsSampler::new(SystemProvider::new(&parsed.disk));
    let handle = spawn_sampler(
        sampler,
        channel.clone(),
        Duration::from_millis(parsed.sample_ms),
        stop.clone(),
    );

    let mut app = App::new(channel).with_tick(Duration::from_millis(parsed.tick_ms));
    let res = app.run().await;

    // The sampler notices the flag at its next iteration boundary.
    stop.store(true, Ordering::Relaxed);
    let _ = handle.await;

    res
}
