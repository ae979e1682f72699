use std::{
    fs::File,
    io::{BufReader, BufWriter, Write, stdout},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use courier_optimizer::{
    json::{payload_input::PayloadInput, plan_output::PlanOutput},
    problem::kmh::Kmh,
    selector::{self, PlannerKind},
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// JSON payload with the courier start, restaurants, consumers and orders
    #[arg(short, long)]
    input: PathBuf,

    /// Write the plan to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Average courier speed in km/h
    #[arg(short, long, default_value_t = 20.0)]
    speed: f64,

    /// Planner to run
    #[arg(short, long, default_value = "exact")]
    planner: String,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let kind: PlannerKind = cli.planner.parse()?;

    let file = File::open(&cli.input)
        .with_context(|| format!("cannot open input file {:?}", cli.input))?;
    let payload: PayloadInput = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid payload in {:?}", cli.input))?;

    let speed = Kmh::new(cli.speed);
    let problem = payload.build_problem()?;

    info!(
        orders = problem.order_count(),
        speed_kmph = speed.value(),
        "planning route"
    );

    let result = selector::plan(kind, &problem, speed)?;
    let output = PlanOutput::from(&result);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {path:?}"))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &output)?;
            writer.flush()?;
            info!(path = %path.display(), "plan written");
        }
        None => {
            let mut out = stdout().lock();
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
