use clap::{Parser, Subcommand};
use cog::report::{self, CogReport};
use cog::seed::{random_table, RandomFill};
use cog::table::{self, Table};
use cog::{compute_global_cog, compute_global_cog_par, LengthUnit};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cog", about = "Global center of gravity of a set of mass elements")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a table of default rows (0, 0, 0, 1)
    Template {
        #[arg(long, default_value_t = table::DEFAULT_ROWS)]
        rows: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a table of random elements
    Random {
        #[arg(long, default_value_t = table::DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = 10.0)]
        bounds: f64,
        #[arg(long, default_value_t = 1.0)]
        min_mass: f64,
        #[arg(long, default_value_t = 10.0)]
        max_mass: f64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the COG of one or more X,Y,Z,Mass tables
    Compute {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(short, long, default_value = "m")]
        unit: LengthUnit,
        /// Print a JSON report per table instead of text
        #[arg(long)]
        json: bool,
        /// Reduce the sums on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Write element positions and the COG as scatter points for plotting
    Scatter {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn output_writer(path: Option<&Path>) -> Result<Box<dyn Write>, Box<dyn Error>> {
    Ok(match path {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

fn compute(inputs: &[PathBuf], unit: LengthUnit, json: bool, parallel: bool) -> Result<(), Box<dyn Error>> {
    let pb = if inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut out = io::stdout().lock();
    for input in inputs {
        let elements = Table::from_path(input)?.to_elements();
        let cog = if parallel {
            compute_global_cog_par(&elements)
        } else {
            compute_global_cog(&elements)
        };
        if cog.is_none() {
            tracing::warn!("{}: total mass is zero, COG undefined", input.display());
        }

        if json {
            CogReport::new(&elements, cog.as_ref(), unit).write_json(&mut out)?;
            writeln!(out)?;
        } else {
            if inputs.len() > 1 {
                write!(out, "{}: ", input.display())?;
            }
            writeln!(out, "{}", report::format_cog(cog.as_ref(), unit))?;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Template { rows, output } => {
            let table = Table::new(rows)?;
            table.write_csv(output_writer(output.as_deref())?)?;
            tracing::info!("Wrote template table with {} rows", rows);
        }
        Command::Random {
            rows,
            bounds,
            min_mass,
            max_mass,
            seed,
            output,
        } => {
            let fill = RandomFill {
                bounds,
                min_mass,
                max_mass,
            };
            let table = match seed {
                Some(seed) => random_table(&mut StdRng::seed_from_u64(seed), rows, fill)?,
                None => random_table(&mut rand::rng(), rows, fill)?,
            };
            table.write_csv(output_writer(output.as_deref())?)?;
            tracing::info!("Wrote random table with {} rows", rows);
        }
        Command::Compute {
            inputs,
            unit,
            json,
            parallel,
        } => compute(&inputs, unit, json, parallel)?,
        Command::Scatter { input, output } => {
            let elements = Table::from_path(&input)?.to_elements();
            let cog = compute_global_cog(&elements);
            if cog.is_none() {
                tracing::warn!("COG undefined, scatter output has element points only");
            }
            report::export_scatter(output_writer(output.as_deref())?, &elements, cog.as_ref())?;
        }
    }
    Ok(())
}
