use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

mod error;
mod reader;
mod types;
mod writer;

use types::{MhtParameters, Value};

/// Create a parameter file for MHT
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Create a parameter file called FILE
    #[arg(value_name = "FILE")]
    filename: PathBuf,

    #[arg(long = "varx", default_value_t = 1.0, allow_negative_numbers = true)]
    pos_var_x: f64,
    #[arg(long = "vary", default_value_t = 1.0, allow_negative_numbers = true)]
    pos_var_y: f64,
    #[arg(long = "vargrad", default_value_t = 0.01, allow_negative_numbers = true)]
    grad_var: f64,
    #[arg(long = "varint", default_value_t = 100.0, allow_negative_numbers = true)]
    int_var: f64,
    #[arg(long = "varproc", default_value_t = 0.5, allow_negative_numbers = true)]
    proc_var: f64,

    #[arg(long = "pod", default_value_t = 0.9999, allow_negative_numbers = true)]
    pod: f64,
    #[arg(long = "lambdax", default_value_t = 20.0, allow_negative_numbers = true)]
    lambda_x: f64,
    #[arg(long = "ntps", default_value_t = 0.004, allow_negative_numbers = true)]
    new_tracks_per_scan: f64,
    #[arg(long = "mfaps", default_value_t = 0.0002, allow_negative_numbers = true)]
    mean_false_alarms_per_scan: f64,
    #[arg(long = "mxghpg", default_value_t = 300, value_parser = parse_count, allow_negative_numbers = true)]
    max_glob_hypo_per_grp: i64,

    #[arg(long = "mxdpth", default_value_t = 3, value_parser = parse_count, allow_negative_numbers = true)]
    max_depth: i64,
    #[arg(long = "mnratio", default_value_t = 0.001, allow_negative_numbers = true)]
    min_ratio: f64,
    #[arg(long = "intthrsh", default_value_t = 0.90, allow_negative_numbers = true)]
    int_thresh: f64,
    #[arg(long = "mxdist", default_value_t = 5.9, allow_negative_numbers = true)]
    max_dist: f64,

    #[arg(long = "varvel", default_value_t = 200.0, allow_negative_numbers = true)]
    init_var_vel: f64,

    #[arg(long = "frames", default_value_t = 999999, value_parser = parse_count, allow_negative_numbers = true)]
    frame_cnt: i64,
    #[arg(short = 'A', default_value_t = 999999, value_parser = parse_count, allow_negative_numbers = true)]
    diag_a: i64,
    #[arg(short = 'B', default_value_t = 999999, value_parser = parse_count, allow_negative_numbers = true)]
    diag_b: i64,
    #[arg(short = 'C', default_value_t = 999999, value_parser = parse_count, allow_negative_numbers = true)]
    diag_c: i64,

    /// Re-read the written file and check it against the requested values
    #[arg(long)]
    verify: bool,
}

impl Args {
    fn params(&self) -> MhtParameters {
        MhtParameters {
            pos_var_x: self.pos_var_x,
            pos_var_y: self.pos_var_y,
            grad_var: self.grad_var,
            int_var: self.int_var,
            proc_var: self.proc_var,
            pod: self.pod,
            lambda_x: self.lambda_x,
            new_tracks_per_scan: self.new_tracks_per_scan,
            mean_false_alarms_per_scan: self.mean_false_alarms_per_scan,
            max_glob_hypo_per_grp: self.max_glob_hypo_per_grp,
            max_depth: self.max_depth,
            min_ratio: self.min_ratio,
            int_thresh: self.int_thresh,
            max_dist: self.max_dist,
            init_var_vel: self.init_var_vel,
            frame_cnt: self.frame_cnt,
            diag_a: self.diag_a,
            diag_b: self.diag_b,
            diag_c: self.diag_c,
        }
    }
}

/// Integer flag values; `300.0` is taken as `300`, `7.5` is refused.
fn parse_count(s: &str) -> Result<i64, String> {
    if let Ok(n) = s.parse::<i64>() {
        return Ok(n);
    }
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < i64::MAX as f64 => Ok(x as i64),
        _ => Err(format!("invalid integer value: '{s}'")),
    }
}

/// Compares two parameter sets at the precision the file stores them.
fn same_as_written(written: &MhtParameters, read: &MhtParameters) -> bool {
    written
        .fields()
        .iter()
        .zip(read.fields().iter())
        .all(|((_, a), (_, b))| match (a, b) {
            (Value::Float(a), Value::Float(b)) => {
                writer::format_float(*a) == writer::format_float(*b)
            }
            (a, b) => a == b,
        })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let params = args.params();

    writer::write(&args.filename, &params)
        .with_context(|| format!("could not write {}", args.filename.display()))?;
    info!("wrote MHT parameters to {}", args.filename.display());

    if args.verify {
        let read = reader::read(&args.filename)
            .with_context(|| format!("could not read back {}", args.filename.display()))?;
        if !same_as_written(&params, &read) {
            bail!("{} does not match the requested parameters", args.filename.display());
        }
        for (name, value) in read.fields() {
            match value {
                Value::Float(v) => info!("{name} = {}", writer::format_float(v)),
                Value::Int(v) => info!("{name} = {v}"),
            }
        }
    }

    Ok(())
}
