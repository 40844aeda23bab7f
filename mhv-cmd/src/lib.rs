//! Command implementations for the MHV CLI.
//!
//! Every subcommand goes through the memoized loader, so within one process
//! the CSV is read and sampled once per distinct set of data arguments.

use clap::{Args, Subcommand};
use mhv_dashboard::ChartName;
use mhv_data::{DataSource, LoadRequest, DEFAULT_DATA_PATH, DEFAULT_N_SAMPLE};
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod export;
pub mod serve;

/// Loader arguments shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Path to the Melbourne housing CSV
    #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Number of listings to sample after filtering
    #[arg(short = 'n', long, default_value_t = DEFAULT_N_SAMPLE)]
    pub n_sample: usize,

    /// Seed for reproducible sampling (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DataArgs {
    pub fn request(&self) -> LoadRequest {
        LoadRequest::new(DataSource::file(&self.data))
            .with_n_sample(self.n_sample)
            .with_seed(self.seed)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the filtered, sampled listings to CSV
    Sample {
        #[command(flatten)]
        data: DataArgs,

        /// Output path for the sampled CSV
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Print the Vega-Lite spec of one dashboard chart
    Spec {
        #[command(flatten)]
        data: DataArgs,

        /// static-scatter, legend-scatter, brush-scatter-hist or brush-hist-scatter
        #[arg(short = 'c', long)]
        chart: ChartName,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Render the whole dashboard to a standalone HTML page
    Render {
        #[command(flatten)]
        data: DataArgs,

        /// Output path for the HTML page
        #[arg(short = 'o', long, default_value = "dashboard.html")]
        output: PathBuf,
    },

    /// Serve the dashboard over HTTP, rebuilding the page on every request
    Serve {
        #[command(flatten)]
        data: DataArgs,

        /// Address to listen on
        #[arg(short = 'a', long, default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Sample { data, output } => export::run_sample(&data, &output),
        Command::Spec {
            data,
            chart,
            output,
        } => export::run_spec(&data, chart, output.as_deref()),
        Command::Render { data, output } => export::run_render(&data, &output),
        Command::Serve { data, addr } => serve::run_serve(&data, addr).await,
    }
}
