//! File outputs: sampled CSV, single chart specs and the standalone page.

use crate::DataArgs;
use log::info;
use mhv_dashboard::charts::housing_data;
use mhv_dashboard::page::render_html;
use mhv_dashboard::{ChartName, Dashboard};
use mhv_data::get_data;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write the sampled listings (with their 0-based index) to `output`.
pub fn run_sample(args: &DataArgs, output: &Path) -> anyhow::Result<()> {
    let dataset = get_data(&args.request())?;
    let file = File::create(output)?;
    dataset.write_csv(BufWriter::new(file))?;
    info!("Wrote {} sampled listings to {}", dataset.len(), output.display());
    Ok(())
}

/// Print (or write) the pretty Vega-Lite spec of one chart.
pub fn run_spec(args: &DataArgs, chart: ChartName, output: Option<&Path>) -> anyhow::Result<()> {
    let dataset = get_data(&args.request())?;
    let spec = chart.build(housing_data(&dataset)?)?;
    let text = serde_json::to_string_pretty(&spec)?;
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            info!("Wrote {} spec to {}", chart, path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Render all four sections to a self-contained HTML page.
pub fn run_render(args: &DataArgs, output: &Path) -> anyhow::Result<()> {
    let dataset = get_data(&args.request())?;
    let dashboard = Dashboard::build(&dataset)?;
    std::fs::write(output, render_html(&dashboard))?;
    info!(
        "Rendered dashboard ({} listings, {} charts) to {}",
        dataset.len(),
        dashboard.charts().count(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(rows: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Suburb,Rooms,Type,Price,Distance,Landsize,Regionname").unwrap();
        for i in 0..rows {
            writeln!(
                file,
                "Richmond,{},{},{},{},{},Northern Metropolitan",
                1 + i % 4,
                ["h", "u", "t"][i % 3],
                600_000 + i * 1_000,
                2.6 + (i % 10) as f64,
                100 + i
            )
            .unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn args(path: &Path, n_sample: usize) -> DataArgs {
        DataArgs {
            data: path.to_path_buf(),
            n_sample,
            seed: Some(5),
        }
    }

    #[test]
    fn test_run_sample_writes_indexed_csv() {
        let input = fixture(30);
        let out = tempfile::NamedTempFile::new().unwrap();
        run_sample(&args(input.path(), 12), out.path()).unwrap();

        let text = std::fs::read_to_string(out.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,Price,Landsize,Distance,Type,Regionname");
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("0,"));
        assert!(lines[12].starts_with("11,"));
    }

    #[test]
    fn test_run_spec_to_file() {
        let input = fixture(30);
        let out = tempfile::NamedTempFile::new().unwrap();
        run_spec(&args(input.path(), 10), ChartName::LegendScatter, Some(out.path())).unwrap();

        let spec: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(spec["params"][0]["bind"], "legend");
    }

    #[test]
    fn test_run_render_writes_page() {
        let input = fixture(30);
        let out = tempfile::NamedTempFile::new().unwrap();
        run_render(&args(input.path(), 25), out.path()).unwrap();
        let html = std::fs::read_to_string(out.path()).unwrap();
        assert!(html.contains("vegaEmbed('#brush-hist-scatter'"));
    }

    #[test]
    fn test_oversized_sample_is_an_error() {
        let input = fixture(5);
        let out = tempfile::NamedTempFile::new().unwrap();
        let err = run_sample(&args(input.path(), 6), out.path()).unwrap_err();
        assert!(err.to_string().contains("only 5 rows pass the filter"));
    }
}
