use std::env;
use std::fs;
use std::path::Path;

/// Columns the dashboard reads; everything else is stripped before embedding.
const KEEP: [&str; 5] = ["Price", "Landsize", "Distance", "Type", "Regionname"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("melb_data.csv");

    // Prefer the full Kaggle export when present, fall back to the fixture.
    //
    // The raw file is ~2MB with 21 columns. Only five are charted, so project
    // them here and embed the slimmer CSV with include_str!.
    let candidates = [Path::new("../Data/melb_data.csv"), Path::new("../fixtures/melb_data.csv")];
    let src = candidates.iter().find(|p| p.exists());

    match src {
        Some(src) => {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_path(src)
                .expect("Failed to open housing CSV");
            let headers = rdr.headers().expect("Failed to read CSV header").clone();
            let idx: Vec<usize> = KEEP
                .iter()
                .map(|name| {
                    headers
                        .iter()
                        .position(|h| h.trim() == *name)
                        .unwrap_or_else(|| panic!("column {} missing from {}", name, src.display()))
                })
                .collect();

            let mut wtr = csv::Writer::from_path(&dest).expect("Failed to create projected CSV");
            wtr.write_record(KEEP).unwrap();
            for record in rdr.records().flatten() {
                let row: Vec<&str> = idx.iter().map(|&i| record.get(i).unwrap_or("")).collect();
                wtr.write_record(&row).unwrap();
            }
            wtr.flush().unwrap();
        }
        None => {
            fs::write(&dest, format!("{}\n", KEEP.join(","))).unwrap();
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../Data/melb_data.csv");
    println!("cargo:rerun-if-changed=../fixtures/melb_data.csv");
}
