//! Build script for chart-dashboard.
//!
//! Copies the five indicator CSV files to OUT_DIR so they can be embedded
//! via `include_str!` at compile time. A file under `../data/` (a full
//! dataset dropped in locally) takes precedence over the bundled fixture.

use std::env;
use std::fs;
use std::path::Path;

const FILES: [&str; 5] = [
    "population.csv",
    "gdp.csv",
    "cmu5.csv",
    "life_expectancy.csv",
    "fertility-rate.csv",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for name in FILES {
        let data_path = format!("../data/{}", name);
        let fixture_path = format!("../fixtures/{}", name);
        let dest = Path::new(&out_dir).join(name);

        let src_path = if Path::new(&data_path).exists() {
            &data_path
        } else {
            &fixture_path
        };
        let src = Path::new(src_path);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Indicator file {} not found, using empty placeholder",
                name
            );
        }
        println!("cargo:rerun-if-changed={}", data_path);
        println!("cargo:rerun-if-changed={}", fixture_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
