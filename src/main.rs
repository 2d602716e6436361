//! # Snapgrid CLI
//!
//! Usage:
//!   snapgrid request.json -o report.json
//!   echo '{ ... }' | snapgrid
//!   snapgrid --example > page.json

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use snapgrid::SnapgridError;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SnapgridError> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_request_json());
        return Ok(());
    }

    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let output_path = args.windows(2).find(|w| w[0] == "-o").map(|w| w[1].clone());

    let report = snapgrid::layout_json(&input)?;
    match output_path {
        Some(path) => {
            fs::write(&path, &report)?;
            eprintln!("✓ Written {} bytes to {}", report.len(), path);
        }
        None => println!("{}", report),
    }
    Ok(())
}

fn example_request_json() -> &'static str {
    r##"{
  "breakpoint": "desktop",
  "containerWidth": 1280,
  "grid": {
    "base": {
      "maxWidth": 1200,
      "columnCount": 12,
      "gutter": 20,
      "margin": 40,
      "snapTolerance": 5
    },
    "overrides": {
      "tablet": { "maxWidth": 768, "columnCount": 8, "margin": 24 },
      "mobile": { "maxWidth": 375, "columnCount": 4, "gutter": 16, "margin": 16 }
    }
  },
  "nodes": [
    {
      "id": "text-1",
      "grid": {
        "base": { "colStart": 1, "colSpan": 6, "marginTop": 40 },
        "overrides": { "mobile": { "colSpan": 4 } }
      }
    },
    {
      "id": "button-1",
      "grid": {
        "base": { "colStart": 1, "colSpan": 3, "marginTop": 120 }
      }
    },
    {
      "id": "text-2",
      "grid": {
        "base": { "colStart": 1, "colSpan": 8, "marginTop": 30 },
        "overrides": { "tablet": { "colSpan": 8 }, "mobile": { "colSpan": 4 } }
      }
    }
  ]
}
"##
}
