use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorprobe::report::MatchLines;
use colorprobe::sample::{open_image, scale_to_image};
use colorprobe::{inspect, parse_hex, ColorTable, Rgb};

#[derive(Parser)]
#[command(name = "colorprobe")]
#[command(about = "Exact pixel colours and the nearest named colour from a reference table")]
struct Cli {
    /// Reference colour table (CSV with a header row)
    #[arg(long, global = true, env = "COLORPROBE_DATASET", default_value = "colours.csv")]
    dataset: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample one pixel of an image and name its colour
    Pick {
        /// PNG or JPEG image
        #[arg(short, long)]
        image: PathBuf,

        /// Click x coordinate
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,

        /// Click y coordinate
        #[arg(short, long, allow_negative_numbers = true)]
        y: f64,

        /// Width of the surface the click was reported on, if scaled
        #[arg(long, requires = "display_height")]
        display_width: Option<u32>,

        /// Height of the surface the click was reported on, if scaled
        #[arg(long, requires = "display_width")]
        display_height: Option<u32>,

        #[arg(long)]
        json: bool,
    },
    /// Find the closest named colours to an RGB triple or hex code
    Match {
        /// "R,G,B" or "#RRGGBB"
        color: String,

        /// Number of matches to list
        #[arg(short, default_value_t = 1)]
        k: usize,

        #[arg(long)]
        json: bool,
    },
    /// Print the canonical hex code of an RGB triple
    Hex {
        /// "R,G,B"
        color: String,
    },
}

fn parse_color(s: &str) -> anyhow::Result<Rgb> {
    if let Some(rgb) = parse_hex(s) {
        return Ok(rgb);
    }
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid colour {s:?}"))?;
    match channels[..] {
        [r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => Err(anyhow!("expected R,G,B or #RRGGBB, got {s:?}")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorprobe=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Pick {
            image,
            x,
            y,
            display_width,
            display_height,
            json,
        } => {
            let table = ColorTable::open(&cli.dataset)?;
            let img = open_image(&image)?;
            let display = (display_width.unwrap_or(0), display_height.unwrap_or(0));
            let (x, y) = scale_to_image(x, y, display, img.dimensions());
            let report = inspect(&table, &img, x, y)
                .ok_or_else(|| anyhow!("{} has no pixels", image.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Commands::Match { color, k, json } => {
            let table = ColorTable::open(&cli.dataset)?;
            let target = parse_color(&color)?;
            let matches = table.nearest_k(target, k);
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No match: the reference dataset is empty");
            } else {
                for m in &matches {
                    println!("{}", m.name());
                    print!("{}", MatchLines(m));
                }
            }
        }
        Commands::Hex { color } => {
            let rgb = parse_color(&color)?;
            println!("{} {}", rgb.to_hex(), rgb);
        }
    }
    Ok(())
}
