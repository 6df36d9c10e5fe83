use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glam::DVec3;

use rayhash::{brute_maxmin_nbr, qs_bound, qs_nc, LatticeConfig, Ray, RayBins, RayKey};

/// rayhash - discretize ray pairs into quadsphere lattice keys
#[derive(Parser, Debug)]
#[command(name = "rayhash", version, about)]
struct Cli {
    /// Load lattice parameters from a JSON file (flags below override it)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Linear resolution
    #[arg(long, global = true)]
    resl: Option<f64>,

    /// Lever-arm length converting angle to displacement
    #[arg(long, global = true)]
    lever: Option<f64>,

    /// Half-width of the cartesian domain
    #[arg(long, global = true)]
    cartbound: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print lattice dimensions for the effective config
    Info,
    /// Encode a ray pair: six numbers each (ox oy oz dx dy dz)
    Encode {
        #[arg(long, num_args = 6, value_name = "F", allow_negative_numbers = true, required = true)]
        a: Vec<f64>,
        #[arg(long, num_args = 6, value_name = "F", allow_negative_numbers = true, required = true)]
        b: Vec<f64>,
    },
    /// Print the representative ray of a key
    Decode { key: RayKey },
    /// Brute-force worst-case neighbor spacing (quadratic in cell count)
    Audit {
        /// Only scan the cells of face 0
        #[arg(long)]
        face0_only: bool,

        /// Refuse to scan more cells than this
        #[arg(long, default_value_t = 20_000)]
        max_cells: u64,
    },
    /// Write the effective config as JSON
    WriteConfig { path: PathBuf },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = effective_config(&cli)?;
    log::debug!("effective config: {:?}", config);

    match cli.command {
        Command::Info => run_info(config),
        Command::Encode { a, b } => run_encode(config, &a, &b),
        Command::Decode { key } => run_decode(config, key),
        Command::Audit {
            face0_only,
            max_cells,
        } => run_audit(config, face0_only, max_cells),
        Command::WriteConfig { path } => {
            config
                .save(&path)
                .with_context(|| format!("writing config to {}", path.display()))?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn effective_config(cli: &Cli) -> Result<LatticeConfig> {
    let mut config = match &cli.config {
        Some(path) => LatticeConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => LatticeConfig::default(),
    };
    if let Some(resl) = cli.resl {
        config.resl = resl;
    }
    if let Some(lever) = cli.lever {
        config.lever = lever;
    }
    if let Some(cartbound) = cli.cartbound {
        config.cartbound = cartbound;
    }
    config.validate()?;
    Ok(config)
}

fn build(config: LatticeConfig) -> Result<RayBins> {
    RayBins::new(config).context("building ray bins")
}

fn ray_from_args(values: &[f64]) -> Result<Ray> {
    let [ox, oy, oz, dx, dy, dz] = values else {
        bail!("expected 6 numbers, got {}", values.len());
    };
    let ray = Ray::new(DVec3::new(*ox, *oy, *oz), DVec3::new(*dx, *dy, *dz));
    if !ray.is_valid() {
        bail!("ray must be finite with a non-zero direction");
    }
    Ok(ray)
}

fn run_info(config: LatticeConfig) -> Result<()> {
    let bins = build(config)?;
    println!(
        "resl={} lever={} cartbound={}",
        config.resl, config.lever, config.cartbound
    );
    println!(
        "cartesian cells/axis: {}",
        bins.cartesian_axis_cell_count()
    );
    println!(
        "angular cells/axis:   {} (bound {:.6})",
        qs_nc(config.resl, config.lever),
        qs_bound(config.resl, config.lever)
    );
    println!("cells per face:       {}", bins.cells_per_face());
    println!("total keys:           {}", bins.total_cell_count());
    Ok(())
}

fn run_encode(config: LatticeConfig, a: &[f64], b: &[f64]) -> Result<()> {
    let bins = build(config)?;
    let a = ray_from_args(a).context("ray a")?;
    let b = ray_from_args(b).context("ray b")?;
    let key = bins.encode_pair(&a, &b)?;
    println!("{}", key);
    Ok(())
}

fn run_decode(config: LatticeConfig, key: RayKey) -> Result<()> {
    let bins = build(config)?;
    let ray = bins.decode(key)?;
    println!("face {}: {}", bins.face_of(key)?, ray);
    Ok(())
}

fn run_audit(config: LatticeConfig, face0_only: bool, max_cells: u64) -> Result<()> {
    let bins = build(config)?;
    let scanned = if face0_only {
        bins.cells_per_face()
    } else {
        bins.total_cell_count()
    };
    if scanned > max_cells {
        bail!(
            "audit would scan {} cells (limit {}); use a coarser config or raise --max-cells",
            scanned,
            max_cells
        );
    }

    print!("Auditing {} cells... ", scanned);
    let start = std::time::Instant::now();
    let spacing = brute_maxmin_nbr(&bins, face0_only)?;
    println!("{:.1}ms", start.elapsed().as_secs_f64() * 1000.0);

    println!("max min linear spacing:  {:.6}", spacing.linear);
    println!(
        "max min angular spacing: {:.6} rad ({:.3} deg)",
        spacing.angular,
        spacing.angular.to_degrees()
    );
    Ok(())
}
