//! Escape-time fractal explorer
//!
//! Picks Julia or Mandelbrot mode, then repeatedly asks for a region, computes
//! the fractal and writes it as a PNG, so each round can zoom in further.
//! Passing `TOP LEFT RIGHT ITERATIONS` on the command line renders once and
//! exits.
//!
//! Configuration is loaded from config.toml in the working directory.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use text_colorizer::Colorize;

use fractal::prompt::{parse_complex, parse_iterations};
use fractal::{
    init_tracing, Colormap, Config, Fractal, FractalError, FractalSpec, Prompter, Region,
    Selection, Variant,
};

#[derive(Parser, Debug)]
#[command(name = "fractal", version, about = "Render Julia and Mandelbrot sets")]
struct Cli {
    /// Fractal family: julia (1) or mandelbrot (2)
    #[arg(short, long)]
    mode: Option<String>,

    /// Julia parameter, e.g. -0.8+0.156j
    #[arg(short, long, allow_hyphen_values = true)]
    c: Option<String>,

    /// Configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// PNG output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Colormap name (twilight, viridis, magma, inferno, plasma, gray, hsv)
    #[arg(long)]
    colormap: Option<String>,

    /// Colour raw magnitudes instead of magnitude mod 1
    #[arg(long)]
    raw: bool,

    /// Worker threads (0 = one per CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// Render once for this region and exit
    #[arg(
        num_args = 4,
        value_names = ["TOP", "LEFT", "RIGHT", "ITERATIONS"],
        allow_negative_numbers = true
    )]
    region: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> fractal::Result<()> {
    let mut config = Config::load(&cli.config)?;
    if let Some(threads) = cli.threads {
        config.engine.threads = threads;
    }
    if let Some(colormap) = &cli.colormap {
        config.render.colormap = colormap.clone();
    }
    if let Some(output) = &cli.output {
        config.render.output = output.display().to_string();
    }
    if cli.raw {
        config.render.continuous = false;
    }
    config.validate()?;

    init_tracing(&config.logging.level);

    let colormap: Colormap = config.render.colormap.parse()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let selection: Selection = match &cli.mode {
        Some(mode) => mode.parse()?,
        None => match prompter.selection()? {
            Some(selection) => selection,
            None => return Ok(()),
        },
    };

    let variant = match selection {
        Selection::Mandelbrot => Variant::Mandelbrot,
        Selection::Julia => {
            let c = match &cli.c {
                Some(c) => parse_complex(c)?,
                None => match prompter.parameter()? {
                    Some(c) => c,
                    None => return Ok(()),
                },
            };
            Variant::Julia { c }
        }
    };

    if !cli.region.is_empty() {
        let (region, iterations) = region_from_args(&cli.region)?;
        return render(&config, colormap, FractalSpec::new(region, iterations, variant)?);
    }

    zoom_loop(&mut prompter, &config, colormap, variant)
}

fn region_from_args(args: &[String]) -> fractal::Result<(Region, u32)> {
    let [top, left, right, iterations] = args else {
        return Err(FractalError::InvalidInput(format!(
            "expected TOP LEFT RIGHT ITERATIONS, got {} values",
            args.len()
        )));
    };
    let region = Region::new(
        number("top", top)?,
        number("left", left)?,
        number("right", right)?,
    )?;
    Ok((region, parse_iterations(iterations)?))
}

fn number(label: &str, s: &str) -> fractal::Result<f64> {
    s.parse::<f64>()
        .map_err(|_| FractalError::InvalidInput(format!("{}: '{}' is not a number", label, s)))
}

fn zoom_loop<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &Config,
    colormap: Colormap,
    variant: Variant,
) -> fractal::Result<()> {
    loop {
        let Some((region, iterations)) = prompter.region_and_iterations()? else {
            break;
        };
        render(config, colormap, FractalSpec::new(region, iterations, variant)?)?;
        if !prompter.pause("Zoom in?")? {
            break;
        }
    }
    tracing::debug!("Input exhausted, leaving zoom loop");
    Ok(())
}

fn render(config: &Config, colormap: Colormap, spec: FractalSpec) -> fractal::Result<()> {
    let mut current = Fractal::new(spec, config.engine)?;
    current.create();
    current
        .display(config.render.continuous, colormap, config.render.scale)?
        .save(&config.render.output)
}
