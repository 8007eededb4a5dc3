use clap::{Args as ClapArgs, Parser, Subcommand};
use gradviz_calculus::report::{GradientReport, explanation_text};
use gradviz_calculus::{EvaluationRequest, EvaluationResult, FunctionKind, GridSpec};
use gradviz_common::util::config::{Config, ControlsConfig};
use gradviz_common::util::profiler::ScopedTimer;
use gradviz_common::util::{logger, visualization};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Gradient and steepest ascent visualisation", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ClapArgs, Clone, Default)]
struct Selection {
    /// Function label, short name (paraboloid, cubic), letter (a, b) or index.
    #[arg(short, long)]
    function: Option<String>,
    #[arg(short = 'x', long = "x", allow_negative_numbers = true)]
    x0: Option<f64>,
    #[arg(short = 'y', long = "y", allow_negative_numbers = true)]
    y0: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the functions available for selection.
    List,
    /// Print the gradient at a point with the explanations.
    Eval {
        #[command(flatten)]
        selection: Selection,
        /// Emit Markdown with LaTeX maths instead of plain text.
        #[arg(long)]
        markdown: bool,
    },
    /// Render the surface and gradient plots to PNG.
    Render {
        #[command(flatten)]
        selection: Selection,
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = load_config(&args.config)?;

    let command = args.command.unwrap_or(Commands::Eval {
        selection: Selection::default(),
        markdown: false,
    });

    match command {
        Commands::List => {
            for (index, kind) in FunctionKind::ALL.into_iter().enumerate() {
                println!("{}  {:<10}  {}", index, kind.short_name(), kind.label());
            }
        }
        Commands::Eval {
            selection,
            markdown,
        } => {
            let result = run_evaluation(&config, &selection)?;
            let report = GradientReport::from(&result);
            if markdown {
                println!("{}", report.to_markdown_with_explanations());
            } else {
                println!("{}\n", report);
                print!("{}", explanation_text(result.function));
            }
        }
        Commands::Render {
            selection,
            output_dir,
        } => {
            let result = run_evaluation(&config, &selection)?;
            let dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.output.directory));
            prepare_output_dir(&dir)?;
            render_plots(&config, &result, &dir)?;
            println!("{}", GradientReport::from(&result));
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = if path.exists() {
        log::info!("Loading configuration from {:?}", path);
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
        toml::from_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?
    } else {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            path
        );
        Config::default()
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}

fn parse_function(raw: &str) -> anyhow::Result<FunctionKind> {
    if let Ok(index) = raw.trim().parse::<usize>() {
        return Ok(FunctionKind::from_index(index)?);
    }
    Ok(raw.parse::<FunctionKind>()?)
}

fn snap_control(controls: &ControlsConfig, name: &str, requested: f64) -> anyhow::Result<f64> {
    if !requested.is_finite() {
        return Err(anyhow::anyhow!("{} must be a finite number, got {}", name, requested));
    }
    let snapped = controls.snap(requested);
    if (snapped - requested).abs() > 1e-9 {
        log::warn!(
            "Requested {} = {} is outside the slider range or step. Snapped to {:.2}",
            name,
            requested,
            snapped
        );
    }
    Ok(snapped)
}

fn build_request(config: &Config, selection: &Selection) -> anyhow::Result<EvaluationRequest> {
    let controls = &config.controls;
    let raw_function = selection
        .function
        .as_deref()
        .unwrap_or(&controls.default_function);
    let function = parse_function(raw_function)?;
    let x0 = snap_control(controls, "x", selection.x0.unwrap_or(controls.default_x))?;
    let y0 = snap_control(controls, "y", selection.y0.unwrap_or(controls.default_y))?;
    Ok(EvaluationRequest::new(function, x0, y0))
}

fn run_evaluation(config: &Config, selection: &Selection) -> anyhow::Result<EvaluationResult> {
    let request = build_request(config, selection)?;
    let grid = GridSpec::try_from(&config.grid)?;
    log::info!(
        "Evaluating {} at ({:.2}, {:.2}) on a {}x{} grid",
        request.function,
        request.x0,
        request.y0,
        grid.resolution(),
        grid.resolution()
    );
    Ok(request.evaluate_with(&grid))
}

fn prepare_output_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.exists() && !dir.as_os_str().is_empty() {
        log::info!("Creating output directory: {:?}", dir);
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn render_plots(config: &Config, result: &EvaluationResult, dir: &Path) -> anyhow::Result<()> {
    let _timer = ScopedTimer::new("Rendering");
    let out = &config.output;

    let surface_path = dir.join(&out.surface_file);
    log::info!("Writing surface plot to {:?}", surface_path);
    visualization::draw_surface(&result.grid, result.point, &surface_path, out.width, out.height)?;

    let gradient_path = dir.join(&out.gradient_file);
    log::info!("Writing gradient plot to {:?}", gradient_path);
    visualization::draw_gradient(
        result.point,
        result.gradient,
        config.grid.bound,
        &gradient_path,
        out.width,
        out.height,
    )?;

    Ok(())
}
