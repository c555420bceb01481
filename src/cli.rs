use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exprtree::{Expression, evaluate_all, parse_expression};
use log::{debug, info};

/// Evaluated when no expression is given on the command line
pub const REFERENCE_EXPRESSION: &str = "25 / (5 * (16 + -8 / 4)) - 8";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Exprtree - evaluate and rewrite arithmetic expression trees
#[derive(Parser, Debug)]
#[command(name = "exprtree")]
#[command(
    about = "Evaluate arithmetic expressions and substitute leaves with other expressions"
)]
#[command(version)]
pub struct CliArgs {
    /// Infix expressions to evaluate (default: the reference expression)
    pub expressions: Vec<String>,

    /// Replace every leaf equal to this value
    #[arg(long, requires = "with", allow_negative_numbers = true)]
    pub replace: Option<f64>,

    /// Expression inserted in place of each matching leaf
    #[arg(long, requires = "replace", allow_hyphen_values = true)]
    pub with: Option<String>,

    /// Render expressions as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
#[derive(Debug)]
pub struct CliConfig {
    pub expressions: Vec<Expression>,
    pub substitution: Option<(f64, Expression)>,
    pub latex: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Parse every expression argument and build the configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let sources = if args.expressions.is_empty() {
        vec![REFERENCE_EXPRESSION.to_string()]
    } else {
        args.expressions
    };

    let expressions = sources
        .iter()
        .map(|source| {
            parse_expression(source).with_context(|| format!("Invalid expression '{}'", source))
        })
        .collect::<Result<Vec<_>>>()?;

    let substitution = match (args.replace, args.with) {
        (Some(target), Some(source)) => {
            let replacement = parse_expression(&source)
                .with_context(|| format!("Invalid replacement '{}'", source))?;
            Some((target, replacement))
        }
        _ => None,
    };

    Ok(CliConfig {
        expressions,
        substitution,
        latex: args.latex,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn render(expr: &Expression, latex: bool) -> String {
    if latex {
        expr.to_latex()
    } else {
        expr.to_string()
    }
}

/// Output lines for the configured expressions, one per tree and one more
/// per rewritten tree
pub fn report(config: &CliConfig) -> Vec<String> {
    let rewritten: Vec<Expression> = match &config.substitution {
        Some((target, replacement)) => config
            .expressions
            .iter()
            .map(|expr| expr.replace(*target, replacement))
            .collect(),
        None => Vec::new(),
    };

    let values = evaluate_all(&config.expressions);
    let rewritten_values = evaluate_all(&rewritten);

    let mut lines = Vec::with_capacity(config.expressions.len() + rewritten.len());
    for (i, (expr, value)) in config.expressions.iter().zip(&values).enumerate() {
        debug!(
            "Tree {} has {} leaves and depth {}",
            i,
            expr.leaf_count(),
            expr.depth()
        );
        lines.push(format!("{} = {}", render(expr, config.latex), value));

        if let (Some((target, _)), Some(new_expr), Some(new_value)) = (
            &config.substitution,
            rewritten.get(i),
            rewritten_values.get(i),
        ) {
            if !expr.contains_leaf(*target) {
                debug!("No leaf equal to {} in {}", target, expr);
            }
            lines.push(format!(
                "  [{} replaced] {} = {}",
                target,
                render(new_expr, config.latex),
                new_value
            ));
        }
    }
    lines
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!("Evaluating {} expression(s)", config.expressions.len());
    if let Some((target, replacement)) = &config.substitution {
        info!("Substituting leaves equal to {} with {}", target, replacement);
    }

    for line in report(&config) {
        println!("{}", line);
    }
    Ok(())
}
