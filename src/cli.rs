use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use leastterms::config::constants::{
    DEFAULT_INTEGER_MAX, DEFAULT_REAL_MAX, DEFAULT_REAL_MIN, DEFAULT_TOLERANCE,
};
use leastterms::{
    ExpressionSolver, MagnitudeBand, NumericDomain, OperatorSet, Scalar, SearchConfig,
    SearchOutcome, Solution,
};
use log::{info, warn};

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

/// Numeric domain to search in
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DomainArg {
    Integer,
    Real,
}

impl DomainArg {
    pub fn to_numeric_domain(self) -> NumericDomain {
        match self {
            DomainArg::Integer => NumericDomain::Integer,
            DomainArg::Real => NumericDomain::Real,
        }
    }
}

/// Leastterms - Build a number from a few seeds with as few terms as possible
#[derive(Parser, Debug)]
#[command(name = "leastterms")]
#[command(
    about = "Find the arithmetic expression over the given seeds that reaches each goal with the fewest terms"
)]
#[command(version)]
pub struct CliArgs {
    /// Goal values to build
    #[arg(required = true, allow_negative_numbers = true)]
    pub goals: Vec<String>,

    /// Seed value usable as a leaf (repeat for several)
    #[arg(short, long = "seed", required = true, allow_negative_numbers = true)]
    pub seeds: Vec<String>,

    /// Numeric domain
    #[arg(short, long, value_enum, default_value = "integer")]
    pub domain: DomainArg,

    /// Ignore values with magnitude at or above this (default: 1000000)
    #[arg(long)]
    pub max: Option<String>,

    /// Ignore values with magnitude below this (real default: 0.000001)
    #[arg(long)]
    pub min: Option<String>,

    /// Goal matching tolerance in the real domain
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Operators to use
    #[arg(long, default_value = "+-*/")]
    pub ops: String,

    /// Give up on expressions longer than this many terms
    #[arg(long)]
    pub max_terms: Option<usize>,

    /// Also print the expression in postfix notation
    #[arg(long)]
    pub rpn: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

fn parse_value<T>(text: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.trim()
        .parse()
        .with_context(|| format!("Invalid {} '{}'", what, text))
}

fn parse_optional<T>(text: Option<&str>, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.map(|text| parse_value(text, what)).transpose()
}

/// Turn the arguments into one search configuration per goal
pub fn build_configs<T>(
    args: &CliArgs,
    default_band: MagnitudeBand<T>,
) -> Result<Vec<SearchConfig<T>>>
where
    T: Scalar + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let seeds = args
        .seeds
        .iter()
        .map(|seed| parse_value(seed, "seed"))
        .collect::<Result<Vec<T>>>()?;
    let band = MagnitudeBand {
        min: parse_optional(args.min.as_deref(), "minimum magnitude")?.or(default_band.min),
        max: parse_optional(args.max.as_deref(), "maximum magnitude")?.or(default_band.max),
    };
    let operators: OperatorSet = args.ops.parse().context("Invalid operator list")?;

    args.goals
        .iter()
        .map(|goal| -> Result<SearchConfig<T>> {
            let mut config = SearchConfig::new(seeds.clone(), parse_value(goal, "goal")?)
                .with_band(band)
                .with_operators(operators)
                .with_tolerance(args.tolerance);
            if let Some(limit) = args.max_terms {
                config = config.with_term_limit(limit);
            }
            Ok(config)
        })
        .collect()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// One result line. Real-valued expressions keep every parenthesis since
/// floating-point operations do not regroup exactly.
fn format_solution<T: Scalar>(solution: &Solution<T>) -> String {
    let expression = match T::DOMAIN {
        NumericDomain::Integer => solution.expression.to_string(),
        NumericDomain::Real => solution.infix.clone(),
    };
    format!(
        "{} = {}  [{} terms]",
        solution.goal, expression, solution.term_count
    )
}

fn report<T: Scalar>(outcome: &SearchOutcome<T>, show_rpn: bool) {
    match outcome {
        SearchOutcome::Success(solution) => {
            println!("{}", format_solution(solution));
            if show_rpn {
                println!("    rpn: {}", solution.rpn_string());
            }
        }
        SearchOutcome::Unreachable { goal, stats } => {
            warn!(
                "No expression found for {} after {} expansions",
                goal, stats.expansions
            );
            println!("{} = Unreachable.", goal);
        }
    }
}

fn run_domain<T>(args: &CliArgs, default_band: MagnitudeBand<T>) -> Result<()>
where
    T: Scalar + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let configs = build_configs(args, default_band)?;
    let solver = ExpressionSolver::new();

    for (goal, result) in args.goals.iter().zip(solver.solve_many(configs)) {
        let outcome = result.with_context(|| format!("Search for {} failed", goal))?;
        report(&outcome, args.rpn);
    }
    Ok(())
}

fn describe<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    info!(
        "Building [{}] from seeds [{}] in the {} domain",
        describe(&args.goals),
        describe(&args.seeds),
        args.domain.to_numeric_domain()
    );

    match args.domain {
        DomainArg::Integer => {
            run_domain::<i64>(&args, MagnitudeBand::below(DEFAULT_INTEGER_MAX))
        }
        DomainArg::Real => run_domain::<f64>(
            &args,
            MagnitudeBand::between(DEFAULT_REAL_MIN, DEFAULT_REAL_MAX),
        ),
    }
}
