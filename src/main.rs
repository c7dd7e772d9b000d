use clap::{Parser, Subcommand};
use sortlab_bench::BenchArgs;
use sortlab_orst::SortArgs;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    /// Log at debug level, overriding RUST_LOG.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort integers given on the command line
    Sort(SortArgs),

    /// Time and compare the sorting algorithms
    Bench(BenchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Quiet by default, RUST_LOG=info or RUST_LOG=debug for more.
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.commands {
        Commands::Sort(sort_args) => sort_args.run(),
        Commands::Bench(bench_args) => bench_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_sort_with_negatives() {
    let cli = Cli::try_parse_from(["sortlab", "sort", "-a", "merge", "3", "-1", "2"]);
    assert!(cli.is_ok());
}

#[test]
fn parses_bench_time() {
    let cli = Cli::try_parse_from([
        "sortlab",
        "bench",
        "time",
        "--algorithms",
        "quick,heap",
        "--orders",
        "pre-sorted",
        "--exponent",
        "2",
        "--seed",
        "7",
    ]);
    assert!(cli.is_ok());
}

#[test]
fn parses_sort_without_sorting() {
    let cli = Cli::try_parse_from(["sortlab", "sort", "-a", "none", "1"]);
    assert!(matches!(cli, Ok(Cli { commands: Commands::Sort(_), .. })));
}

#[test]
fn parses_bench_fit_with_plot() {
    let cli = Cli::try_parse_from(["sortlab", "bench", "fit", "-f", "results/Random.csv", "--plot"]);
    assert!(cli.is_ok());
}

#[test]
fn rejects_unknown_algorithm() {
    let cli = Cli::try_parse_from(["sortlab", "sort", "-a", "bogo", "1"]);
    assert!(cli.is_err());
}
