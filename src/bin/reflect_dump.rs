//! reflect-dump - print the pseudo-interface of a recorded binding feed.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use binding_reflect::{
    BuildStats, IdentityAccessorNaming, ReflectConfig, RenderOptions, load_model,
};

#[derive(Parser)]
#[command(
    name = "reflect-dump",
    about = "Rebuild and print the public surface of a recorded binding feed",
    version
)]
struct Cli {
    /// Recorded feed (JSON)
    #[arg(value_name = "FEED")]
    feed: PathBuf,

    /// Additional class name to leave out of the listing (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Keep accessor names as declared instead of stripping get_/set_
    #[arg(long)]
    no_accessor_prefix: bool,

    /// Indent class members with N spaces instead of a tab
    #[arg(long, value_name = "N")]
    indent_spaces: Option<usize>,

    /// Name of the global scope
    #[arg(long, value_name = "NAME")]
    global_name: Option<String>,

    /// Print build counters to stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = ReflectConfig::new();
    for name in cli.exclude {
        config = config.with_excluded_class(name);
    }
    if cli.no_accessor_prefix {
        config = config.with_accessor_naming(IdentityAccessorNaming);
    }
    if let Some(count) = cli.indent_spaces {
        config = config.with_render_options(RenderOptions::spaces(count));
    }
    if let Some(name) = cli.global_name {
        config = config.with_global_scope_name(name);
    }

    let model = load_model(&cli.feed, config)?;
    print!("{model}");
    if cli.stats {
        print_stats(model.stats());
    }
    Ok(())
}

fn print_stats(stats: &BuildStats) {
    eprintln!("primitives:             {}", stats.primitives);
    eprintln!("big integers:           {}", stats.big_ints);
    eprintln!("opaque types:           {}", stats.opaque_types);
    eprintln!("classes:                {}", stats.classes);
    eprintln!("excluded classes:       {}", stats.excluded_classes);
    eprintln!("composites:             {}", stats.composites);
    eprintln!("methods:                {}", stats.methods);
    eprintln!("properties:             {}", stats.properties);
    eprintln!("ignored members:        {}", stats.ignored_members);
    eprintln!("duplicate declarations: {}", stats.duplicate_declarations);
}
