//! SmartStudy CLI - explanations for college topics
//!
//! # Commands
//!
//! ```bash
//! # List the quick topics
//! smartstudy topics
//!
//! # Explain one topic (dictionary first, generation fallback)
//! smartstudy ask Binary
//!
//! # Retrieval-augmented answer, without downloading the embedding model
//! smartstudy ask --mode retrieval --offline "how do plants make food"
//!
//! # Interactive loop; one query per line, :quit to leave
//! smartstudy repl
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use smartstudy_lib::{
    answer::{AnswerSource, LookupResolver, Resolver, RetrievalResolver},
    config::Config,
    embed::{HashEmbedder, MiniLmEmbedder},
    notes::NoteWriter,
    search::SearchEngine,
    session::{Interaction, StudySession},
    store::MemoryStore,
    topic::TopicCatalog,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smartstudy")]
#[command(about = "College topic helper with study notes")]
#[command(version)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "SMARTSTUDY_CONFIG")]
    config: Option<PathBuf>,

    /// Notes file answers are appended to
    #[arg(long, global = true, env = "SMARTSTUDY_NOTES")]
    notes: Option<PathBuf>,

    /// TOML topic file with extra topics, added to the built-in ones
    #[arg(long, global = true)]
    topics: Option<PathBuf>,

    /// Generation endpoint (Ollama-compatible)
    #[arg(long, global = true, env = "OLLAMA_HOST")]
    endpoint: Option<String>,

    /// Generation model name
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the quick topics
    Topics,

    /// Explain a single topic or question
    Ask {
        /// Topic name or question
        query: String,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Answer queries read from stdin, one per line
    Repl {
        #[command(flatten)]
        resolve: ResolveArgs,
    },
}

#[derive(clap::Args)]
struct ResolveArgs {
    /// How queries are resolved
    #[arg(short, long, value_enum, default_value_t = Mode::Lookup)]
    mode: Mode,

    /// Use the feature-hash embedder instead of downloading MiniLM
    /// (retrieval mode only)
    #[arg(long)]
    offline: bool,
}

impl ResolveArgs {
    fn validate(&self) -> Result<()> {
        if self.offline && matches!(self.mode, Mode::Lookup) {
            bail!("--offline only applies to --mode retrieval");
        }
        Ok(())
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Similarity search over the topics, then generate from the matches
    Retrieval,
    /// Exact topic lookup, generating only for unknown topics
    Lookup,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(self.config.as_deref())?;

        if let Some(notes) = &self.notes {
            config.notes_path = notes.clone();
        }
        if let Some(topics) = &self.topics {
            config.topics_path = Some(topics.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            config.generator.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.generator.model = model.clone();
        }
        Ok(config)
    }
}

fn build_resolver(
    config: &Config,
    catalog: TopicCatalog,
    args: &ResolveArgs,
) -> Result<Box<dyn Resolver>> {
    args.validate()?;
    let generator = config.generator.build()?;

    let resolver: Box<dyn Resolver> = match (args.mode, args.offline) {
        (Mode::Lookup, _) => Box::new(
            LookupResolver::new(catalog, generator).with_params(config.generation.clone()),
        ),
        (Mode::Retrieval, true) => {
            let engine = SearchEngine::new(HashEmbedder::default(), MemoryStore::new());
            Box::new(
                RetrievalResolver::new(engine, &catalog, generator)?
                    .with_params(config.generation.clone())
                    .with_top_k(config.top_k),
            )
        }
        (Mode::Retrieval, false) => {
            eprintln!("Loading MiniLM model (first run downloads ~90MB)...");
            let engine = SearchEngine::new(MiniLmEmbedder::new()?, MemoryStore::new());
            Box::new(
                RetrievalResolver::new(engine, &catalog, generator)?
                    .with_params(config.generation.clone())
                    .with_top_k(config.top_k),
            )
        }
    };

    info!(resolver = resolver.name(), topics = %topic_source(config), "resolver ready");
    Ok(resolver)
}

fn topic_source(config: &Config) -> String {
    config
        .topics_path
        .as_ref()
        .map_or_else(|| "builtin".to_string(), |p| p.display().to_string())
}

fn print_interaction(interaction: &Interaction, notes: &NoteWriter) {
    println!("\n=== Explanation ===\n");
    println!("{}\n", interaction.display);

    if let AnswerSource::Retrieved { topic, .. } = &interaction.answer.source {
        println!("Based on topic: {topic}");
    }
    println!("Saved to {}", notes.path().display());
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only answers
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let catalog = config.catalog()?;

    match cli.command {
        Commands::Topics => {
            println!("Quick topics:");
            for name in catalog.names() {
                println!("- {name}");
            }
        }

        Commands::Ask { query, resolve } => {
            let resolver = build_resolver(&config, catalog, &resolve)?;
            let notes = NoteWriter::new(&config.notes_path);
            let mut session =
                StudySession::new(resolver, notes).with_wrap_width(config.wrap_width);

            match session
                .ask(&query)
                .with_context(|| format!("explaining '{query}'"))?
            {
                Some(interaction) => print_interaction(&interaction, session.notes()),
                None => println!("Nothing to explain: the query is empty."),
            }
        }

        Commands::Repl { resolve } => {
            let resolver = build_resolver(&config, catalog, &resolve)?;
            let notes = NoteWriter::new(&config.notes_path);
            let mut session =
                StudySession::new(resolver, notes).with_wrap_width(config.wrap_width);

            println!("Type a topic or question (:quit to exit).");
            let stdin = io::stdin();
            let mut stdout = io::stdout();

            loop {
                print!("> ");
                stdout.flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }

                let query = line.trim_end_matches(['\n', '\r']);
                if query == ":quit" {
                    break;
                }

                match session.ask(query) {
                    Ok(Some(interaction)) => print_interaction(&interaction, session.notes()),
                    Ok(None) => {}
                    Err(e) => error!("failed to explain '{query}': {e}"),
                }
            }
        }
    }

    Ok(())
}
