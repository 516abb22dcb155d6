//! FacetScope CLI — search, edit, and preview documents from the terminal.
//!
//! Drives the same `SearchView` reducer as the desktop app, against the search
//! backend configured in `.facetscope.toml` / `FACETSCOPE_URL` or `--url`.

use clap::{Args, CommandFactory, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use facetscope_core::facets::{edit_field, edit_fields, Facet, FacetInput};
use facetscope_core::filters::NONE_SENTINEL;
use facetscope_core::present::{
    caption, display_value, shows_comment, slide_caption, snippet, ResultsPane, NO_PREVIEW_MESSAGE,
};
use facetscope_core::types::SearchResult;
use facetscope_core::{load_client_config, Action, HttpBackend, SearchView, Session};

/// FacetScope CLI — faceted document search from the terminal.
#[derive(Parser)]
#[command(name = "fsq", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Search backend URL (overrides config files and FACETSCOPE_URL)
    #[arg(long, global = true)]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search documents by text and facet filters
    Search {
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Edit a document's metadata (located by running a search first)
    Edit {
        /// Document id
        doc_id: String,

        /// Field assignment, repeatable (e.g. --set language=German)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        sets: Vec<String>,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// Show the slide preview for an agent
    Preview {
        /// Agent id of the document
        agent_id: String,
    },
    /// List facets and their accepted values
    Facets,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Free-text query (may be empty to browse by filters)
    #[arg(default_value = "")]
    query: String,

    #[arg(long)]
    language: Option<String>,

    /// Month, YYYY-MM
    #[arg(long)]
    business_date: Option<String>,

    /// True or False
    #[arg(long)]
    is_client_specific: Option<String>,

    #[arg(long)]
    client_name: Option<String>,

    #[arg(long)]
    purpose: Option<String>,

    #[arg(long)]
    artifact_type: Option<String>,

    #[arg(long)]
    topic: Option<String>,

    #[arg(long)]
    industry: Option<String>,
}

impl SearchArgs {
    /// Actions that stage the query and filters, validated against the vocabulary.
    fn actions(self) -> Vec<Action> {
        let pairs = [
            (Facet::Language, self.language),
            (Facet::BusinessDate, self.business_date),
            (Facet::ClientSpecific, self.is_client_specific),
            (Facet::ClientName, self.client_name),
            (Facet::Purpose, self.purpose),
            (Facet::ArtifactType, self.artifact_type),
            (Facet::Topic, self.topic),
            (Facet::Industry, self.industry),
        ];
        let mut actions = vec![Action::QueryChanged(self.query)];
        for (facet, value) in pairs {
            let Some(value) = value else { continue };
            if value != NONE_SENTINEL && !facet.accepts(&value) {
                fail(&format!("'{value}' is not a valid {} (see `fsq facets`)", facet.label()));
            }
            actions.push(Action::FilterChanged { facet, value });
        }
        actions
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(&format!("Could not serialize output: {e}")),
    }
}

fn connect(url: Option<String>) -> Session<HttpBackend> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = load_client_config(&cwd);
    if let Some(url) = url {
        config.base_url = url;
    }
    tracing::debug!(base_url = config.base_url.as_str(), "Using backend");
    match HttpBackend::new(config) {
        Ok(backend) => Session::new(backend),
        Err(e) => fail(&e.to_string()),
    }
}

/// Run a search and exit on failure.
async fn run_search(session: &mut Session<HttpBackend>, search: SearchArgs) {
    let mut actions = search.actions();
    actions.push(Action::SearchSubmitted);
    session.dispatch_all(actions).await;
    if let Some(error) = &session.view().error {
        fail(error);
    }
}

fn print_card(doc: &SearchResult, view: &SearchView) {
    let badge = if doc.metadata.is_client_specific() { "  [Client Specific]" } else { "" };
    println!("[{}] {}{badge}", doc.id, doc.title);
    println!("  {}", snippet(&doc.text));

    let editing = view.is_editing(&doc.id);
    let facets: Vec<String> = edit_fields()
        .iter()
        .filter(|f| Facet::from_key(f.key).is_some())
        .map(|f| format!("{}: {}", f.label, display_value(f.key, &doc.metadata)))
        .collect();
    println!("  {}", facets.join(" | "));
    if shows_comment(&doc.metadata, editing) {
        println!("  Comment: {}", doc.metadata.comment().unwrap_or(""));
    }
}

fn print_results(view: &SearchView) {
    let pane = ResultsPane::of(view);
    if let Some(message) = pane.message() {
        eprintln!("{message}");
        return;
    }
    let Some(result) = &view.result else { return };
    if let Some(line) = caption(result.total) {
        eprintln!("{line}\n");
    }
    for doc in &result.results {
        print_card(doc, view);
        println!();
    }
}

fn print_facets() {
    for facet in Facet::ALL {
        match facet.input() {
            FacetInput::Choice(choices) => {
                println!("{} (--{}):", facet.label(), facet.key().replace('_', "-"));
                for choice in choices {
                    if choice.label == choice.value {
                        println!("  {}", choice.value);
                    } else {
                        println!("  {:<8} {}", choice.value, choice.label);
                    }
                }
            }
            FacetInput::Text { .. } => println!("{}: free text", facet.label()),
            FacetInput::Month => println!("{}: month (YYYY-MM)", facet.label()),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("facetscope=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { search } => {
            let mut session = connect(cli.url);
            run_search(&mut session, search).await;
            let view = session.view();
            if cli.json {
                print_json(&view.result);
            } else {
                print_results(view);
            }
        }
        Commands::Edit { doc_id, sets, search } => {
            let mut session = connect(cli.url);
            run_search(&mut session, search).await;
            if session.view().result.as_ref().and_then(|r| r.find(&doc_id)).is_none() {
                fail(&format!("Document '{doc_id}' not in results; narrow the search to include it"));
            }

            let mut actions = vec![Action::EditStarted { doc_id: doc_id.clone() }];
            for set in sets {
                let Some((field, value)) = set.split_once('=') else {
                    fail(&format!("Expected FIELD=VALUE, got '{set}'"));
                };
                if let Some(known) = edit_field(field) {
                    if !known.input.accepts(value) {
                        fail(&format!("'{value}' is not a valid {} (see `fsq facets`)", known.label));
                    }
                }
                actions.push(Action::FieldChanged { field: field.to_string(), value: value.to_string() });
            }
            actions.push(Action::SaveRequested);
            session.dispatch_all(actions).await;

            let view = session.view();
            if let Some(error) = &view.error {
                fail(error);
            }
            let Some(doc) = view.result.as_ref().and_then(|r| r.find(&doc_id)) else {
                fail("Document not found");
            };
            if cli.json {
                print_json(&doc.metadata);
            } else {
                print_card(doc, view);
                eprintln!("\nSaved {doc_id}");
            }
        }
        Commands::Preview { agent_id } => {
            let mut session = connect(cli.url);
            // No result set here, so the agent id doubles as the loading key
            session
                .dispatch(Action::PreviewRequested { doc_id: agent_id.clone(), agent_id: agent_id.clone() })
                .await;
            let preview = &session.view().preview;
            if !preview.open {
                fail(&format!("Could not load preview for '{agent_id}'"));
            }
            if cli.json {
                print_json(&preview.slides);
            } else if preview.slides.is_empty() {
                eprintln!("{NO_PREVIEW_MESSAGE}");
            } else {
                for slide in &preview.slides {
                    println!("{:<14} {}", slide_caption(slide, preview.slides.len()), slide.image_url);
                }
            }
        }
        Commands::Facets => print_facets(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fsq", &mut std::io::stdout());
        }
    }
}
