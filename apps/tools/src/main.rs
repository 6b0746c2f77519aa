use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use blog_filter::{category_options, BlogView, Corpus, FilterState};
use clap::{Parser, Subcommand};
use contact_flow::{interests::find_interest, FlowError, FormState, Outbox, SubmitPolicy};
use serde::Serialize;
use shared::{
    domain::{Post, ALL_CATEGORIES},
    error::ErrorReport,
    protocol::{ContactField, ContactPayload},
};
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(about = "Blog listing and contact flow checks for the portfolio site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List posts visible for a category and search query.
    Posts {
        #[arg(long)]
        corpus: Option<PathBuf>,
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the category bar.
    Categories {
        #[arg(long)]
        corpus: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Show the contact interests.
    Interests {
        #[arg(long)]
        json: bool,
    },
    /// Run the contact wizard with the given answers.
    Contact {
        #[arg(long)]
        interest: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Require every field and a plausible email before submitting.
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ContactOutcome {
    Submitted { payload: ContactPayload },
    Rejected { error: ErrorReport },
}

#[derive(Serialize)]
struct PostsOutput<'a> {
    featured: Option<&'a Post>,
    posts: &'a [&'a Post],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings()?;
    init_tracing(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &settings, &mut out)
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command, settings: &Settings, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Posts {
            corpus,
            category,
            query,
            json,
        } => {
            let corpus = open_corpus(corpus, settings)?;
            let state = FilterState::new(category, query);
            let view = BlogView::compute(&corpus.posts, &state);
            if json {
                let body = PostsOutput {
                    featured: view.featured,
                    posts: &view.posts,
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                write_listing(out, &view)?;
            }
        }
        Command::Categories { corpus, json } => {
            let corpus = open_corpus(corpus, settings)?;
            let options = category_options(&corpus.categories, &FilterState::default());
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&options)?)?;
                return Ok(());
            }
            for option in options {
                writeln!(out, "{}\t{}", option.icon.as_str(), option.name)?;
            }
        }
        Command::Interests { json } => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(contact_flow::interests())?)?;
                return Ok(());
            }
            for interest in contact_flow::interests() {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    interest.icon.as_str(),
                    interest.title,
                    interest.description
                )?;
            }
        }
        Command::Contact {
            interest,
            name,
            email,
            message,
            validate,
        } => {
            let policy = SubmitPolicy {
                require_complete: validate || settings.require_complete_details,
            };
            let outcome = run_contact(&interest, [name, email, message], policy);
            writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
            if let ContactOutcome::Rejected { error } = outcome {
                bail!("contact request was not submitted: {}", error.message);
            }
        }
    }
    Ok(())
}

fn open_corpus(flag: Option<PathBuf>, settings: &Settings) -> Result<Corpus> {
    let Some(path) = flag.or_else(|| settings.corpus_path.clone()) else {
        bail!("no corpus given; pass --corpus or set corpus_path in {}", config::SETTINGS_FILE);
    };
    Corpus::load(&path).with_context(|| format!("loading corpus '{}'", path.display()))
}

fn write_listing(out: &mut impl Write, view: &BlogView<'_>) -> io::Result<()> {
    if let Some(post) = view.featured {
        writeln!(out, "featured\t{}\t{}\t{}", post.id, post.category, post.title)?;
    }
    if view.is_empty() {
        return writeln!(out, "No articles found matching your criteria.");
    }
    for post in &view.posts {
        writeln!(out, "{}\t{}\t{}", post.id, post.category, post.title)?;
    }
    Ok(())
}

fn run_contact(interest: &str, details: [String; 3], policy: SubmitPolicy) -> ContactOutcome {
    if find_interest(interest).is_none() {
        tracing::warn!(interest, "interest is not one of the listed options");
    }

    let outbox = Outbox::new();
    match fill_and_submit(interest, details, &outbox, policy) {
        Ok(state) => match state.submit_error() {
            Some(err) => ContactOutcome::Rejected {
                error: ErrorReport::from(err),
            },
            None => ContactOutcome::Submitted {
                payload: state.payload(),
            },
        },
        Err(err) => ContactOutcome::Rejected {
            error: ErrorReport::from(&err),
        },
    }
}

fn fill_and_submit(
    interest: &str,
    details: [String; 3],
    outbox: &Outbox,
    policy: SubmitPolicy,
) -> Result<FormState, FlowError> {
    let mut state = FormState::new().select_interest(interest)?;
    for (field, value) in ContactField::ALL.into_iter().zip(details) {
        state = state.update_field(field, value)?;
    }
    state.submit(outbox, policy)
}
