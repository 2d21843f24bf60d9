//! `lonecard` — command-line shell around the single contact record.
//!
//! Reads `lonecard.toml` (or the path given with `--config`), opens the SQLite
//! store and the durable photo root, and runs one command against them.
//!
//! # Usage
//!
//! ```
//! lonecard save --first-name Jane --last-name Doe --address1 "1 Yonge St" \
//!   --city Toronto --province ON --country Canada --postal-code "M5E 1E5" \
//!   --email jane@example.com --phone 4165551234 --image ~/Pictures/me.jpg
//! lonecard show --json
//! lonecard delete
//! ```

mod form;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lonecard_assets::FsColocator;
use lonecard_core::{contact::Province, lifecycle::ContactLifecycle, session::Mode};
use lonecard_store_sqlite::SqliteStore;
use strum::IntoEnumIterator as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use form::FormArgs;
use settings::ShellConfig;

#[derive(Parser)]
#[command(author, version, about = "Keep one contact card on disk")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "lonecard.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the stored contact.
  Show {
    /// Print as JSON instead of text.
    #[arg(long)]
    json: bool,
  },
  /// Create the contact, or update the stored one.
  Save(FormArgs),
  /// Delete the stored contact. Its photo is kept.
  Delete,
  /// List the accepted province codes.
  Provinces,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so `show --json` output stays clean.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  if let Command::Provinces = cli.command {
    for p in Province::iter() {
      println!("{}  {}", p.code(), p.name());
    }
    return Ok(());
  }

  let cfg = ShellConfig::load(&cli.config)?;

  if let Some(parent) = cfg.store_path.parent() {
    tokio::fs::create_dir_all(parent)
      .await
      .with_context(|| format!("failed to create {parent:?}"))?;
  }
  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?;
  let assets = FsColocator::open(&cfg.durable_root)
    .await
    .with_context(|| format!("failed to open durable root {:?}", cfg.durable_root))?;

  let lifecycle = ContactLifecycle::new(store, assets);
  let mut session = lifecycle.start().await.context("failed to load contact")?;

  match cli.command {
    Command::Show { json } => match session.contact() {
      Some(contact) if json => {
        println!("{}", serde_json::to_string_pretty(contact)?);
      }
      Some(contact) => println!("{}", form::render(contact)),
      None if json => println!("null"),
      None => println!("No contact saved yet."),
    },

    Command::Save(args) => {
      let creating = session.mode() == Mode::Create;
      let mut candidate = session.candidate();
      args.apply(&mut candidate)?;

      let contact = lifecycle
        .save(&mut session, candidate)
        .await
        .context("failed to save contact")?;
      if creating {
        println!("Contact added successfully (id {}).", contact.id);
      } else {
        println!("Contact updated successfully.");
      }
    }

    Command::Delete => {
      lifecycle
        .delete(&mut session)
        .await
        .context("failed to delete contact")?;
      println!("Contact deleted successfully.");
    }

    // Printed before the store was opened.
    Command::Provinces => {}
  }

  Ok(())
}
