//! `vocab` command-line interface.
//!
//! Imports SNOMED CT release files into `snomed.db` and exposes the UMLS,
//! SNOMED, and RxNorm lookups plus the VA drug-class resolver over the
//! database files in the databases directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_loader::{discover_release_files, DescriptionTable, Importer, RelationshipTable};
use vocab_lookup::{DrugClassResolver, RxNormLookup, SnomedLookup, UmlsLookup};
use vocab_store::{check_databases, LogicalDb, VocabStore, ALL_DATABASES};

const DEFAULT_DB_DIR: &str = "databases";

#[derive(Parser)]
#[command(name = "vocab")]
#[command(about = "Medical vocabulary import and cross-reference lookups", long_about = None)]
struct Cli {
    /// Directory holding the vocabulary database files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DB_DIR, global = true)]
    db_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a SNOMED CT release directory into snomed.db
    Import {
        /// Extracted SNOMED CT release directory
        #[arg(value_name = "DIRECTORY")]
        directory: PathBuf,
    },

    /// Look up a UMLS CUI (prefix with '-' for negation)
    Lookup {
        /// The CUI to look up
        cui: String,

        /// Report all sources, not only SNOMED CT and the Metathesaurus
        #[arg(long)]
        all: bool,

        /// Render HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Look up a SNOMED CT concept id
    Snomed {
        /// The concept id to look up
        concept_id: i64,

        /// Render HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Look up an RxNorm RXCUI
    Rxnorm {
        /// The RXCUI to look up
        rxcui: i64,

        /// Report all matches instead of the single best term
        #[arg(long)]
        all: bool,

        /// Render HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Resolve the VA drug class for an RXCUI
    DrugClass {
        /// The RXCUI to resolve
        rxcui: i64,

        /// Also search second-degree relations
        #[arg(long)]
        deep: bool,
    },

    /// Verify that all database files exist
    Check,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Import { directory } => {
            let files = discover_release_files(&directory)?;
            tracing::info!(
                description = %files.description_file.display(),
                relationship = %files.relationship_file.display(),
                "discovered release files"
            );

            std::fs::create_dir_all(&cli.db_dir)?;
            let store = open_db(&cli.db_dir, LogicalDb::Snomed)?;
            let importer = Importer::new(&store);
            importer.import_if_needed(&[
                (&DescriptionTable, files.description_file.as_path()),
                (&RelationshipTable, files.relationship_file.as_path()),
            ])?;
            tracing::info!("import complete");
        }

        Commands::Lookup { cui, all, html } => {
            // Lazy check: log and continue, the query itself will fail
            // loudly if the database is truly unusable.
            if let Err(err) = check_databases(&cli.db_dir, &[LogicalDb::Umls]) {
                tracing::error!("{}", err);
            }
            let store = open_db(&cli.db_dir, LogicalDb::Umls)?;
            let lookup = UmlsLookup::new(&store);
            println!("{}", lookup.lookup_code_meaning(&cui, !all, !html)?);
        }

        Commands::Snomed { concept_id, html } => {
            check_databases(&cli.db_dir, &[LogicalDb::Snomed])?;
            let store = open_db(&cli.db_dir, LogicalDb::Snomed)?;
            let lookup = SnomedLookup::new(&store);
            println!("{}", lookup.lookup_code_meaning(concept_id, !html)?);
        }

        Commands::Rxnorm { rxcui, all, html } => {
            check_databases(&cli.db_dir, &[LogicalDb::RxNorm])?;
            let store = open_db(&cli.db_dir, LogicalDb::RxNorm)?;
            let lookup = RxNormLookup::new(&store);
            match lookup.lookup_code_meaning(rxcui, !all, !html)? {
                Some(meaning) => println!("{}", meaning),
                None => println!("not found"),
            }
        }

        Commands::DrugClass { rxcui, deep } => {
            check_databases(&cli.db_dir, &[LogicalDb::RxNorm])?;
            let store = open_db(&cli.db_dir, LogicalDb::RxNorm)?;
            let resolver = DrugClassResolver::new(&store)?;
            match resolver.find_drug_class(rxcui, deep)? {
                Some(class) => println!("{}", class),
                None => println!("not found"),
            }
        }

        Commands::Check => {
            check_databases(&cli.db_dir, &ALL_DATABASES)?;
            println!("all databases present");
        }
    }

    Ok(())
}

fn open_db(dir: &std::path::Path, db: LogicalDb) -> Result<VocabStore, vocab_store::StoreError> {
    VocabStore::open(dir.join(db.file_name()))
}
