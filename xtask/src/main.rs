// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo invocations CI runs, plus two storage helpers:
//!
//! - `cargo xtask verify-migrations` applies the embedded migrations to an
//!   in-memory `SQLite` database and checks the resulting schema against the
//!   shape the storage layer expects.
//! - `cargo xtask inspect-storage <path>` lists the keys held in a server
//!   database file.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use diesel::sql_types::{Integer, Text};
use diesel::{QueryableByName, RunQueryDsl, SqliteConnection};
use duct::cmd;
use std::collections::BTreeMap;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// The single table the storage layer reads and writes.
const STORAGE_TABLE: &str = "storage_entries";

/// Expected columns of [`STORAGE_TABLE`]: name, normalized type, primary key.
const STORAGE_COLUMNS: [(&str, &str, bool); 3] = [
    ("storage_key", "text", true),
    ("storage_value", "text", false),
    ("updated_at", "text", false),
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate code coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check dependencies
    #[command(visible_alias = "cd")]
    Deny,

    /// Check unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check for typos in the project
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Fix typos in the project
    #[command(visible_alias = "typos")]
    FixTypos,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Apply the `SQLite` migrations in memory and check the storage schema
    #[command(visible_alias = "vm")]
    VerifyMigrations,

    /// List the keys stored in a server database file
    #[command(visible_alias = "is")]
    InspectStorage {
        /// Path to the `SQLite` database file
        database: String,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Coverage => coverage(),
            Self::Deny => deny(),
            Self::Machete => machete(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::FixTypos => fix_typos(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::VerifyMigrations => verify_migrations(),
            Self::InspectStorage { database } => inspect_storage(&database),
        }
    }
}

/// Run CI checks (lint, build, test)
fn ci() -> Result<()> {
    lint()?;
    deny()?;
    machete()?;
    build()?;
    test()?;
    verify_migrations()?;
    Ok(())
}

fn deny() -> Result<()> {
    run_cargo(vec!["deny", "check"])
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Generate code coverage report
fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint formatting, typos, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Check for typos in the project using [typos-cli](https://github.com/crate-ci/typos/)
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

/// Fix typos in the project
fn fix_typos() -> Result<()> {
    cmd!("typos", "-w").run_with_trace()?;
    Ok(())
}

/// Run tests for libs and docs
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Apply the `SQLite` migrations to a fresh in-memory database and check
/// that the storage table has exactly the expected columns.
fn verify_migrations() -> Result<()> {
    use diesel::Connection;
    use diesel_migrations::{embed_migrations, MigrationHarness};

    const SQLITE_MIGRATIONS: diesel_migrations::EmbeddedMigrations =
        embed_migrations!("../crates/persistence/migrations");

    tracing::info!("Starting migration verification");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;

    conn.run_pending_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to apply SQLite migrations: {}", e))?;
    tracing::info!("SQLite migrations applied successfully");

    let schema = introspect_sqlite_schema(&mut conn)?;
    check_storage_schema(&schema)?;

    // Reverting must leave nothing behind
    conn.revert_all_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to revert SQLite migrations: {}", e))?;
    let reverted = introspect_sqlite_schema(&mut conn)?;
    if !reverted.is_empty() {
        return Err(color_eyre::eyre::eyre!(
            "❌ Migration verification FAILED: tables left after revert: {:?}",
            reverted.keys().collect::<Vec<_>>()
        ));
    }

    tracing::info!("✓ Migration verification passed");
    Ok(())
}

/// Normalized column description
#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    normalized_type: String,
    nullable: bool,
    primary_key: bool,
}

/// Table name to its columns, keyed by column name
type Schema = BTreeMap<String, BTreeMap<String, Column>>;

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    let mut schema = Schema::new();

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name"
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    for table in tables {
        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;

        let columns = columns
            .into_iter()
            .map(|col| {
                (
                    col.name,
                    Column {
                        normalized_type: normalize_sqlite_type(&col.r#type),
                        nullable: col.notnull == 0,
                        primary_key: col.pk > 0,
                    },
                )
            })
            .collect();

        schema.insert(table.name, columns);
    }

    Ok(schema)
}

/// Normalize `SQLite` type to common representation
fn normalize_sqlite_type(sqlite_type: &str) -> String {
    let normalized = sqlite_type.to_uppercase();
    if normalized.contains("INT") {
        "integer".to_string()
    } else if normalized.contains("REAL")
        || normalized.contains("FLOA")
        || normalized.contains("DOUB")
    {
        "real".to_string()
    } else if normalized.contains("BLOB") {
        "blob".to_string()
    } else {
        "text".to_string()
    }
}

/// Compare the migrated schema with the storage table layout
fn check_storage_schema(schema: &Schema) -> Result<()> {
    let Some(columns) = schema.get(STORAGE_TABLE).filter(|_| schema.len() == 1) else {
        return Err(color_eyre::eyre::eyre!(
            "❌ Migration verification FAILED: expected only '{}', found {:?}",
            STORAGE_TABLE,
            schema.keys().collect::<Vec<_>>()
        ));
    };
    if columns.len() != STORAGE_COLUMNS.len() {
        return Err(color_eyre::eyre::eyre!(
            "❌ Migration verification FAILED: '{}' has {} columns, expected {}",
            STORAGE_TABLE,
            columns.len(),
            STORAGE_COLUMNS.len()
        ));
    }

    for (name, normalized_type, primary_key) in STORAGE_COLUMNS {
        let expected = Column {
            normalized_type: normalized_type.to_string(),
            nullable: false,
            primary_key,
        };
        match columns.get(name) {
            Some(actual) if *actual == expected => {
                tracing::debug!("Column '{}' matches", name);
            }
            Some(actual) => {
                return Err(color_eyre::eyre::eyre!(
                    "❌ Migration verification FAILED: column '{}.{}'\n  expected: {:?}\n  actual: {:?}",
                    STORAGE_TABLE,
                    name,
                    expected,
                    actual
                ));
            }
            None => {
                return Err(color_eyre::eyre::eyre!(
                    "❌ Migration verification FAILED: column '{}.{}' is missing",
                    STORAGE_TABLE,
                    name
                ));
            }
        }
    }

    Ok(())
}

/// Print every stored key with its size and last write time
fn inspect_storage(database: &str) -> Result<()> {
    use diesel::Connection;

    #[derive(QueryableByName)]
    struct EntryInfo {
        #[diesel(sql_type = Text)]
        storage_key: String,
        #[diesel(sql_type = Integer)]
        value_length: i32,
        #[diesel(sql_type = Text)]
        updated_at: String,
    }

    if !std::path::Path::new(database).exists() {
        return Err(color_eyre::eyre::eyre!(
            "Database file '{}' does not exist",
            database
        ));
    }

    let mut conn = SqliteConnection::establish(database)
        .wrap_err(format!("Failed to open SQLite database {database}"))?;

    let entries: Vec<EntryInfo> = diesel::sql_query(format!(
        "SELECT storage_key, length(storage_value) AS value_length, updated_at FROM {STORAGE_TABLE} ORDER BY storage_key"
    ))
    .load(&mut conn)
    .wrap_err("Failed to read storage entries")?;

    if entries.is_empty() {
        tracing::info!("No stored keys in {}", database);
    }
    for entry in entries {
        tracing::info!(
            "{:<24} {:>8} bytes  updated {}",
            entry.storage_key,
            entry.value_length,
            entry.updated_at
        );
    }

    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
