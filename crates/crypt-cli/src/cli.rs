use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crypt_core::VERSION;

/// Crypt - password-protected files kept in a single encrypted store
#[derive(Parser)]
#[command(name = "crypt")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store document
    #[arg(long, global = true, env = "CRYPT_STORE", value_name = "PATH")]
    pub store: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "CRYPT_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `ls` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `enc` command
#[derive(Args)]
pub struct AddArgs {
    /// The file to encrypt
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Where to store the file inside crypt
    #[arg(value_name = "NAME", required_unless_present = "output")]
    pub name: Option<String>,

    /// Where to store the file inside crypt
    #[arg(short, long, value_name = "NAME", conflicts_with = "name")]
    pub output: Option<String>,
}

impl AddArgs {
    /// Record name, from `-o` or the positional argument.
    pub fn target(&self) -> Option<&str> {
        self.output.as_deref().or(self.name.as_deref())
    }
}

/// Arguments for the `cat` command
#[derive(Args)]
pub struct ReadArgs {
    /// Record to print
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `mv` command
#[derive(Args)]
pub struct RenameArgs {
    /// Current name
    #[arg(value_name = "OLD")]
    pub old: String,

    /// New name
    #[arg(value_name = "NEW")]
    pub new: String,

    /// Fail instead of replacing an existing record at NEW
    #[arg(long)]
    pub no_clobber: bool,
}

/// Arguments for the `rm` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Record to delete
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `upgrade` command
#[derive(Args)]
pub struct UpgradeArgs {
    /// Record to re-encrypt under the current scheme
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List files
    #[command(name = "ls", visible_alias = "list")]
    List(ListArgs),

    /// Add a file
    #[command(name = "enc", visible_alias = "add")]
    Add(AddArgs),

    /// Print the contents of a file
    #[command(name = "cat", visible_alias = "read")]
    Read(ReadArgs),

    /// Rename a file
    #[command(name = "mv", visible_alias = "rename")]
    Rename(RenameArgs),

    /// Delete a file
    #[command(name = "rm", visible_alias = "delete")]
    Delete(DeleteArgs),

    /// Re-encrypt a legacy record under the current scheme
    Upgrade(UpgradeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
