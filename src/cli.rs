use clap::{Parser, Subcommand};
use futures::io::AsyncReadExt;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::Result;
use crate::storage::constants::CONTENT_TYPE_OPTION;
use crate::storage::contract::{Config, FilesystemAdapter, NormalizedEntry};
use crate::storage::format_size;

#[derive(Parser, Debug)]
#[command(
    name = "selectel-fs",
    version,
    about = "Work with a Selectel cloud storage container like a filesystem"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List objects under a prefix
    Ls {
        #[arg(default_value = "")]
        path: String,
        /// Show type, size, modification time and content type
        #[arg(short, long)]
        long: bool,
    },
    /// Print an object to stdout
    Cat { path: String },
    /// Download an object to a local file
    Get { remote: String, local: PathBuf },
    /// Upload a local file
    Put {
        local: PathBuf,
        remote: String,
        /// Content type to store the object with
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Copy an object inside the container
    Cp { src: String, dest: String },
    /// Move an object inside the container
    Mv { src: String, dest: String },
    /// Delete an object
    Rm { path: String },
    /// Delete a directory and everything below it
    Rmdir { path: String },
    /// Create a directory marker
    Mkdir { path: String },
    /// Show content type, size and modification time of an object
    Stat {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the public url of a path
    Url { path: String },
}

/// How `stat` renders its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `key=value` line per attribute
    Human,
    /// Single-line JSON object
    Json,
}

pub async fn run<A: FilesystemAdapter + ?Sized>(args: Args, adapter: &A) -> Result<()> {
    match args.command {
        Command::Ls { path, long } => {
            for entry in adapter.list_contents(&path, false).await? {
                println!("{}", render_entry(&entry, long));
            }
        }
        Command::Cat { path } => {
            let content = adapter.read(&path).await?;
            io::stdout().write_all(&content)?;
        }
        Command::Get { remote, local } => {
            let mut stream = adapter.read_stream(&remote).await?;
            let mut content = Vec::new();
            stream.read_to_end(&mut content).await?;
            tokio::fs::write(&local, &content).await?;
            println!(
                "Downloaded: {remote} → {} ({} bytes)",
                local.display(),
                content.len()
            );
        }
        Command::Put {
            local,
            remote,
            content_type,
        } => {
            let content = tokio::fs::read(&local).await?;
            let size = content.len();
            let config = match content_type {
                Some(content_type) => Config::new().with(CONTENT_TYPE_OPTION, content_type),
                None => Config::new(),
            };
            adapter.write(&remote, content, &config).await?;
            println!("Upload: {} → {remote} ({size} bytes)", local.display());
        }
        Command::Cp { src, dest } => {
            adapter.copy(&src, &dest, &Config::new()).await?;
            println!("Copied: {src} → {dest}");
        }
        Command::Mv { src, dest } => {
            adapter.move_file(&src, &dest, &Config::new()).await?;
            println!("Moved: {src} → {dest}");
        }
        Command::Rm { path } => {
            adapter.delete(&path).await?;
            println!("Deleted: {path}");
        }
        Command::Rmdir { path } => {
            adapter.delete_directory(&path).await?;
            println!("Deleted directory: {path}");
        }
        Command::Mkdir { path } => {
            adapter.create_directory(&path, &Config::new()).await?;
            println!("Created directory: {path}");
        }
        Command::Stat { path, json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            };
            print_stat(adapter, &path, format).await?;
        }
        Command::Url { path } => println!("{}", adapter.get_url(&path)),
    }
    Ok(())
}

async fn print_stat<A: FilesystemAdapter + ?Sized>(
    adapter: &A,
    path: &str,
    format: OutputFormat,
) -> Result<()> {
    let mime_type = adapter.mime_type(path).await?.mime_type;
    let size = adapter.file_size(path).await?.file_size;
    let last_modified = adapter.last_modified(path).await?.last_modified;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": path,
                "mime_type": mime_type,
                "file_size": size,
                "last_modified": last_modified,
            });
            println!("{value}");
        }
        OutputFormat::Human => {
            println!("path={path}");
            println!("mime_type={}", mime_type.unwrap_or_default());
            println!("size={}", size.unwrap_or_default());
            println!("last_modified={}", last_modified.unwrap_or_default());
        }
    }
    Ok(())
}

fn render_entry(entry: &NormalizedEntry, long: bool) -> String {
    if !long {
        return entry.path.clone();
    }
    let file_type = if entry.is_dir() { "DIR" } else { "FILE" };
    let size_str = if entry.is_dir() {
        "-".to_string()
    } else {
        format_size(entry.size)
    };
    format!(
        "{file_type:<6} {size_str:>10} {:>12} {:<24} {}",
        entry.timestamp, entry.mimetype, entry.path
    )
}
