use clap::{Parser, Subcommand};
use hlwire::files::FileNameWithInfo;
use hlwire::{encode_path, file_name_list, obfuscate, total_item_count, total_size, UserRecord};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hlwire", about = "Hotline wire-record inspection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a directory listing and print one record per entry
    List {
        dir: PathBuf,
        /// Emit the listing as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Encode a protocol path and print the record bytes as hex
    Path {
        path: String,
    },
    /// Obfuscate a credential string and print the wire bytes as hex
    Obfuscate {
        text: String,
    },
    /// Deobfuscate hex-encoded wire bytes back to text
    Deobfuscate {
        hex: String,
    },
    /// Encode a user presence record and print the payload as hex
    User {
        #[arg(long, default_value = "0")]
        id: u16,
        #[arg(long, default_value = "0")]
        icon: u16,
        #[arg(long, default_value = "0")]
        flags: u16,
        name: String,
    },
    /// Total byte size of every file under a directory
    Size {
        dir: PathBuf,
    },
    /// Total item count under a directory (root excluded)
    Count {
        dir: PathBuf,
    },
}

#[derive(Serialize)]
struct ListEntry {
    name:    String,
    r#type:  String,
    creator: String,
    size:    u32,
}

impl From<&FileNameWithInfo> for ListEntry {
    fn from(r: &FileNameWithInfo) -> Self {
        ListEntry {
            name:    String::from_utf8_lossy(&r.name).into_owned(),
            r#type:  String::from_utf8_lossy(&r.type_code).into_owned(),
            creator: String::from_utf8_lossy(&r.creator_code).into_owned(),
            size:    r.file_size,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {

        // ── List ─────────────────────────────────────────────────────────────
        Commands::List { dir, json } => {
            let fields = file_name_list(&dir)?;
            let entries: Vec<ListEntry> = fields
                .iter()
                .map(|f| FileNameWithInfo::decode(&f.data).map(|r| ListEntry::from(&r)))
                .collect::<Result<_, _>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{:<30} {:>6} {:>6} {:>12}", "Name", "Type", "Crtr", "Size");
                for e in &entries {
                    println!("{:<30} {:>6} {:>6} {:>12}", e.name, e.r#type, e.creator, e.size);
                }
            }
        }

        // ── Path ─────────────────────────────────────────────────────────────
        Commands::Path { path } => {
            println!("{}", hex::encode(encode_path(&path)?));
        }

        // ── Obfuscate / Deobfuscate ──────────────────────────────────────────
        Commands::Obfuscate { text } => {
            println!("{}", hex::encode(obfuscate::obfuscate(text.as_bytes())));
        }
        Commands::Deobfuscate { hex: h } => {
            let bytes = hex::decode(h.trim())?;
            println!("{}", obfuscate::deobfuscate_string(&bytes));
        }

        // ── User ─────────────────────────────────────────────────────────────
        Commands::User { id, icon, flags, name } => {
            let record = UserRecord { id, icon, flags, name };
            println!("{}", hex::encode(record.encode()));
        }

        // ── Size / Count ─────────────────────────────────────────────────────
        Commands::Size { dir } => {
            println!("{}", total_size(&dir)?);
        }
        Commands::Count { dir } => {
            println!("{}", total_item_count(&dir)?);
        }
    }

    Ok(())
}
