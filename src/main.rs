use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;
use utf_reader::{Result, UtfReader};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and extract UTF container files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the container header and entry count.
    Info {
        /// Path to the UTF file.
        file: PathBuf,
    },
    /// List every entry in tree order.
    #[command(alias = "l")]
    List {
        /// Path to the UTF file.
        file: PathBuf,
    },
    /// Write the payload of a named entry to disk.
    #[command(alias = "x")]
    Extract {
        /// Path to the UTF file.
        file: PathBuf,

        /// Name of the entry to extract (first match in tree order).
        name: String,

        /// Output path. Defaults to the entry name in the current directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args.command) {
        eprintln!("\nERROR: utf-reader failed");
        eprintln!("  {}", e);
        exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Info { file } => {
            let reader = UtfReader::open(&file)?;
            let header = reader.header();
            println!("UTF file: {}", file.display());
            println!("{}", "=".repeat(60));
            println!("  Version: {:#x}", header.version);
            println!("  Tree segment: offset {}, {} bytes", header.tree_segment_offset, header.tree_segment_size);
            println!("  String segment: offset {}, {} bytes", header.string_segment_offset, header.string_segment_size);
            println!("  Data segment: offset {}", header.data_segment_offset);
            println!("  Node record size: {} bytes", header.node_record_size);
            println!("  Entries: {}", reader.len());
        }
        Commands::List { file } => {
            let reader = UtfReader::open(&file)?;
            for (i, entry) in reader.entries().iter().enumerate() {
                println!(
                    "{:>5}  flags={:#010x}  size={:>10}  {}",
                    i, entry.record.flags, entry.record.size, entry.name
                );
            }
            println!("{} entries", reader.len());
        }
        Commands::Extract { file, name, output } => {
            let reader = UtfReader::open(&file)?;
            let Some(entry) = reader.find(&name) else {
                eprintln!("ERROR: No entry named '{}' in {}", name, file.display());
                exit(1);
            };
            let payload = reader.read_payload(entry)?;
            let output = output.unwrap_or_else(|| default_output_path(&name));
            fs::write(&output, &payload)?;
            println!("Wrote {} bytes to {}", payload.len(), output.display());
        }
    }
    Ok(())
}

/// Entry names may carry path separators; keep only the final component.
fn default_output_path(name: &str) -> PathBuf {
    let file_name = name.rsplit(['\\', '/']).next().unwrap_or(name);
    Path::new(".").join(if file_name.is_empty() { "payload.bin" } else { file_name })
}

#[cfg(test)]
mod tests {
    use super::default_output_path;
    use std::path::Path;

    #[test]
    fn output_path_keeps_final_component() {
        assert_eq!(default_output_path("ship.dat"), Path::new("./ship.dat"));
        assert_eq!(default_output_path("dir\\ship.dat"), Path::new("./ship.dat"));
        assert_eq!(default_output_path("\\a/b\\mesh.vms"), Path::new("./mesh.vms"));
    }

    #[test]
    fn output_path_falls_back_for_empty_component() {
        assert_eq!(default_output_path("dir\\"), Path::new("./payload.bin"));
        assert_eq!(default_output_path("dir/"), Path::new("./payload.bin"));
        assert_eq!(default_output_path(""), Path::new("./payload.bin"));
    }
}
