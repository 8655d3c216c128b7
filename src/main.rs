use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::debug;
use mnemonic_completer::{
    complete, possible_last_bytes, CompletionRequest, CompletionResponse, DEFAULT_MNEMONIC_LENGTH,
};

#[derive(Parser)]
#[command(name = "mnemonic-completer")]
#[command(about = "Completes partial BIP39 recovery phrases and enumerates valid final words")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tile a short phrase into a checksum-valid mnemonic
    Complete {
        /// One or more wordlist words, separated by spaces or underscores
        phrase: Option<String>,
        /// Target mnemonic length (12, 15, 18, 21 or 24)
        #[arg(short, long, default_value_t = DEFAULT_MNEMONIC_LENGTH)]
        length: usize,
        /// Number of alternative final words to enumerate
        #[arg(short, long, default_value_t = 0)]
        end_words: usize,
        /// Full request as JSON, overriding the other arguments
        #[arg(long, conflicts_with_all = ["phrase", "length", "end_words"])]
        request: Option<String>,
        /// Emit the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Enumerate last-entropy-byte values that keep the checksum satisfiable
    LastBytes {
        /// Entropy length in bytes (16, 20, 24, 28 or 32)
        #[arg(short, long, default_value_t = 16)]
        entropy_length: usize,
        /// Current value of the final entropy byte
        #[arg(short, long, default_value_t = 0)]
        last_byte: u8,
        /// Number of candidate bytes to produce
        #[arg(short, long)]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Complete {
            phrase,
            length,
            end_words,
            request,
            json,
        } => {
            let mut req = match (request, phrase) {
                (Some(raw), _) => CompletionRequest::from_json(&raw)?,
                (None, Some(phrase)) => CompletionRequest {
                    phrase,
                    length,
                    end_words,
                },
                (None, None) => bail!("either a phrase or --request is required"),
            };
            req.assume_defaults();
            debug!(
                "completing '{}' to {} words, {} end words",
                req.phrase, req.length, req.end_words
            );

            match complete(&req.phrase, req.length, req.end_words) {
                Ok(completion) => {
                    if json {
                        let response = CompletionResponse::from_completion(&completion);
                        println!("{}", serde_json::to_string_pretty(&response)?);
                    } else {
                        println!("{}", completion.mnemonic);
                        if !completion.ends.is_empty() {
                            println!("ends: {}", completion.ends.join(" "));
                        }
                    }
                }
                Err(e) if json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&CompletionResponse::from_error(&e))?
                    );
                }
                Err(e) => bail!(e),
            }
        }
        Commands::LastBytes {
            entropy_length,
            last_byte,
            count,
        } => {
            let bytes = possible_last_bytes(entropy_length, last_byte, count)?;
            debug!("{} candidate bytes for {} byte entropy", bytes.len(), entropy_length);
            for byte in bytes {
                println!("0x{}", hex::encode([byte]));
            }
        }
    }

    Ok(())
}
