use clap::{ArgGroup, Parser};
use rpo_demos::parsers::HexBytes;
use rpo_demos::{Message, digest, prng_bytes};
use rpo_sponge::SpongeError;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Hash a message with RPO-128, or stream bytes from the RPO-128 PRNG.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("message").args(["input", "text"])))]
struct Args {
    /// The message to hash, as hex.
    #[arg(short, long)]
    input: Option<HexBytes>,

    /// The message to hash, as UTF-8 text.
    #[arg(short, long)]
    text: Option<String>,

    /// Number of output bytes.
    #[arg(short, long, default_value_t = 32)]
    out_len: usize,

    /// Stream PRNG output instead of hashing.
    #[arg(long, conflicts_with = "message")]
    prng: bool,

    /// Seed for the PRNG, as hex. Without it the PRNG is seeded by the operating system.
    #[arg(short, long, requires = "prng")]
    seed: Option<HexBytes>,
}

fn main() -> Result<(), SpongeError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();

    let out = if args.prng {
        prng_bytes(args.seed.as_ref().map(|s| s.0.as_slice()), args.out_len)?
    } else {
        let message = match (args.input, args.text) {
            (_, Some(text)) => Message::Text(text),
            (Some(HexBytes(bytes)), None) => Message::Bytes(bytes),
            (None, None) => Message::Bytes(Vec::new()),
        };
        digest(&message, args.out_len)?
    };

    println!("{}", hex::encode(out));
    Ok(())
}
