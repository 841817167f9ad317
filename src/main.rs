// rsakit CLI
// prime / keygen / encrypt / decrypt entry points over the RSA core

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rsakit::rsa::keygen::generate_key_pair_with;
use rsakit::rsa::prime::generate_large_prime_with;
use rsakit::rsa::{decrypt_file, encrypt_file, PrimalityTest};
use rsakit::util::keyfile;

#[derive(Parser)]
#[command(name = "rsakit", about = "RSA key generation and block file encryption")]
struct Cli {
    /// Witness rounds per primality test (error bound 4^-rounds for miller-rabin)
    #[arg(long, default_value_t = 20)]
    rounds: u32,

    /// Primality test run by the prime sampler
    #[arg(long, value_enum, default_value = "miller-rabin")]
    test: TestChoice,

    /// Cap on sampling attempts per prime (unbounded when omitted)
    #[arg(long)]
    max_attempts: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TestChoice {
    /// Cheaper per round, but Carmichael numbers slip through
    Fermat,
    /// False-positive probability at most 4^-rounds
    MillerRabin,
}

impl From<TestChoice> for PrimalityTest {
    fn from(choice: TestChoice) -> Self {
        match choice {
            TestChoice::Fermat => PrimalityTest::Fermat,
            TestChoice::MillerRabin => PrimalityTest::MillerRabin,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a probable prime of the given bit length and print it
    Prime {
        /// Exact bit length of the prime
        bits: u64,
    },
    /// Generate a key pair and write <stem>.public.txt / <stem>.private.txt
    Keygen {
        /// Bit length of each prime factor
        bits: u64,
        /// Output filename stem
        stem: String,
    },
    /// Encrypt a file with a public key file
    Encrypt {
        /// Key file: two decimal lines, modulus then exponent
        key: PathBuf,
        input: PathBuf,
        output: PathBuf,
    },
    /// Decrypt a file with a private key file
    Decrypt {
        /// Key file: two decimal lines, modulus then exponent
        key: PathBuf,
        input: PathBuf,
        output: PathBuf,
    },
}

fn run(cli: Cli) -> Result<()> {
    let test = PrimalityTest::from(cli.test);

    match cli.command {
        Commands::Prime { bits } => {
            let start = Instant::now();
            let prime =
                generate_large_prime_with(bits, cli.rounds, test, cli.max_attempts)?;
            info!(bits, elapsed = ?start.elapsed(), "prime generated");
            println!("{}", prime);
        }
        Commands::Keygen { bits, stem } => {
            let start = Instant::now();
            let pair = generate_key_pair_with(bits, cli.rounds, test, cli.max_attempts)?;
            info!(bits, elapsed = ?start.elapsed(), "key pair generated");

            let public_file = keyfile::public_path(&stem);
            keyfile::write_public(&public_file, &pair.public)
                .context("writing public key file")?;
            println!("{} written", public_file.display());

            let private_file = keyfile::private_path(&stem);
            keyfile::write_private(&private_file, &pair.private)
                .context("writing private key file")?;
            println!("{} written", private_file.display());
        }
        Commands::Encrypt { key, input, output } => {
            let key = keyfile::read_public(&key).context("reading public key file")?;
            let start = Instant::now();
            encrypt_file(&input, &output, &key)?;
            info!(elapsed = ?start.elapsed(), "file encrypted");
        }
        Commands::Decrypt { key, input, output } => {
            let key = keyfile::read_private(&key).context("reading private key file")?;
            let start = Instant::now();
            decrypt_file(&input, &output, &key)?;
            info!(elapsed = ?start.elapsed(), "file decrypted");
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
