//! Command-line interface for the AES-128 engine.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{decrypt_block, ecb, encrypt_block, expand_key, Aes128Key, Block};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    author,
    about = "AES-128 block cipher and ECB/PKCS7 codec"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file in ECB mode with PKCS7 padding.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext input file (any length).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt an ECB ciphertext file and strip its padding.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext input file (a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Encrypt or decrypt a single 16-byte block given in hex.
    Block {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Decrypt instead of encrypt.
        #[arg(long, default_value_t = false)]
        decrypt: bool,
    },
    /// Run the built-in known-answer and ECB self tests.
    Kat,
    /// Encrypt a random message under a random key and decrypt it back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Message length in bytes.
        #[arg(long, default_value_t = 40)]
        len: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &input, &output),
        Commands::Block {
            key_hex,
            block_hex,
            decrypt,
        } => cmd_block(&key_hex, &block_hex, decrypt),
        Commands::Kat => cmd_kat(),
        Commands::Demo { seed, len } => cmd_demo(seed, len),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();
}

fn cmd_enc(key_hex: &str, input_path: &Path, output_path: &Path) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = ecb::encrypt(&data, &key);
    debug!(
        "encrypted {} bytes into {} bytes",
        data.len(),
        ciphertext.len()
    );
    fs::write(output_path, ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(key_hex: &str, input_path: &Path, output_path: &Path) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = ecb::decrypt(&data, &key)
        .with_context(|| format!("decrypt {}", input_path.display()))?;
    debug!("recovered {} plaintext bytes", plaintext.len());
    fs::write(output_path, plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_block(key_hex: &str, block_hex: &str, decrypt: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let round_keys = expand_key(&key);
    let out = if decrypt {
        decrypt_block(&block, &round_keys)
    } else {
        encrypt_block(&block, &round_keys)
    };
    println!("{}", hex::encode(out));
    Ok(())
}

const KAT_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const KAT_PLAIN: &str = "3243f6a8885a308d313198a2e0370734";
const KAT_CIPHER: &str = "3925841d02dc09fbdc118597196a0b32";

fn cmd_kat() -> Result<()> {
    let key = parse_key_hex(KAT_KEY)?;
    let plaintext = parse_block_hex(KAT_PLAIN)?;
    let expected = parse_block_hex(KAT_CIPHER)?;
    let round_keys = expand_key(&key);

    let ciphertext = encrypt_block(&plaintext, &round_keys);
    print_hex("plaintext", &plaintext);
    print_hex("key", key.as_bytes());
    print_hex("ciphertext", &ciphertext);
    print_hex("expected ciphertext", &expected);
    if ciphertext != expected {
        bail!("single block encryption does not match the known answer");
    }

    let decrypted = decrypt_block(&ciphertext, &round_keys);
    print_hex("decrypted", &decrypted);
    if decrypted != plaintext {
        bail!("single block decryption does not recover the plaintext");
    }

    let mut message = Vec::with_capacity(32);
    message.extend_from_slice(&plaintext);
    message.extend_from_slice(&plaintext);
    let encrypted = ecb::encrypt_with_round_keys(&message, &round_keys);
    print_hex("ecb input", &message);
    print_hex("ecb encrypted", &encrypted);
    if encrypted.len() != 48 {
        bail!("ecb ciphertext is {} bytes, expected 48", encrypted.len());
    }
    let recovered = ecb::decrypt_with_round_keys(&encrypted, &round_keys)
        .context("ecb self test decryption")?;
    print_hex("ecb decrypted", &recovered);
    if recovered != message {
        bail!("ecb round trip does not recover the input");
    }

    info!("all self tests passed");
    Ok(())
}

fn cmd_demo(seed: Option<u64>, len: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Aes128Key::from(key_bytes);

    let mut message = vec![0u8; len];
    rng.fill_bytes(&mut message);

    let ciphertext = ecb::encrypt(&message, &key);
    let decrypted = ecb::decrypt(&ciphertext, &key).context("demo decryption")?;

    print_hex("demo key", &key_bytes);
    print_hex("plaintext", &message);
    print_hex("ciphertext", &ciphertext);
    print_hex("decrypted", &decrypted);
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn print_hex(label: &str, data: &[u8]) {
    println!("{label}: {}", hex::encode(data));
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 16 {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != 16 {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::EcbError;

    #[test]
    fn key_hex_must_be_sixteen_bytes() {
        let key = parse_key_hex(&format!(" {KAT_KEY}\n")).unwrap();
        assert_eq!(hex::encode(key.as_bytes()), KAT_KEY);
        assert!(parse_key_hex("2b7e15").is_err());
        assert!(parse_key_hex("zz7e151628aed2a6abf7158809cf4f3c").is_err());
    }

    #[test]
    fn block_hex_must_be_sixteen_bytes() {
        assert_eq!(hex::encode(parse_block_hex(KAT_PLAIN).unwrap()), KAT_PLAIN);
        assert!(parse_block_hex(&format!("{KAT_PLAIN}00")).is_err());
    }

    #[test]
    fn self_tests_pass() {
        cmd_kat().unwrap();
    }

    #[test]
    fn demo_round_trips() {
        cmd_demo(Some(7), 0).unwrap();
        cmd_demo(Some(7), 33).unwrap();
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn file_round_trip() {
        let dir = std::env::temp_dir().join(format!("aes128-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let plain = dir.join("plain.bin");
        let cipher = dir.join("cipher.bin");
        let recovered = dir.join("recovered.bin");
        fs::write(&plain, b"sixteen byte msg plus a tail").unwrap();

        cmd_enc(KAT_KEY, &plain, &cipher).unwrap();
        assert_eq!(fs::metadata(&cipher).unwrap().len(), 32);
        cmd_dec(KAT_KEY, &cipher, &recovered).unwrap();
        assert_eq!(fs::read(&recovered).unwrap(), fs::read(&plain).unwrap());

        fs::write(&cipher, [0u8; 17]).unwrap();
        let err = cmd_dec(KAT_KEY, &cipher, &recovered).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EcbError>(),
            Some(&EcbError::InvalidLength { len: 17 })
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
