//! Encrypts a few blocks in ECB mode under every standard parameter set.
//!
//! Run with `RUST_LOG=gost_core=trace` to see the library's events.

use gost_core::{BlockMode, Gost28147, ParamSet};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), gost_core::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Fixed key for reproducible output.
    let key: [u8; 32] = core::array::from_fn(|i| i as u8);
    let plaintext = *b"GOST 28147-89 in ECB mode.......";

    for set in ParamSet::ALL {
        let cipher = Gost28147::with_param_set(&key, set)?;

        let mut ciphertext = [0u8; 32];
        cipher.ecb_encrypter().crypt_blocks(&mut ciphertext, &plaintext)?;

        let mut decrypted = ciphertext;
        cipher.ecb_decrypter().crypt_blocks_in_place(&mut decrypted)?;
        assert_eq!(decrypted, plaintext);

        println!("{set}: {}", hex::encode(ciphertext));
    }

    println!("example succeeded; every parameter set round-trips");
    Ok(())
}
