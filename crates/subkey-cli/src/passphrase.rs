//! # Terminal Passphrase Prompt
//!
//! The interactive counterpart of the crypto crate's passphrase
//! capability. Reads the secret from the terminal without echo; only
//! consulted when the private key is actually encrypted.

use subkey_crypto::{KeyError, PassphraseSource};

/// Prompts on the terminal when an encrypted key needs a passphrase.
pub struct TerminalPassphrase;

impl PassphraseSource for TerminalPassphrase {
    fn passphrase(&self) -> Result<String, KeyError> {
        rpassword::prompt_password("Enter passphrase (empty for no passphrase): ")
            .map_err(|e| KeyError::Passphrase(e.to_string()))
    }
}
