//! File-backed secret store for the CLI.
//!
//! Secrets live in a single JSON file. When a key is configured the map is
//! sealed with ChaCha20-Poly1305 and only the nonce and ciphertext are
//! written; otherwise the map is stored as plain JSON.

use std::{collections::HashMap, fs, path::PathBuf, sync::Mutex};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use goalsaver_core::{
    errors::Error,
    secrets::{format_service_id, SecretStore},
    Result,
};

const FILE_VERSION: u32 = 1;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

type SecretMap = HashMap<String, String>;

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SecretsFile {
    Sealed {
        version: u32,
        nonce: String,
        ciphertext: String,
    },
    Plain {
        version: u32,
        secrets: SecretMap,
    },
}

#[derive(Debug)]
pub struct FileSecretStore {
    path: PathBuf,
    cipher_key: Option<[u8; KEY_LEN]>,
    lock: Mutex<()>,
}

impl FileSecretStore {
    pub fn new(path: PathBuf, encryption_key: Option<&str>) -> Result<Self> {
        let cipher_key = encryption_key
            .filter(|k| !k.trim().is_empty())
            .map(decode_key)
            .transpose()?;

        Ok(Self {
            path,
            cipher_key,
            lock: Mutex::new(()),
        })
    }

    /// Load, edit and persist the map under the store lock.
    fn update<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut SecretMap),
    {
        let _guard = self.lock()?;
        let mut secrets = self.load()?;
        edit(&mut secrets);
        self.save(secrets)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::secret("Secret store lock poisoned"))
    }

    fn cipher(&self) -> Result<ChaCha20Poly1305> {
        let key = self.cipher_key.ok_or_else(|| {
            Error::secret("GOALSAVER_SECRET_KEY must be set to read the encrypted secrets file")
        })?;
        Ok(ChaCha20Poly1305::new(Key::from_slice(&key)))
    }

    fn load(&self) -> Result<SecretMap> {
        if !self.path.exists() {
            return Ok(SecretMap::new());
        }
        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(SecretMap::new());
        }

        match serde_json::from_slice::<SecretsFile>(&raw)? {
            SecretsFile::Plain { secrets, .. } => Ok(secrets),
            SecretsFile::Sealed {
                nonce, ciphertext, ..
            } => {
                let nonce = BASE64
                    .decode(nonce)
                    .map_err(|e| Error::secret(format!("Failed to decode nonce: {e}")))?;
                if nonce.len() != NONCE_LEN {
                    return Err(Error::secret("Secrets file nonce has the wrong length"));
                }
                let ciphertext = BASE64
                    .decode(ciphertext)
                    .map_err(|e| Error::secret(format!("Failed to decode ciphertext: {e}")))?;
                let plaintext = self
                    .cipher()?
                    .decrypt(Nonce::from_slice(&nonce), ciphertext.as_ref())
                    .map_err(|_| Error::secret("Failed to decrypt secrets file"))?;
                Ok(serde_json::from_slice(&plaintext)?)
            }
        }
    }

    fn save(&self, secrets: SecretMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = if self.cipher_key.is_some() {
            let mut nonce = [0u8; NONCE_LEN];
            OsRng.fill_bytes(&mut nonce);
            let plaintext = serde_json::to_vec(&secrets)?;
            let ciphertext = self
                .cipher()?
                .encrypt(Nonce::from_slice(&nonce), plaintext.as_ref())
                .map_err(|_| Error::secret("Failed to encrypt secrets"))?;
            SecretsFile::Sealed {
                version: FILE_VERSION,
                nonce: BASE64.encode(nonce),
                ciphertext: BASE64.encode(ciphertext),
            }
        } else {
            SecretsFile::Plain {
                version: FILE_VERSION,
                secrets,
            }
        };

        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

impl SecretStore for FileSecretStore {
    fn set_secret(&self, service: &str, secret: &str) -> Result<()> {
        let key = format_service_id(service);
        self.update(|secrets| {
            secrets.insert(key, secret.to_string());
        })
    }

    fn get_secret(&self, service: &str) -> Result<Option<String>> {
        let _guard = self.lock()?;
        Ok(self.load()?.remove(&format_service_id(service)))
    }

    fn delete_secret(&self, service: &str) -> Result<()> {
        let key = format_service_id(service);
        self.update(|secrets| {
            secrets.remove(&key);
        })
    }
}

/// Reads `GOALSAVER_SECRET_KEY`: 32 raw bytes of key material, either as
/// base64 or as a 32-character ASCII string that is not valid base64.
fn decode_key(raw: &str) -> Result<[u8; KEY_LEN]> {
    let raw = raw.trim();
    let material = BASE64
        .decode(raw)
        .ok()
        .or_else(|| (raw.len() == KEY_LEN).then(|| raw.as_bytes().to_vec()))
        .ok_or_else(|| {
            Error::InvalidConfigValue(format!(
                "secret key is neither base64 nor {KEY_LEN} ascii characters"
            ))
        })?;

    let len = material.len();
    material.try_into().map_err(|_| {
        Error::InvalidConfigValue(format!(
            "secret key holds {len} bytes of key material, expected {KEY_LEN}"
        ))
    })
}
