//! Flat-file audio cache
//!
//! One file per synthesized clip, keyed by the SHA-256 of voice and
//! preprocessed text, so identical requests never hit the speech API twice.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

const AUDIO_EXT: &str = "mp3";

#[derive(Debug)]
pub struct AudioCache {
    dir: PathBuf,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CachedAudio {
    pub key: String,
    pub file_name: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub entries: u32,
    pub total_bytes: u64,
    pub hits: u64,
    pub misses: u64,
}

impl AudioCache {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })
    }

    /// Cache key for a (voice, preprocessed text) pair.
    pub fn key_for(&self, voice: &str, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(voice.as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{AUDIO_EXT}"))
    }

    /// Look a key up, counting the hit or miss.
    pub fn lookup(&self, key: &str) -> std::io::Result<Option<CachedAudio>> {
        let path = self.path_for(key);
        match fs::metadata(&path) {
            Ok(meta) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(entry(key, &path, meta.len())))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn store(&self, key: &str, audio: &[u8]) -> std::io::Result<CachedAudio> {
        let path = self.path_for(key);
        fs::write(&path, audio)?;
        Ok(entry(key, &path, audio.len() as u64))
    }

    pub fn stats(&self) -> std::io::Result<CacheStats> {
        let mut entries = 0u32;
        let mut total_bytes = 0u64;
        for dirent in fs::read_dir(&self.dir)? {
            let dirent = dirent?;
            let path = dirent.path();
            if path.extension().and_then(|e| e.to_str()) == Some(AUDIO_EXT) {
                entries += 1;
                total_bytes += dirent.metadata()?.len();
            }
        }
        Ok(CacheStats {
            entries,
            total_bytes,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        })
    }

    /// Remove every cached clip. Returns the number removed.
    pub fn clear(&self) -> std::io::Result<u32> {
        let mut removed = 0u32;
        for dirent in fs::read_dir(&self.dir)? {
            let path = dirent?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(AUDIO_EXT) {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

fn entry(key: &str, path: &Path, bytes: u64) -> CachedAudio {
    CachedAudio {
        key: key.to_string(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        bytes,
    }
}
