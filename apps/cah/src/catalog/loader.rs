//! JSON pack files.
//!
//! A pack file looks like `{"name": "...", "black": [...], "white": [...]}`.
//! Each card is either a plain string or `{"text": "...", "pick": n}`; only
//! the text is kept. `name` is optional and defaults to the file stem.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::Pack;
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid pack {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no pack files in {dir}")]
    Empty { dir: PathBuf },
}

impl CatalogError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Io { .. } => ErrorCode::PackIo,
            CatalogError::Parse { .. } => ErrorCode::PackParse,
            CatalogError::Empty { .. } => ErrorCode::EmptyCatalog,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CardData {
    Raw(String),
    Full { text: String },
}

impl CardData {
    fn into_text(self) -> String {
        match self {
            CardData::Raw(text) | CardData::Full { text } => text,
        }
    }
}

#[derive(Deserialize)]
struct PackFile {
    name: Option<String>,
    #[serde(default)]
    black: Vec<CardData>,
    #[serde(default)]
    white: Vec<CardData>,
}

/// Parse pack JSON, naming the pack `fallback_name` if the file has no name.
pub fn parse_pack(fallback_name: &str, json: &str) -> Result<Pack, serde_json::Error> {
    let file: PackFile = serde_json::from_str(json)?;
    Ok(Pack::new(
        file.name.unwrap_or_else(|| fallback_name.to_string()),
        file.white.into_iter().map(CardData::into_text),
        file.black.into_iter().map(CardData::into_text),
    ))
}

pub fn load_pack(path: &Path) -> Result<Pack, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_pack(&stem, &json).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `*.json` pack in `dir`, ordered by file name.
pub fn load_catalog(dir: &Path) -> Result<Vec<Pack>, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(CatalogError::Empty {
            dir: dir.to_path_buf(),
        });
    }

    let packs = paths
        .iter()
        .map(|p| load_pack(p))
        .collect::<Result<Vec<_>, _>>()?;
    info!(dir = %dir.display(), packs = packs.len(), "pack catalog loaded");
    Ok(packs)
}

/// Best-effort load of the optional bonus pack.
///
/// A missing path, unreadable file or malformed JSON all yield `None`.
pub fn load_bonus_pack(path: Option<&Path>) -> Option<Pack> {
    let path = path?;
    match load_pack(path) {
        Ok(pack) => {
            info!(pack = %pack.name, "bonus pack available");
            Some(pack)
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "bonus pack unavailable");
            None
        }
    }
}
