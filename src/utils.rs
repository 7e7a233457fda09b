use crate::error::{Error, Result};
use cosmic_text::{FontSystem, fontdb};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Locale handed to the shaper. The font database only ever holds the
/// requested file, so this only affects line-breaking rules.
const SHAPING_LOCALE: &str = "ja-JP";

/// A font file loaded into its own, otherwise empty, font system.
pub struct LoadedFont {
    pub font_system: FontSystem,
    /// Family name of the first face in the file.
    pub family: String,
}

/// Loads a single font file. System fonts are never consulted, so output only
/// depends on the file given.
pub fn load_font(path: &Path) -> Result<LoadedFont> {
    let data = fs::read(path).map_err(|e| Error::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut db = fontdb::Database::new();
    db.load_font_data(data);

    let family = db
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| Error::FontLoad {
            path: path.to_path_buf(),
            reason: "no usable font face in file".to_owned(),
        })?;

    Ok(LoadedFont {
        font_system: FontSystem::new_with_locale_and_db(SHAPING_LOCALE.to_owned(), db),
        family,
    })
}

/// Calculates the SHA256 hash of a file.
pub fn calculate_hash(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; 8192]; // 8KB buffer
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
