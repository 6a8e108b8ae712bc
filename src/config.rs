use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IMAGE_ROOT: &str = "images";

/// Runtime configuration, read from the environment.
///
/// The MongoDB connection string is never compiled in; it must arrive via
/// `MONGODB_URI`. When that variable is unset the server runs on the
/// in-memory backing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongodb_uri: Option<String>,
    pub image_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let mongodb_uri = env::var("MONGODB_URI").ok().filter(|uri| !uri.is_empty());
        let image_root = env::var("CARDKEEP_IMAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_IMAGE_ROOT));
        Self {
            port,
            mongodb_uri,
            image_root,
        }
    }
}
