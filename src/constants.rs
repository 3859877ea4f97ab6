pub const DEFAULT_ASSETS_URL: &'static str = "https://assets.gfycat.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const CACHE_DIR_NAME: &'static str = ".gfycat";

pub const ADJECTIVES_FILE: &'static str = "adjectives.txt";
pub const ANIMALS_FILE: &'static str = "animals.txt";

pub const ASSETS_URL_ENV: &'static str = "GFYCAT_ASSETS_URL";
pub const CACHE_DIR_ENV: &'static str = "GFYCAT_CACHE_DIR";
pub const TIMEOUT_ENV: &'static str = "GFYCAT_TIMEOUT";
