const GITHUB_SHA: Option<&'static str> = option_env!("GITHUB_SHA");
const GFYCAT_VERSION: Option<&'static str> = option_env!("GFYCAT_VERSION");

pub fn version() -> String {
  GFYCAT_VERSION
    .or(GITHUB_SHA)
    .unwrap_or(env!("CARGO_PKG_VERSION"))
    .to_string()
}
