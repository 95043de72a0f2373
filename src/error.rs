use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("element `{0}` is not mounted")]
    MissingElement(&'static str),
    #[error("invalid site config: {0}")]
    Config(String),
    #[error("default page `{0}` is not a registered page id")]
    UnknownDefaultPage(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SiteError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Config(err.to_string())
    }
}
