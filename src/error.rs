use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecorError>;

#[derive(Debug, Error)]
pub enum DecorError {
    #[error("browser global `{0}` is not available")]
    MissingGlobal(&'static str),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("{0} context is not supported")]
    Unsupported(&'static str),

    #[error("failed to create {0}")]
    Create(&'static str),

    #[error("failed to compile shader: {0}")]
    Compile(String),

    #[error("failed to link program: {0}")]
    Link(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("javascript exception: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DecorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DecorError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<DecorError> for wasm_bindgen::JsValue {
    fn from(err: DecorError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
