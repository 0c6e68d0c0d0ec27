use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin, catch)]
    fn register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ScrollSmoother, js_name = create, catch)]
    fn create_smoother(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn init_aos(options: JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, Error)]
pub enum SubsystemError {
    #[error("{0} is not loaded on the page")]
    Missing(&'static str),
    #[error("could not encode {name} options: {source}")]
    Config {
        name: &'static str,
        #[source]
        source: serde_wasm_bindgen::Error,
    },
    #[error("{name} failed to start: {message}")]
    Init { name: &'static str, message: String },
}

impl SubsystemError {
    fn from_js(name: &'static str, err: JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        SubsystemError::Init { name, message }
    }
}

/// A third-party animation library that needs a single start-up call.
/// Options are fixed when the value is built; nothing is called after `init`.
pub trait AnimationSubsystem {
    fn name(&self) -> &'static str;
    fn init(&self) -> Result<(), SubsystemError>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmootherConfig {
    pub wrapper: String,
    pub content: String,
    pub smooth: f64,
    pub effects: bool,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            wrapper: format!("#{}", config::SMOOTH_WRAPPER_ID),
            content: format!("#{}", config::SMOOTH_CONTENT_ID),
            smooth: config::SMOOTHING,
            effects: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: config::REVEAL_DURATION_MS,
            easing: config::REVEAL_EASING,
            once: true,
            offset: config::REVEAL_OFFSET_PX,
        }
    }
}

fn encode<T: Serialize>(name: &'static str, options: &T) -> Result<JsValue, SubsystemError> {
    serde_wasm_bindgen::to_value(options).map_err(|source| SubsystemError::Config { name, source })
}

fn global(name: &'static str) -> Result<JsValue, SubsystemError> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(SubsystemError::Missing(name))
}

/// GSAP ScrollSmoother over the page's smooth wrapper/content pair.
pub struct ScrollSmoother {
    config: SmootherConfig,
}

impl ScrollSmoother {
    pub fn new(config: SmootherConfig) -> Self {
        Self { config }
    }
}

impl AnimationSubsystem for ScrollSmoother {
    fn name(&self) -> &'static str {
        "ScrollSmoother"
    }

    fn init(&self) -> Result<(), SubsystemError> {
        for plugin in ["ScrollTrigger", "ScrollSmoother"] {
            let plugin = global(plugin)?;
            register_plugin(&plugin).map_err(|err| SubsystemError::from_js("gsap", err))?;
        }
        let options = encode(self.name(), &self.config)?;
        create_smoother(options)
            .map(|_| ())
            .map_err(|err| SubsystemError::from_js(self.name(), err))
    }
}

/// AOS fade-in-on-scroll reveals for elements carrying `data-aos`.
pub struct RevealOnScroll {
    config: RevealConfig,
}

impl RevealOnScroll {
    pub const NAME: &'static str = "AOS";

    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }
}

impl AnimationSubsystem for RevealOnScroll {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&self) -> Result<(), SubsystemError> {
        global(self.name())?;
        let options = encode(self.name(), &self.config)?;
        init_aos(options).map_err(|err| SubsystemError::from_js(self.name(), err))
    }
}
