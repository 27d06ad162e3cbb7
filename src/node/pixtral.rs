//! The vision-chat node.

use bon::Builder;
use tracing::{debug, error, info};

use crate::config::BridgeConfig;
use crate::error::{PixtralError, Result};
use crate::generation::describe_images;
use crate::image::RawImage;
use crate::provider::{ChatProvider, MistralProvider};
use crate::types::{GenerationSettings, DEFAULT_MODEL, DEFAULT_PROMPT};

/// Inputs of one node invocation.
#[derive(Debug, Clone, Builder)]
pub struct PixtralInputs {
    #[builder(into, default = DEFAULT_MODEL.to_string())]
    pub model_name: String,
    #[builder(into, default = DEFAULT_PROMPT.to_string())]
    pub prompt: String,
    #[builder(default)]
    pub images: Vec<RawImage>,
    #[builder(into)]
    pub api_key: String,
    #[builder(default)]
    pub settings: GenerationSettings,
}

/// Sends images and a prompt to Pixtral and returns text, never an error.
#[derive(Debug, Clone, Default)]
pub struct PixtralNode {
    config: BridgeConfig,
}

impl PixtralNode {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Run the node against the configured Mistral endpoint.
    pub async fn process(&self, inputs: &PixtralInputs) -> String {
        let provider = MistralProvider::from_config(inputs.api_key.clone(), &self.config);
        self.process_with(&provider, inputs).await
    }

    /// Run the node against an arbitrary provider.
    pub async fn process_with(&self, provider: &dyn ChatProvider, inputs: &PixtralInputs) -> String {
        let result = describe_images(
            provider,
            &inputs.model_name,
            &inputs.prompt,
            &inputs.images,
            &inputs.settings,
        )
        .await;
        display_result(result)
    }

    /// Blocking variant for synchronous hosts.
    ///
    /// Safe to call from inside an async runtime: the call is then driven
    /// on a scoped worker thread, and the calling thread blocks until it
    /// finishes.
    pub fn process_blocking(&self, inputs: &PixtralInputs) -> String {
        if tokio::runtime::Handle::try_current().is_err() {
            return self.run_to_completion(inputs);
        }

        debug!("process_blocking called inside a runtime, using a worker thread");
        std::thread::scope(|scope| scope.spawn(|| self.run_to_completion(inputs)).join())
            .unwrap_or_else(|_| {
                display_result(Err(PixtralError::Io(std::io::Error::other(
                    "blocking worker thread panicked",
                ))))
            })
    }

    fn run_to_completion(&self, inputs: &PixtralInputs) -> String {
        match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime.block_on(self.process(inputs)),
            Err(e) => display_result(Err(PixtralError::Io(e))),
        }
    }
}

/// Flatten a result into the string the host displays.
pub fn display_result(result: Result<String>) -> String {
    match result {
        Ok(text) => {
            info!("Received successful response from Mistral API");
            text
        }
        Err(PixtralError::Api { status, body }) => {
            let message = format!("API Error: {status}, {body}");
            error!("{message}");
            message
        }
        Err(err) => {
            let message = format!("Error in process method: {err}");
            error!(category = ?err.category(), "{message}");
            message
        }
    }
}
