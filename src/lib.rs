//! Pixtral bridge: image tensors in, vision-model text out.
//!
//! Normalizes raw float image tensors (any of (H, W), (H, W, C) or (C, H, W)
//! with 1, 3 or 4 channels) into JPEG data URIs, composes optional image
//! slots into ordered batches, and sends prompt + images to the Mistral
//! chat-completions API.
//!
//! # Quick Start
//!
//! ```no_run
//! use pixtral_bridge::prelude::*;
//!
//! # async fn example() {
//! let inputs = PixtralInputs::builder()
//!     .prompt("What is in this picture?")
//!     .images(vec![RawImage::filled(&[64, 64, 3], 0.5)])
//!     .api_key("sk-...")
//!     .build();
//! let text = PixtralNode::default().process(&inputs).await;
//! println!("{text}");
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod generation;
pub mod image;
pub mod node;
pub mod prelude;
pub mod provider;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
