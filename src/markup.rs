//! Markup tree construction and rendering

pub mod config;
pub mod element;
pub mod error;
pub mod render;
pub mod template;

pub use self::config::{Loader, RenderOptions};
pub use element::{Content, Element};
pub use error::{RenderError, TemplateError};
pub use render::Renderer;
pub use template::Namespace;
