//! # tagsmith
//!
//! Build HTML documents with ordinary method calls and render them as
//! readably indented text.
//!
//! A document is a tree of [`Element`](markup::Element)s. Children are created
//! with `child`, attributes with `attr`, and raw text with `append`. Rendering
//! walks the tree once, substituting `${name}` placeholders from a
//! [`Namespace`](markup::Namespace) supplied at render time.
//!
//! ```text
//! let mut doc = Element::root();
//! doc.child("html").child("body").child("p").append("Hello ${name}!");
//! let html = doc.render(&Namespace::from_pairs([("name", "Clio")]))?;
//! ```
//!
//! renders as
//!
//! ```text
//! <html>
//!   <body>
//!     <p>Hello Clio!</p>
//!   </body>
//! </html>
//! ```

pub mod markup;

pub use markup::{Content, Element, Namespace, RenderError, RenderOptions, Renderer};
