//! Stage-2 template renderers.

mod hbs;

pub use hbs::HandlebarsRenderer;
