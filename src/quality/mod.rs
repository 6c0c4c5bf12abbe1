//! Quality module - Big-O notation classification and display styling

pub mod classifier;
pub mod style;

pub use classifier::{classify, classify_traced, exact_quality, heuristic_quality, KNOWN_NOTATIONS};
pub use style::{complexity_class, display_class, label, style_for, terminal_color, text_class};
