//! Response Assembly
//!
//! Pure rendering of advisor replies and the mock citations that accompany
//! them.

mod citation;
mod template;

pub use citation::citations;
pub use template::ResponseTemplate;
