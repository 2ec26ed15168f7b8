//! Resume → LaTeX → PDF pipeline.
//!
//! Escaping and bullet splitting feed the section renderers, the assembler composes sections
//! inside a fixed template, and the compiler turns the markup into PDF bytes.

pub mod assembler;
pub mod bullets;
pub mod compiler;
pub mod escape;
pub mod sections;
pub mod template;

pub use assembler::assemble;
pub use compiler::{compile, CompileError, CompilerConfig};
pub use template::TemplateId;
