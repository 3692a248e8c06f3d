pub mod builder;
pub mod compiler;
pub mod error;
pub mod rules;

pub use builder::Builder;
pub use compiler::compile;
pub use rules::{
    PropertyRule,
    PropertyRules,
};
