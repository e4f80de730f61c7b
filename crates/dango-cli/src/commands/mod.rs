pub mod rules_ops;
pub mod tokenize_ops;
