pub mod resolver_set;

pub use resolver_set::{ResolverSet, ResolverSetBuilder};
