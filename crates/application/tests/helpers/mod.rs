#![allow(unused_imports)]

pub mod mock_resolvers;

pub use mock_resolvers::{CollectingSink, LookupCall, MockResolverFactory};
