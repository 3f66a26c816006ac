use crate::ports::{PtrResolver, ResolverFactory};
use ferrous_ptr_domain::{LookupConfig, ResolverEndpoint};

pub struct ResolverSetBuilder;

impl ResolverSetBuilder {
    /// Derives the ordered endpoint list for a run.
    ///
    /// A single resolver wins over a list. A list yields one endpoint per
    /// comma-separated entry. With neither set the platform resolver is
    /// used and the port and protocol settings are ignored. The result is
    /// never empty.
    pub fn endpoints(config: &LookupConfig) -> Vec<ResolverEndpoint> {
        let mut endpoints = Vec::new();
        let mut fallback = ResolverEndpoint::System;

        if let Some(ip) = config.single_resolver() {
            fallback = ResolverEndpoint::custom(ip.trim(), config.port, config.protocol);
        } else if let Some(list) = config.resolver_list() {
            endpoints.extend(
                list.split(',')
                    .map(|entry| ResolverEndpoint::custom(entry.trim(), config.port, config.protocol)),
            );
        }

        if endpoints.is_empty() {
            endpoints.push(fallback);
        }

        endpoints
    }

    pub fn build(config: &LookupConfig, factory: &dyn ResolverFactory) -> ResolverSet {
        let resolvers = Self::endpoints(config)
            .iter()
            .map(|endpoint| factory.create(endpoint))
            .collect();

        ResolverSet { resolvers }
    }
}

/// Resolvers owned by one worker, queried in order for every address.
pub struct ResolverSet {
    resolvers: Vec<Box<dyn PtrResolver>>,
}

impl ResolverSet {
    pub fn iter(&self) -> impl Iterator<Item = &dyn PtrResolver> {
        self.resolvers.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }
}
