#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_ptr_application::ports::{PtrResolver, ResolverFactory, ResultSink};
use ferrous_ptr_domain::{DomainError, ResolverEndpoint};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCall {
    pub endpoint: String,
    pub address: String,
}

#[derive(Default)]
struct FactoryState {
    answers: HashMap<(String, String), Vec<String>>,
    failing_endpoints: Vec<String>,
    calls: Vec<LookupCall>,
}

/// Resolver factory whose resolvers answer from a table keyed by
/// `(endpoint, address)`. Unknown keys resolve to no names.
#[derive(Clone, Default)]
pub struct MockResolverFactory {
    state: Arc<Mutex<FactoryState>>,
    created: Arc<AtomicUsize>,
    active: Arc<AtomicUsize>,
    max_active: Arc<AtomicUsize>,
    latency: Option<Duration>,
}

impl MockResolverFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn set_answer(&self, endpoint: &str, address: &str, names: &[&str]) {
        self.state.lock().unwrap().answers.insert(
            (endpoint.to_string(), address.to_string()),
            names.iter().map(|n| n.to_string()).collect(),
        );
    }

    pub fn fail_endpoint(&self, endpoint: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_endpoints
            .push(endpoint.to_string());
    }

    pub fn calls(&self) -> Vec<LookupCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

impl ResolverFactory for MockResolverFactory {
    fn create(&self, endpoint: &ResolverEndpoint) -> Box<dyn PtrResolver> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Box::new(MockPtrResolver {
            endpoint: endpoint.clone(),
            factory: self.clone(),
        })
    }
}

struct MockPtrResolver {
    endpoint: ResolverEndpoint,
    factory: MockResolverFactory,
}

#[async_trait]
impl PtrResolver for MockPtrResolver {
    async fn lookup_addr(&self, address: &str) -> Result<Vec<String>, DomainError> {
        let now_active = self.factory.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.factory
            .max_active
            .fetch_max(now_active, Ordering::SeqCst);

        if let Some(latency) = self.factory.latency {
            tokio::time::sleep(latency).await;
        }

        let key = (self.endpoint.to_string(), address.to_string());
        let result = {
            let mut state = self.factory.state.lock().unwrap();
            state.calls.push(LookupCall {
                endpoint: key.0.clone(),
                address: key.1.clone(),
            });

            if state.failing_endpoints.contains(&key.0) {
                Err(DomainError::TransportConnectionRefused { server: key.0 })
            } else {
                Ok(state.answers.get(&key).cloned().unwrap_or_default())
            }
        };

        self.factory.active.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn endpoint(&self) -> &ResolverEndpoint {
        &self.endpoint
    }
}

#[derive(Clone, Default)]
pub struct CollectingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ResultSink for CollectingSink {
    fn emit(&self, line: &str) -> Result<(), DomainError> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
