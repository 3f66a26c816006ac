use ferrous_ptr_application::ports::{ResolverFactory, ResultSink};
use ferrous_ptr_application::use_cases::BulkPtrLookupUseCase;
use ferrous_ptr_domain::LookupConfig;
use ferrous_ptr_infrastructure::dns::NetworkResolverFactory;
use ferrous_ptr_infrastructure::output::LineSink;
use std::sync::Arc;

pub fn build_lookup_use_case(config: Arc<LookupConfig>) -> BulkPtrLookupUseCase {
    let resolver_factory: Arc<dyn ResolverFactory> =
        Arc::new(NetworkResolverFactory::new(config.query_timeout));
    let sink: Arc<dyn ResultSink> = Arc::new(LineSink::stdout());

    BulkPtrLookupUseCase::new(config, resolver_factory, sink)
}
