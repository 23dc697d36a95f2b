use super::copyright_fetcher::CopyrightFetcher;
use crate::license_report::domain::{DependencyStub, EnrichedDependency};
use crate::license_report::services::DependencyIndex;
use crate::ports::outbound::{CopyrightRepository, ProgressReporter};
use futures::stream::{self, StreamExt};

/// Default cap on concurrent copyright lookups per license
pub const DEFAULT_COPYRIGHT_CONCURRENCY: usize = 10;

/// DependencyEnricher - joins dependency stubs with feed metadata
///
/// Optionally attaches copyright attributions to every stub first. Lookups
/// run concurrently up to the configured cap and are reassembled in input
/// order before the join.
pub struct DependencyEnricher<'a, CR, PR> {
    copyright_fetcher: CopyrightFetcher<'a, CR, PR>,
    concurrency: usize,
}

impl<'a, CR, PR> DependencyEnricher<'a, CR, PR>
where
    CR: CopyrightRepository,
    PR: ProgressReporter,
{
    pub fn new(copyright_fetcher: CopyrightFetcher<'a, CR, PR>, concurrency: usize) -> Self {
        Self {
            copyright_fetcher,
            concurrency: concurrency.max(1),
        }
    }

    /// Enriches dependencies, preserving input order
    ///
    /// A stub whose id has metadata is merged with the first metadata record
    /// only; a stub without metadata passes through unchanged.
    pub async fn enrich(
        &self,
        dependencies: Vec<DependencyStub>,
        index: &DependencyIndex,
        include_copyright: bool,
    ) -> Vec<EnrichedDependency> {
        let dependencies = if include_copyright {
            self.attach_copyright(dependencies).await
        } else {
            dependencies
        };

        dependencies
            .into_iter()
            .map(|stub| match index.first(&stub.id) {
                Some(metadata) => EnrichedDependency::merge(stub, metadata),
                None => EnrichedDependency::from_stub(stub),
            })
            .collect()
    }

    async fn attach_copyright(&self, dependencies: Vec<DependencyStub>) -> Vec<DependencyStub> {
        // `buffered` keeps output in input order regardless of completion order
        stream::iter(dependencies)
            .map(|mut dependency| async move {
                let copyright = self.copyright_fetcher.fetch_copyright(&dependency).await;
                dependency.copyright = Some(copyright);
                dependency
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
