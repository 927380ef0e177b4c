use crate::{fetcher::Fetcher, SummaryPipeline, Summarizer};

pub struct SummaryPipelineBuilder<F = (), S = ()> {
    fetcher: F,
    summarizer: S,
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            fetcher: (),
            summarizer: (),
        }
    }
}

impl<F, S> SummaryPipelineBuilder<F, S> {
    pub fn fetcher<F2: Fetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> SummaryPipelineBuilder<F2, S> {
        SummaryPipelineBuilder {
            fetcher,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryPipelineBuilder<F, S2> {
        SummaryPipelineBuilder {
            fetcher: self.fetcher,
            summarizer,
        }
    }
}

impl<F, S> SummaryPipelineBuilder<F, S>
where
    F: Fetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<F, S> {
        SummaryPipeline::new(self.fetcher, self.summarizer)
    }
}
