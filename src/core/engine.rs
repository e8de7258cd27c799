use crate::core::checker::first_inversion;
use crate::core::{CheckReport, InputSource, Reporter};
use crate::utils::error::Result;

pub const SIZE_PROMPT: &str = "Enter the size of the array";
pub const VALUES_PROMPT: &str = "Enter the values to fill array";

pub struct CheckEngine<S: InputSource, R: Reporter> {
    source: S,
    reporter: R,
}

impl<S: InputSource, R: Reporter> CheckEngine<S, R> {
    pub fn new(source: S, reporter: R) -> Self {
        Self { source, reporter }
    }

    pub async fn run(&mut self) -> Result<CheckReport> {
        tracing::debug!("Reading array size");
        self.reporter.prompt(SIZE_PROMPT).await?;
        let size = self.source.read_size().await?;

        tracing::debug!("Reading {} values", size);
        self.reporter.prompt(VALUES_PROMPT).await?;
        let input = self.source.read_values(size).await?;

        let inversion = first_inversion(&input.values);
        let report = CheckReport::new(input.size(), inversion);
        match inversion {
            Some(i) => tracing::debug!(
                "Inversion at index {}: {} > {}",
                i,
                input.values[i],
                input.values[i + 1]
            ),
            None => tracing::debug!("No adjacent inversion in {} values", input.size()),
        }

        self.reporter.report(&report).await?;
        tracing::info!("Checked {} values: {:?}", report.size, report.verdict());

        Ok(report)
    }

    pub fn into_parts(self) -> (S, R) {
        (self.source, self.reporter)
    }
}
