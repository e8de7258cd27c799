use crate::domain::model::{CheckReport, InputSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait InputSource: Send {
    /// Reads the declared array size. Negative or oversized values are rejected here.
    fn read_size(&mut self) -> impl std::future::Future<Output = Result<usize>> + Send;

    fn read_values(
        &mut self,
        size: usize,
    ) -> impl std::future::Future<Output = Result<InputSpec>> + Send;

    /// Reads a size followed by that many values, without prompting in between.
    fn read_input(&mut self) -> impl std::future::Future<Output = Result<InputSpec>> + Send
    where
        Self: Sized,
    {
        async move {
            let size = self.read_size().await?;
            self.read_values(size).await
        }
    }
}

#[async_trait]
pub trait Reporter: Send {
    async fn prompt(&mut self, text: &str) -> Result<()>;
    async fn report(&mut self, report: &CheckReport) -> Result<()>;
}
