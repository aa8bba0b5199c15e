//! Runner wiring the registry session to the search pipeline

use tracing::info;

use crate::cli::args::Args;
use crate::error::Result;
use crate::output;
use crate::registry::EcrClient;
use crate::search::{SearchRequest, TagSearch};

pub struct Runner {
    args: Args,
    request: SearchRequest,
}

impl Runner {
    pub fn new(args: Args) -> Result<Self> {
        args.validate()?;
        let request = SearchRequest::new(args.image.clone(), &args.regex, args.all)?;
        Ok(Self { args, request })
    }

    pub async fn run(&self) -> Result<()> {
        info!(
            repository = %self.request.repository,
            pattern = %self.args.regex,
            region = %self.args.region,
            "searching repository"
        );

        let client = EcrClient::connect(&self.args.region).await;
        let search = TagSearch::new(&client, &self.request);
        let results = search.run().await?;

        match self.args.output.as_str() {
            "json" => println!("{}", output::render_json(&results)?),
            _ => print!("{}", output::render_table(&self.request.repository, &results)),
        }

        Ok(())
    }
}
