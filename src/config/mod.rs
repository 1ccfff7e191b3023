pub mod cli;
pub mod search;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command, SearchArgs, SubsidyArgs};

#[cfg(feature = "cli")]
mod args {
    use super::search::{SearchConfig, SubsidyConfig, DEFAULT_OUTPUT_PATH};
    use super::toml_config::ReportConfig;
    use crate::domain::ports::SortOrder;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "aid-report")]
    #[command(about = "Search international-aid projects and write contribution reports")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Command,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON lines")]
        pub log_json: bool,

        #[arg(long, global = true, help = "Log memory and timing per phase")]
        pub monitor: bool,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Merge project sources, filter them and write the search report.
        Search(SearchArgs),
        /// Summarise the tabular subsidy program.
        Subsidies(SubsidyArgs),
    }

    #[derive(Debug, Clone, clap::Args)]
    pub struct SearchArgs {
        /// Project source file (.xml or .json); repeat to merge several.
        #[arg(long = "source")]
        pub sources: Vec<String>,

        #[arg(long)]
        pub keyword: Option<String>,

        /// Country used for contribution shares and country filtering.
        #[arg(long)]
        pub country: Option<String>,

        /// Keep projects with no disbursed money.
        #[arg(long)]
        pub include_zero: bool,

        #[arg(long, value_enum)]
        pub sort: Option<SortOrder>,

        #[arg(long)]
        pub output: Option<String>,

        /// Output sub-directory; defaults to the keyword and country.
        #[arg(long)]
        pub name: Option<String>,

        #[arg(long, value_delimiter = ',')]
        pub formats: Vec<String>,

        /// TOML report config; command line flags take precedence.
        #[arg(long, short)]
        pub config: Option<String>,
    }

    impl SearchArgs {
        /// 合併設定檔與命令列參數
        pub fn resolve(&self) -> Result<SearchConfig> {
            let mut config = match &self.config {
                Some(path) => {
                    let file = ReportConfig::from_file(path)?;
                    file.validate()?;
                    SearchConfig::from(file)
                }
                None => SearchConfig::default(),
            };

            if !self.sources.is_empty() {
                config.sources = self.sources.clone();
            }
            if let Some(keyword) = &self.keyword {
                config.keyword = keyword.clone();
            }
            if let Some(country) = &self.country {
                config.country = country.clone();
            }
            if self.include_zero {
                config.include_zero = true;
            }
            if let Some(sort) = self.sort {
                config.sort = sort;
            }
            if let Some(output) = &self.output {
                config.output_path = output.clone();
            }
            if self.name.is_some() {
                config.name = self.name.clone();
            }
            if !self.formats.is_empty() {
                config.formats = self.formats.clone();
            }

            Ok(config)
        }
    }

    #[derive(Debug, Clone, clap::Args)]
    pub struct SubsidyArgs {
        /// CSV file of the subsidy program.
        #[arg(long)]
        pub input: String,

        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        pub output: String,
    }

    impl From<SubsidyArgs> for SubsidyConfig {
        fn from(args: SubsidyArgs) -> Self {
            Self {
                input: args.input,
                output_path: args.output,
            }
        }
    }

}
