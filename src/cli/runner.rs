//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PagerConfig;
use crate::error::Result;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::pagination::{Navigation, PagerController};
use crate::render::{CardLimits, PageView};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

/// A line of input in browse mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Quit,
    Help,
}

impl BrowseCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Prev),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => Some(Self::Help),
        }
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!("Effective config: {:?}", config);

        match &self.cli.command {
            Commands::Show => self.show(&config).await,
            Commands::Browse => self.browse(&config).await,
            Commands::Config => {
                print!("{}", config.to_redacted_yaml()?);
                Ok(())
            }
        }
    }

    /// Layer config file, CLI flags and environment
    pub fn resolve_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PagerConfig::load(path)?,
            None => PagerConfig::default(),
        };

        if let Some(provider) = self.cli.provider {
            config.provider = provider;
        }
        if let Some(country) = &self.cli.country {
            config.country.clone_from(country);
        }
        if let Some(category) = &self.cli.category {
            config.category.clone_from(category);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(api_key) = &self.cli.api_key {
            config.api_key = Some(api_key.clone());
        }

        let config = config.with_env();
        config.validate()?;
        Ok(config)
    }

    async fn show(&self, config: &PagerConfig) -> Result<()> {
        let mut pager = PagerController::new(HttpFetcher::from_config(config)?, config.page_size);
        pager.mount().await;

        let view = PageView::from_state(pager.state(), CardLimits::from(config));
        let mut stdout = std::io::stdout().lock();
        emit(&mut stdout, &view, self.cli.format)?;

        pager.unmount();
        Ok(())
    }

    async fn browse(&self, config: &PagerConfig) -> Result<()> {
        let mut pager = PagerController::new(HttpFetcher::from_config(config)?, config.page_size);
        let input = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();

        browse_session(
            &mut pager,
            CardLimits::from(config),
            self.cli.format,
            input,
            &mut stdout,
        )
        .await
    }
}

/// Drive an interactive session: mount, then one navigation per input line
pub async fn browse_session<F, R, W>(
    pager: &mut PagerController<F>,
    limits: CardLimits,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<()>
where
    F: Fetcher,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pager.mount().await;
    emit(out, &PageView::from_state(pager.state(), limits), format)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = BrowseCommand::parse(&line) else {
            continue;
        };

        let outcome = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                if format == OutputFormat::Pretty {
                    writeln!(out, "Commands: n (next), p (previous), q (quit)")?;
                }
                continue;
            }
            BrowseCommand::Next => pager.next().await,
            BrowseCommand::Prev => pager.prev().await,
        };

        if outcome == Navigation::Rejected {
            if format == OutputFormat::Pretty {
                let direction = if command == BrowseCommand::Next {
                    "next"
                } else {
                    "previous"
                };
                writeln!(out, "No {direction} page.")?;
            }
            continue;
        }

        emit(out, &PageView::from_state(pager.state(), limits), format)?;
    }

    pager.unmount();
    Ok(())
}

/// Write one view in the requested format
pub fn emit<W: Write>(out: &mut W, view: &PageView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", view.to_json()?)?,
        OutputFormat::Pretty => write!(out, "{}", view.to_text())?,
    }
    out.flush()?;
    Ok(())
}
