use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vidly_core::query::SortOrder;

#[derive(Debug, Parser)]
#[command(name = "vidlyctl", about = "Browse and manage the Vidly rental catalog", version)]
pub struct Cli {
    /// Config file (TOML or JSON); overrides VIDLY_CONFIG_PATH
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Serve the catalog from a JSON fixture instead of the API
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Catalog server root, e.g. http://localhost:3900
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List one page of movies
    Movies(MoviesArgs),
    /// List genres, "All Genres" first
    Genres,
    /// Show a single movie
    Movie {
        /// Movie id
        id: String,
    },
    /// Delete a movie
    Delete {
        /// Movie id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct MoviesArgs {
    /// Case-insensitive title search
    #[arg(long, short)]
    pub search: Option<String>,

    /// Treat --search as a regular expression
    #[arg(long, requires = "search")]
    pub pattern: bool,

    /// Genre id or name
    #[arg(long, short)]
    pub genre: Option<String>,

    /// Sort column: title, genre.name, numberInStock, dailyRentalRate, liked
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// 1-based page number
    #[arg(long, short, default_value_t = 1)]
    pub page: usize,

    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}
