//! `vidlyctl`: browse and manage the Vidly rental catalog from a terminal.

mod backend;
mod cli;
mod output;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidly_config::{Config, ConfigLoader};
use vidly_core::{
    MoviesView,
    catalog::{GenreService, MovieService, with_all_genres},
    query::{SearchMode, ViewStateBuilder},
};
use vidly_model::{Genre, MovieID};

use backend::Backend;
use cli::{Cli, Command, MoviesArgs};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let backend = Backend::connect(&config, cli.fixture.as_deref())?;

    match cli.command {
        Command::Movies(args) => list_movies(&backend, &config, args).await,
        Command::Genres => list_genres(&backend).await,
        Command::Movie { id } => show_movie(&backend, &id).await,
        Command::Delete { id } => delete_movie(&backend, &id).await,
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    let load = loader.load().context("failed to load configuration")?;
    load.warnings.log();

    let mut config = load.config;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    debug!(source = ?config.metadata.source, base_url = %config.api.base_url, "configuration ready");
    Ok(config)
}

async fn list_movies(
    backend: &Backend,
    config: &Config,
    args: MoviesArgs,
) -> Result<()> {
    let catalog = backend.catalog();
    let genres = catalog.fetch_genres().await.context("failed to fetch genres")?;
    let movies = catalog.fetch_movies().await.context("failed to fetch movies")?;

    let initial = config.list.view_state()?;
    let mode = if args.pattern {
        SearchMode::Pattern
    } else {
        initial.search_mode
    };
    let default_sort = initial.sort;

    let mut builder = ViewStateBuilder::from_state(initial).page(args.page);
    if let Some(size) = args.page_size {
        builder = builder.page_size(size);
    }
    if let Some(search) = args.search {
        builder = match mode {
            SearchMode::Literal => builder.search(search),
            SearchMode::Pattern => builder.search_pattern(search),
        };
    }
    if let Some(raw) = &args.genre {
        builder = builder.genre_of(&resolve_genre(&genres, raw)?);
    }

    let order = args.order.map(Into::into).unwrap_or(default_sort.order);
    builder = match &args.sort {
        Some(path) => builder.sort_by_path(path, order)?,
        None => builder.sort_by(default_sort.field, order),
    };

    let view = MoviesView::with_snapshot(builder.build()?, genres, movies);
    let page = view.paged_data()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{}", view.headline(page.total_count));
    if !page.is_empty() {
        print!("{}", output::movie_table(&page, &view.state().sort));
    }
    let footer = output::page_footer(
        view.state().effective_page(),
        page.total_count,
        view.state().page_size,
    );
    if !footer.is_empty() {
        println!("{footer}");
    }
    Ok(())
}

/// Match a genre by id, or by name ignoring case.
fn resolve_genre(genres: &[Genre], raw: &str) -> Result<Genre> {
    let wanted = raw.trim();
    with_all_genres(genres.to_vec())
        .into_iter()
        .find(|genre| {
            genre.id.as_str() == wanted || genre.name.eq_ignore_ascii_case(wanted)
        })
        .with_context(|| format!("unknown genre '{wanted}'"))
}

async fn list_genres(backend: &Backend) -> Result<()> {
    let genres = backend
        .catalog()
        .fetch_genres()
        .await
        .context("failed to fetch genres")?;
    println!("{}", output::genre_list(&with_all_genres(genres)));
    Ok(())
}

async fn show_movie(backend: &Backend, raw_id: &str) -> Result<()> {
    let id = MovieID::new(raw_id)?;
    let movie = backend
        .catalog()
        .fetch_movie(&id)
        .await
        .with_context(|| format!("failed to fetch movie {id}"))?;
    print!("{}", output::movie_details(&movie));
    Ok(())
}

async fn delete_movie(backend: &Backend, raw_id: &str) -> Result<()> {
    let id = MovieID::new(raw_id)?;
    let catalog = backend.catalog();

    let mut view = MoviesView::default();
    view.load(catalog).await.context("failed to load catalog")?;

    let Some(movie) = view
        .delete(catalog, &id)
        .await
        .with_context(|| format!("failed to delete movie {id}"))?
    else {
        bail!("movie {id} not found");
    };

    backend.persist()?;
    info!(movie = %id, "deleted");
    println!("Deleted \"{}\"", movie.title);
    Ok(())
}
