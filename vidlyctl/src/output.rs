use vidly_core::query::{
    MovieSortField, PageResult, SortOrder, SortSpec, page_count,
};
use vidly_model::{Genre, Movie};

const TITLE_WIDTH: usize = 28;
const GENRE_WIDTH: usize = 12;

/// Render one page as a table. The header marks the sorted column.
pub fn movie_table(page: &PageResult<Movie>, sort: &SortSpec) -> String {
    let mut out = format!(
        "{:<tw$} {:<gw$} {:>5} {:>6}  {}\n",
        header_cell(MovieSortField::Title, sort),
        header_cell(MovieSortField::GenreName, sort),
        header_cell(MovieSortField::NumberInStock, sort),
        header_cell(MovieSortField::DailyRentalRate, sort),
        header_cell(MovieSortField::Liked, sort),
        tw = TITLE_WIDTH,
        gw = GENRE_WIDTH,
    );
    for movie in &page.items {
        out.push_str(&movie_row(movie));
        out.push('\n');
    }
    out
}

fn header_cell(field: MovieSortField, sort: &SortSpec) -> String {
    if sort.field != field {
        return field.label().to_string();
    }
    let arrow = match sort.order {
        SortOrder::Ascending => '↑',
        SortOrder::Descending => '↓',
    };
    format!("{}{arrow}", field.label())
}

fn movie_row(movie: &Movie) -> String {
    format!(
        "{:<tw$} {:<gw$} {:>5} {:>6.2}  {}",
        truncate(&movie.title, TITLE_WIDTH),
        truncate(&movie.genre.name, GENRE_WIDTH),
        movie.number_in_stock,
        movie.daily_rental_rate,
        if movie.liked { "♥" } else { "♡" },
        tw = TITLE_WIDTH,
        gw = GENRE_WIDTH,
    )
}

pub fn movie_details(movie: &Movie) -> String {
    format!(
        "{}\n  id:     {}\n  genre:  {}\n  stock:  {}\n  rate:   {:.2}\n",
        movie.title,
        movie.id,
        movie.genre.name,
        movie.number_in_stock,
        movie.daily_rental_rate
    )
}

/// Footer such as `Page 2 of 3`, empty when there is only one page.
pub fn page_footer(page: usize, total_count: usize, page_size: usize) -> String {
    let pages = page_count(total_count, page_size);
    if pages <= 1 {
        String::new()
    } else {
        format!("Page {} of {}", page.max(1), pages)
    }
}

pub fn genre_list(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|genre| {
            if genre.is_all() {
                genre.name.clone()
            } else {
                format!("{}  ({})", genre.name, genre.id)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}
