use crate::schemas::{MovieSummary, TrendingEntry};

/// One result line for the non-interactive output: title, year, rating, and
/// original language, with sensible placeholders for missing fields.
pub fn format_movie_result(movie: &MovieSummary, use_color: bool) -> String {
    use colored::Colorize;

    let year = movie.release_year().unwrap_or("----");
    let rating = movie
        .rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "N/A".to_string());
    let language = movie.language.as_deref().unwrap_or("??");

    if use_color {
        format!(
            "{} ({}) {} {}",
            movie.title.bright_white().bold(),
            year.bright_blue(),
            rating.bright_yellow(),
            language.dimmed()
        )
    } else {
        format!("{} ({}) {} {}", movie.title, year, rating, language)
    }
}

/// One trending line: rank, cached title, and how many times the search was
/// issued.
pub fn format_trending_entry(rank: usize, entry: &TrendingEntry, use_color: bool) -> String {
    use colored::Colorize;

    if use_color {
        format!(
            "{} {} {}",
            format!("{rank}.").bright_magenta(),
            entry.title.bright_white(),
            format!("({} searches)", entry.search_count).dimmed()
        )
    } else {
        format!(
            "{rank}. {} ({} searches)",
            entry.title, entry.search_count
        )
    }
}
