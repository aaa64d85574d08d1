use movie_recommender::{Config, Corpus, QueryEngine, SearchOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let corpus = Corpus::build(&config)?;
    let engine = QueryEngine::new(&corpus, &config);

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        println!("{} movies, genres: {}", engine.count_movies(), engine.genres().join(", "));
        return Ok(());
    }

    let (header, titles) = match engine.search(&query) {
        SearchOutcome::Genre { genre, titles } => (format!("Movies in genre: {}", genre), titles),
        SearchOutcome::Recommendations { title, titles } => {
            (format!("Top {} recommendations for \"{}\"", config.top_k, title), titles)
        }
        SearchOutcome::NoMatch => {
            println!("No matching movie title or genre found.");
            return Ok(());
        }
    };

    println!("{}", header);
    for title in titles {
        let (overview, genres) = engine.lookup(&title);
        println!("  {} [{}]", title, genres.join(", "));
        println!("    {}", overview);
    }
    Ok(())
}
