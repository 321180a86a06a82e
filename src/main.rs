use repractice::{Regex, compile, find_all, search, split};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const STORY: &str = "I went to the park and I saw my friend and my friend's dog was there and we ran around and there was another dog and the other dog didn't like my friend's dog but then they got used to each other and they ran to the creek and we ran to the creek too to keep them out of the water and they went in the water and then we went in the water and the water was cold and we got out of the water and Mrs. Smith got mad at us and we went back to the classroom and got hot chocolate and then we watched a movie and now we're going home.";

/// `RUST_LOG` directives when set, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    // compiling a pattern
    let regex = compile(r"This is some regular text\.")?;
    let text = "This is some regular text.";
    info!(pattern = regex.as_str(), "compiled");
    println!("{regex} fully matches {text:?}: {}", regex.full_match(text).is_some());

    // search
    let regex = compile("text")?;
    let text = "I love text. Text text text text text.";
    let found = search(&regex, text);
    info!(pattern = regex.as_str(), found = found.is_some(), "searched");
    match found {
        Some(m) => println!("match span=({}, {}) text={:?}", m.start(), m.end(), m.as_str()),
        None => println!("no match"),
    }

    // find all
    let regex = Regex::new("[A-z]{3}")?;
    let text = "The big red cat ate the fat rat.";
    let words = find_all(&regex, text);
    info!(pattern = regex.as_str(), matches = words.len(), "found all");
    println!("{words:?}");

    // split
    let and_pattern = compile(r"\sand")?;
    let pieces = split(&and_pattern, STORY);
    info!(pieces = pieces.len(), "split story");
    for piece in pieces {
        println!("{piece:?}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_honors_env_directives() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("repractice=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
