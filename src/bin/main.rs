use clap::Parser;
use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use urlify_core::{SlugOptions, UrlOptions, Urlify, UrlifyConfig};

/// Interactive transliteration, slug and url preview.
#[derive(Debug, Parser)]
#[command(author, version, about = "Turn text into ASCII slugs and URL segments.")]
struct Args {
    /// JSON configuration with extra maps, stop words and defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Engine snapshot to restore on start and write back on exit.
    #[arg(long, value_name = "FILE", conflicts_with = "config")]
    state: Option<PathBuf>,
}

fn build_engine(args: &Args) -> urlify_core::Result<Urlify> {
    if let Some(state) = &args.state {
        return Ok(Urlify::from_file_or_new(state));
    }
    match &args.config {
        Some(path) => Urlify::from_config(&UrlifyConfig::from_file(path)?),
        None => Ok(Urlify::new()),
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut engine = match build_engine(&args) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            std::process::exit(1);
        }
    };

    let mut slug_options = SlugOptions::default();
    let mut url_options = UrlOptions::default();

    println!("{}", "urlify. Type text to convert, 'exit' to quit.".bold());
    println!("Commands: ':lang <tag>', ':file', ':stop', ':save'");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim_end_matches(&['\r', '\n'][..]);

        match line.trim() {
            "exit" => break,
            ":file" => {
                slug_options.file_name = !slug_options.file_name;
                println!("file name mode: {}", slug_options.file_name);
            }
            ":stop" => {
                url_options.remove_stop_words = !url_options.remove_stop_words;
                println!("url stop word removal: {}", url_options.remove_stop_words);
            }
            ":save" => match engine.save_state() {
                Ok(()) => println!("state saved"),
                Err(e) => eprintln!("{} could not save state: {}", "[ERROR]".red(), e),
            },
            cmd if cmd.starts_with(":lang") => {
                let tag = cmd.trim_start_matches(":lang").trim();
                let language = (!tag.is_empty()).then(|| tag.to_string());
                slug_options.language = language.clone();
                url_options.language = language;
                println!("priority language: {}", tag_or_default(tag, &engine));
            }
            _ => print_conversions(&mut engine, line, &slug_options, &url_options),
        }
    }

    if let Err(e) = engine.save_state() {
        eprintln!("{} could not save state: {}", "[ERROR]".red(), e);
    }
}

fn tag_or_default<'a>(tag: &'a str, engine: &'a Urlify) -> &'a str {
    if tag.is_empty() {
        engine.default_language()
    } else {
        tag
    }
}

fn print_conversions(engine: &mut Urlify, text: &str, slug: &SlugOptions, url: &UrlOptions) {
    let transliterated = match &slug.language {
        Some(language) => engine.transliterate_for(text, language),
        None => engine.transliterate(text),
    };
    println!("  {} {}", "transliterate:".dark_grey(), transliterated);
    println!("  {}          {}", "slug:".dark_grey(), engine.slug_with(text, slug).green());
    println!("  {}           {}", "url:".dark_grey(), engine.url_with(text, url).cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_require_a_value() {
        assert!(Args::try_parse_from(["urlify", "--config"]).is_err());
        assert!(Args::try_parse_from(["urlify", "--state"]).is_err());
    }

    #[test]
    fn config_and_state_are_exclusive() {
        let result = Args::try_parse_from(["urlify", "--config", "a.json", "--state", "b.bin"]);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_either_flag_alone() {
        let args = Args::try_parse_from(["urlify", "--config", "a.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("a.json")));
        assert_eq!(args.state, None);

        let args = Args::try_parse_from(["urlify"]).unwrap();
        assert!(args.config.is_none() && args.state.is_none());
    }
}
