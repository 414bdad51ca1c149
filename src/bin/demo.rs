//! Fills a couple of trees with sample keys and prints them in order.
//!
//! Set `PLAIN_BST_LOG` to a log level (e.g. `trace`) to see the tree's structural changes.

use log::LevelFilter;
use plain_bst::Tree;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Environment variable holding the log level.
const LOG_LEVEL_VAR: &str = "PLAIN_BST_LOG";

fn log_level() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn main() {
    if let Err(e) = TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not set up logging: {e}");
    }

    let mut numbers = Tree::new();
    numbers.extend([20, 40, 60, 15, 27, 32]);
    numbers.erase(&15);
    numbers.extend([17, 10, 13, 19]);
    log::info!("{} numbers", numbers.len());

    for n in &numbers {
        println!("{n}");
    }

    println!("\n");

    let names: Tree<&str> = [
        "KATAGIRI Sanae",
        "TACHIBANA Arisu",
        "SATOU Shin",
        "SASAKI Chie",
        "SAKURAI Momoka",
        "SHIJOU Takane",
        "MORIKUBO Nono",
        "TSUKIOKA Kogane",
        "MORINO Rinze",
        "AKIZUKI Ritsuko",
        "GANAHA Hibiki",
        "HOSHII Miki",
        "KANZAKI Ranko",
        "BABA Konomi",
    ]
    .into_iter()
    .collect();
    log::info!("{} names", names.len());

    for name in &names {
        println!("{name}");
    }
}
