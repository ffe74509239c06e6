//! # swipedeck Binary
//!
//! Assembles the application from settings and runs a line-driven swipe
//! session on stdin/stdout.

mod commands;
mod container;

use askama::Template;
use sd_config::Settings;
use sd_core::models::StateSummary;
use sd_core::traits::ListProfileStatesUseCase;
use sd_feed::{DetailController, FeedController};
use sd_ui::{CardTemplate, DetailTemplate, SummaryTemplate};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{Command, DetailCommand, DETAIL_HELP, HELP};
use container::AppContainer;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter)))
        .with_writer(std::io::stderr)
        .init();

    info!(
        store = %settings.store.path.display(),
        page_size = settings.feed.page_size,
        "swipedeck starting"
    );

    let container = AppContainer::build(&settings);
    let mut feed = container.feed_controller();

    println!("Loading profiles...");
    if let Err(e) = feed.load_initial_profiles().await {
        warn!(error = %e, "initial load failed");
    }
    println!("{HELP}");
    show_top(&feed)?;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    prompt("> ").await?;
    while let Some(line) = input.next_line().await? {
        match Command::parse(&line) {
            Some(Command::Swipe(direction)) => {
                // Failures are already logged by the controller.
                let _ = feed.swipe_top(direction).await;
                show_top(&feed)?;
            }
            Some(Command::Info) => match feed.top().cloned() {
                Some(top) => {
                    let (mut detail, seen) = feed.open_detail(&top).await;
                    if seen.is_err() {
                        println!("Could not mark profile as seen.");
                    }
                    run_detail(&mut input, &mut detail).await?;
                    let _ = feed.close_detail(detail).await;
                    show_top(&feed)?;
                }
                None => println!("No profile to show."),
            },
            Some(Command::Stats) => match container.list_states.execute().await {
                Ok(states) => {
                    let summary = StateSummary::from_states(&states);
                    println!("{}", SummaryTemplate { summary: &summary }.render()?);
                }
                Err(e) => warn!(error = %e, "could not read stored states"),
            },
            Some(Command::Help) => println!("{HELP}"),
            Some(Command::Quit) => break,
            None if line.trim().is_empty() => {}
            None => println!("Unknown command, type 'h' for help."),
        }
        prompt("> ").await?;
    }

    info!("swipedeck stopped");
    Ok(())
}

async fn run_detail(input: &mut Input, detail: &mut DetailController) -> anyhow::Result<()> {
    println!("{}", DetailTemplate::new(detail).render()?);
    println!("{DETAIL_HELP}");
    prompt("detail> ").await?;

    while let Some(line) = input.next_line().await? {
        match DetailCommand::parse(&line) {
            Some(DetailCommand::Next) => detail.next_photo(),
            Some(DetailCommand::Previous) => detail.previous_photo(),
            Some(DetailCommand::Goto(n)) => {
                let moved = n.checked_sub(1).is_some_and(|index| detail.navigate_to_photo(index));
                if !moved {
                    println!("No photo {n}.");
                }
            }
            Some(DetailCommand::ToggleLike) => {
                if detail.toggle_like().await.is_err() {
                    println!("Could not save, like left unchanged.");
                }
            }
            Some(DetailCommand::Back) => return Ok(()),
            None => println!("{DETAIL_HELP}"),
        }
        println!("{}", DetailTemplate::new(detail).render()?);
        prompt("detail> ").await?;
    }
    Ok(())
}

fn show_top(feed: &FeedController) -> anyhow::Result<()> {
    match feed.top() {
        Some(top) => {
            let card = CardTemplate::new(top, feed.state_of(&top.id), feed.len());
            println!("{}", card.render()?);
        }
        None if feed.is_loading() => println!("Loading profiles..."),
        None => println!("No more profiles."),
    }
    Ok(())
}

async fn prompt(text: &str) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await
}
