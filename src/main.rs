use clap::Parser;
use headline_scrape::{AssumeOnline, RunOutcome, Scraper, ScraperConfig};

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ScraperConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ {}", e);
                return;
            }
        },
        None => ScraperConfig::default(),
    };
    let config = args.apply(config);

    println!("🚀 Парсер заголовков: {}", config.target_url);
    println!("{}", headline_scrape::utils::separator(50));

    let scraper = Scraper::new(config);
    let outcome = {
        let mut stdout = std::io::stdout();
        if args.skip_network_check {
            scraper.with_environment(AssumeOnline).run(&mut stdout).await
        } else {
            scraper.run(&mut stdout).await
        }
    };

    match &outcome {
        RunOutcome::Saved { found, path } => {
            ::log::info!("Run finished: {} headlines saved to {}", found, path.display())
        }
        RunOutcome::SaveFailed { found, .. } => {
            ::log::info!("Run finished: {} headlines, file not written", found)
        }
        RunOutcome::NotFound(_) => ::log::info!("Run finished without headlines"),
        RunOutcome::Aborted(e) => ::log::info!("Run aborted: {}", e),
    }

    println!("\n{}", headline_scrape::utils::separator(50));
    println!("✅ Готово!");
}
