use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, Parser)]
struct Args {
    /// Value of the platform's `_ncfa` session cookie
    #[clap(long)]
    ncfa: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Print the most recent matching duel and its summary link
    Recent {
        #[clap(long, default_value = "team")]
        game_type: common::GameType,
        #[clap(long, default_value = "all")]
        mode: common::ModeFilter,
    },
    /// Collect all matching duels and write aggregated statistics to a file
    Stats {
        /// Your player id
        #[clap(long)]
        player_id: String,
        /// Only keep duels with this teammate on your team
        #[clap(long)]
        teammate_id: Option<String>,
        #[clap(long, default_value = "team")]
        game_type: common::GameType,
        #[clap(long, default_value = "all")]
        mode: common::ModeFilter,
        /// Only keep duels where a competitive progress marker is present
        #[clap(long)]
        competitive_only: bool,
        #[clap(long, default_value = "team_duels_stats.json")]
        output: std::path::PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().starts_with("client") || meta.target().starts_with("analysis")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    let api = client::api::Client::new(args.ncfa);

    match args.command {
        Command::Recent { game_type, mode } => {
            let config =
                client::walker::WalkConfig::new(analysis::feed::FeedFilter { game_type, mode });

            match client::walker::most_recent_game_id(&api, &config).await {
                Ok(Some(id)) => {
                    println!("https://www.geoguessr.com/team-duels/{}/summary", id);
                }
                Ok(None) => {
                    tracing::info!("No matching duels found");
                }
                Err(e) => {
                    tracing::error!("Walking feed: {:?}", e);
                    std::process::exit(1);
                }
            };
        }
        Command::Stats {
            player_id,
            teammate_id,
            game_type,
            mode,
            competitive_only,
            output,
        } => {
            let config =
                client::walker::WalkConfig::new(analysis::feed::FeedFilter { game_type, mode });

            let game_ids = match client::walker::collect_game_ids(&api, &config).await {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::error!("Walking feed: {:?}", e);
                    std::process::exit(1);
                }
            };
            tracing::info!("Found {} duels in the feed", game_ids.len());

            let mut options = client::aggregator::AggregateOptions::new(player_id);
            options.teammate_id = teammate_id;
            options.competitive_only = competitive_only;

            let summaries = client::aggregator::aggregate(&api, &game_ids, &options).await;

            let data = match serde_json::to_vec_pretty(&summaries) {
                Ok(d) => d,
                Err(e) => {
                    tracing::error!("Serializing summaries: {:?}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = tokio::fs::write(&output, data).await {
                tracing::error!("Writing {:?}: {:?}", output, e);
                std::process::exit(1);
            }

            tracing::info!("Saved {} duels to {:?}", summaries.len(), output);
        }
    };
}
