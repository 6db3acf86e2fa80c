use clap::Parser;
use std::path::PathBuf;

use folio::core::github;
use folio::{Draft, JsonFileStore, PortfolioStore, ProfileField};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build and preview a single-page portfolio site from local data")]
struct Cli {
    /// Path to the portfolio data file (defaults to the platform data
    /// directory)
    #[arg(value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Print the stored portfolio record as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Replace the stored project list with repositories fetched for this
    /// GitHub username, then exit
    #[arg(long, value_name = "USER")]
    github: Option<String>,

    /// Maximum number of repositories fetched with --github
    #[arg(long, default_value_t = github::DEFAULT_REPO_LIMIT)]
    limit: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    if args.dump {
        let store = store_at(args.data_file)?;
        return dump(&store);
    }
    if let Some(username) = args.github {
        let store = store_at(args.data_file)?;
        return refresh_from_github(&store, &username, args.limit);
    }

    run_gui(args.data_file)
}

fn store_at(data_file: Option<PathBuf>) -> anyhow::Result<JsonFileStore> {
    let path = match data_file {
        Some(path) => path,
        None => JsonFileStore::default_data_file()?,
    };
    Ok(JsonFileStore::new(path))
}

fn dump(store: &JsonFileStore) -> anyhow::Result<()> {
    match store.load()? {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        None => anyhow::bail!("no portfolio saved at {:?}", store.path()),
    }
}

fn refresh_from_github(store: &JsonFileStore, username: &str, limit: u8) -> anyhow::Result<()> {
    let mut draft = Draft::load(store)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let repos = runtime.block_on(async {
        let client = reqwest::Client::new();
        github::fetch_repos(&client, username, limit).await
    })?;

    let count = repos.len();
    draft.set_field(ProfileField::GitHubUsername, username.to_string());
    draft.replace_projects(repos.into_iter().map(Into::into).collect());
    draft.save(store)?;

    println!(
        "Saved {count} project(s) from GitHub user {username} to {:?}",
        store.path()
    );
    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(data_file: Option<PathBuf>) -> anyhow::Result<()> {
    let store = data_file.map(JsonFileStore::new);
    folio::gui::run(store)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_data_file: Option<PathBuf>) -> anyhow::Result<()> {
    anyhow::bail!("this build has no GUI; rebuild with the `gui` feature, or use --dump / --github")
}
