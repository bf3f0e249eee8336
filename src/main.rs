use env_logger::Env;
use roulette::build_info;
use roulette::catalog::search_movies;
use roulette::core::constants::{PLACEHOLDER_POSTER, PLAYER_PAGE_RECENT_WINS, PROFILE_RECENT_WINS};
use roulette::selection::{compute_odds, total_probability};
use roulette::{resolve_selection, Config, GameData, NewMovie, SpinError, Store};
use std::error::Error;

type CliResult = Result<(), Box<dyn Error>>;

const USAGE: &str = "Movie Roulette - spin for tonight's movie

Usage: roulette <command> [args]

Commands:
  spin                              Pick a movie and reward the other player
  odds                              Show each movie's chance of being picked
  players                           List players, coins and recent wins
  movies [player]                   List movies, optionally for one player
  history [player]                  Show spin history, optionally one player's wins
  add <player> <title> [poster]     Add a movie to a player's list
  remove <player> <movie>           Remove one of a player's movies
  search <query>                    Search the movie catalog (needs TMDB_API_KEY)
  pick <player> <query>             Add the top catalog result for a player
  coin <player>                     Give a player one bonus coin
  coins <player> <n>                Set a player's coin balance
  weight <player> <movie> <w>       Set a preference weight (1.0 - 4.0)
  stake <player> <movie> <n>        Stake coins directly on a movie
  rename <player> <name>            Rename a player
  --version                         Show version information
  --help                            Show this help message";

fn arg<'a>(args: &'a [String], index: usize, usage: &str) -> Result<&'a str, String> {
    args.get(index)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Usage: roulette {}", usage))
}

fn parse_arg<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    usage: &str,
) -> Result<T, String> {
    let raw = arg(args, index, usage)?;
    raw.parse()
        .map_err(|_| format!("Invalid value {:?}. Usage: roulette {}", raw, usage))
}

fn player_name(data: &GameData, player_id: &str) -> String {
    data.roster
        .player(player_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| player_id.to_string())
}

fn print_spin(data: &mut GameData, store: &Store, config: &Config) -> CliResult {
    let mut rng = rand::thread_rng();
    match resolve_selection(
        &mut data.roster,
        &mut data.history,
        config.floor_policy,
        &mut rng,
    ) {
        Ok(result) => {
            store.save(data)?;
            let record = &result.record;
            println!(
                "Tonight: {} (from {})",
                record.movie_title,
                player_name(data, &record.selected_owner_id)
            );
            if let Some(transfer) = result.transfer {
                println!(
                    "{} earns a coin: {} -> {}",
                    player_name(data, &transfer.player_id),
                    transfer.previous_coins,
                    transfer.coins
                );
            }
            Ok(())
        }
        Err(SpinError::NoEligibleItems) => {
            println!("No movies to spin. Add some with 'roulette add'.");
            Ok(())
        }
    }
}

fn print_odds(data: &GameData, config: &Config) {
    let movies = data.roster.eligible_movies();
    let odds = compute_odds(&movies, &data.roster.players, config.floor_policy);
    if odds.is_empty() {
        println!("No movies in the pool.");
        return;
    }
    println!("Policy: {}", config.floor_policy.name());
    for entry in &odds {
        println!(
            "{:>6.2}%  {:<32} {:<10} (fair {:.2}%, coins {:.2}%)",
            entry.probability() * 100.0,
            entry.movie.title,
            player_name(data, &entry.movie.owner_id),
            entry.fairness * 100.0,
            entry.coin_share * 100.0
        );
    }
    let total = total_probability(&odds);
    println!("Total: {:.2}%", total * 100.0);
    if total < 1.0 {
        let last = &odds[odds.len() - 1].movie.title;
        println!("Rolls past the total land on {}.", last);
    }
}

fn print_players(data: &GameData) {
    for player in &data.roster.players {
        println!(
            "{} [{}] {}  coins: {}",
            player.avatar.as_deref().unwrap_or("?"),
            player.id,
            player.name,
            player.coins
        );
        let wins = data.history.wins_for(&player.id, PROFILE_RECENT_WINS);
        if wins.is_empty() {
            println!("    No wins yet");
        }
        for win in wins {
            println!("    {} - {}", win.date_label(), win.movie_title);
        }
    }
}

fn print_movies(data: &GameData, owner: Option<&str>) {
    let movies: Vec<_> = match owner {
        Some(owner_id) => data.roster.movies_of(owner_id).collect(),
        None => data.roster.movies.iter().collect(),
    };
    if movies.is_empty() {
        println!("No movies.");
    }
    for movie in movies {
        let prefs: Vec<String> = data
            .roster
            .players
            .iter()
            .map(|p| {
                format!(
                    "{} w{:.2}/s{}",
                    p.id,
                    p.weight_of(&movie.id),
                    p.stake_on(&movie.id)
                )
            })
            .collect();
        println!(
            "[{}] {} - {} ({}) {}",
            movie.id,
            movie.title,
            player_name(data, &movie.owner_id),
            movie.genre.as_deref().unwrap_or("N/A"),
            prefs.join(" ")
        );
    }
}

fn print_history(data: &GameData, player: Option<&str>) {
    let records: Vec<_> = match player {
        Some(player_id) => data.history.wins_for(player_id, PLAYER_PAGE_RECENT_WINS),
        None => data.history.iter().collect(),
    };
    if records.is_empty() {
        println!("No wins yet");
    }
    for record in records {
        println!(
            "{} - {} ({})",
            record.date_label(),
            record.movie_title,
            player_name(data, &record.selected_owner_id)
        );
    }
}

fn run(args: &[String]) -> CliResult {
    let command = match args.get(1) {
        Some(command) => command.as_str(),
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    match command {
        "--version" | "-v" => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        "--help" | "-h" => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::from_env()?;
    let store = Store::new(config.data_dir.clone());
    let mut data = store.load()?;

    match command {
        "spin" => print_spin(&mut data, &store, &config)?,
        "odds" => print_odds(&data, &config),
        "players" => print_players(&data),
        "movies" => print_movies(&data, args.get(2).map(|s| s.as_str())),
        "history" => print_history(&data, args.get(2).map(|s| s.as_str())),
        "add" => {
            let usage = "add <player> <title> [poster]";
            let owner_id = arg(args, 2, usage)?;
            let title = arg(args, 3, usage)?;
            let poster = args
                .get(4)
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string());
            let id = data.roster.add_movie(NewMovie {
                title: title.to_string(),
                poster,
                owner_id: owner_id.to_string(),
                ..NewMovie::default()
            })?;
            store.save_roster(&data.roster)?;
            println!("Added {} as {}", title, id);
        }
        "remove" => {
            let usage = "remove <player> <movie>";
            let owner_id = arg(args, 2, usage)?;
            let movie_id = arg(args, 3, usage)?;
            if data.roster.remove_movie(owner_id, movie_id) {
                store.save_roster(&data.roster)?;
                println!("Removed {}", movie_id);
            } else {
                println!("{} has no movie {}", owner_id, movie_id);
            }
        }
        "search" => {
            let query = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();
            let results = search_movies(&config.tmdb, &query)?;
            if results.is_empty() {
                println!("No results.");
            }
            for result in results {
                println!(
                    "[{}] {} ({})",
                    result.id,
                    result.title,
                    result.year().unwrap_or("----")
                );
            }
        }
        "pick" => {
            let usage = "pick <player> <query>";
            let owner_id = arg(args, 2, usage)?;
            let query = args.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();
            match search_movies(&config.tmdb, &query)?.first() {
                Some(result) => {
                    let id = data.roster.add_movie_from_catalog(owner_id, result)?;
                    store.save_roster(&data.roster)?;
                    println!("Added {} as {}", result.title, id);
                }
                None => println!("No results."),
            }
        }
        "coin" => {
            let player_id = arg(args, 2, "coin <player>")?;
            let coins = data.roster.grant_coin(player_id)?;
            store.save_roster(&data.roster)?;
            println!("{} now has {} coins", player_name(&data, player_id), coins);
        }
        "coins" => {
            let usage = "coins <player> <n>";
            let player_id = arg(args, 2, usage)?;
            let coins: u32 = parse_arg(args, 3, usage)?;
            data.roster.set_player_coins(player_id, coins)?;
            store.save_roster(&data.roster)?;
            println!("{} now has {} coins", player_name(&data, player_id), coins);
        }
        "weight" => {
            let usage = "weight <player> <movie> <w>";
            let player_id = arg(args, 2, usage)?;
            let movie_id = arg(args, 3, usage)?;
            let weight: f64 = parse_arg(args, 4, usage)?;
            let stored = data.roster.set_player_weight(player_id, movie_id, weight)?;
            store.save_roster(&data.roster)?;
            println!("{} weight on {} set to {:.2}", player_id, movie_id, stored);
        }
        "stake" => {
            let usage = "stake <player> <movie> <n>";
            let player_id = arg(args, 2, usage)?;
            let movie_id = arg(args, 3, usage)?;
            let coins: u32 = parse_arg(args, 4, usage)?;
            data.roster.set_movie_stake(player_id, movie_id, coins)?;
            store.save_roster(&data.roster)?;
            println!("{} stakes {} coins on {}", player_id, coins, movie_id);
        }
        "rename" => {
            let usage = "rename <player> <name>";
            let player_id = arg(args, 2, usage)?;
            let name = args.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();
            data.roster.rename_player(player_id, &name)?;
            store.save_roster(&data.roster)?;
            println!("{} is now {}", player_id, name.trim());
        }
        other => {
            return Err(format!(
                "Unknown command: {}\nRun 'roulette --help' for usage.",
                other
            )
            .into());
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
