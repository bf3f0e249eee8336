// Fairness pool: fixed share per owner, split evenly among that owner's movies
pub const FAIRNESS_SHARE_PER_OWNER: f64 = 0.45;
pub const FAIRNESS_MAX_OWNERS: usize = 2;

// Coin pool: bounded share bought with coins and per-movie stakes
pub const COIN_POOL_SHARE: f64 = 0.10;

// Coins granted to the losing side after every spin
pub const OPPONENT_SPIN_REWARD: u32 = 1;

// Preference weights
pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const MIN_EDITABLE_WEIGHT: f64 = 1.0;
pub const MAX_EDITABLE_WEIGHT: f64 = 4.0;
pub const WEIGHT_STEP: f64 = 0.25;

// History
pub const HISTORY_LIMIT: usize = 50;
pub const PROFILE_RECENT_WINS: usize = 6;
pub const PLAYER_PAGE_RECENT_WINS: usize = 10;

// Catalog
pub const TMDB_DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
pub const TMDB_DEFAULT_POSTER_SIZE: &str = "w500";
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=Poster";

// Float comparison tolerance for probability sums
pub const PROBABILITY_EPSILON: f64 = 1e-9;
