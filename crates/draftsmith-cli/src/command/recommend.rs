use std::path::PathBuf;

use draftsmith_engine::{HeroId, Team};
use draftsmith_recommender::Recommender;

use crate::data::{self, DraftData};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RecommendArg {
    /// Radiant picks so far, as comma-separated hero ids
    #[arg(long, value_delimiter = ',')]
    radiant: Vec<u32>,
    /// Dire picks so far, as comma-separated hero ids
    #[arg(long, value_delimiter = ',')]
    dire: Vec<u32>,
    /// Banned heroes, as comma-separated hero ids
    #[arg(long, value_delimiter = ',')]
    banned: Vec<u32>,
    /// Team the recommendations are for
    #[arg(long, value_enum, default_value = "radiant")]
    team: TeamArg,
    /// Recommend bans instead of picks
    #[arg(long)]
    bans: bool,
    /// JSON file with the requesting player's per-hero performance
    #[arg(long)]
    performance: Option<PathBuf>,
    /// Maximum number of suggestions to print
    #[arg(long, default_value_t = 5)]
    limit: usize,
    /// JSON draft data file; a built-in hero pool is used when omitted
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum TeamArg {
    #[default]
    Radiant,
    Dire,
}

impl From<TeamArg> for Team {
    fn from(team: TeamArg) -> Self {
        match team {
            TeamArg::Radiant => Team::Radiant,
            TeamArg::Dire => Team::Dire,
        }
    }
}

fn hero_ids(raw: &[u32]) -> Vec<HeroId> {
    raw.iter().copied().map(HeroId::new).collect()
}

pub(crate) fn run(arg: &RecommendArg) -> anyhow::Result<()> {
    let data = DraftData::load_or_builtin(arg.data.as_deref())?;
    let (heroes, matchups, meta) = data.split();
    let recommender = Recommender::new(heroes, matchups, meta);

    let performance = arg
        .performance
        .as_deref()
        .map(data::load_performance)
        .transpose()?;

    let radiant = hero_ids(&arg.radiant);
    let dire = hero_ids(&arg.dire);
    let banned = hero_ids(&arg.banned);
    let team = Team::from(arg.team);
    let suggestions = if arg.bans {
        recommender.recommended_bans(
            &radiant,
            &dire,
            &banned,
            team,
            performance.as_ref(),
            arg.limit,
        )
    } else {
        recommender.recommended_picks(
            &radiant,
            &dire,
            &banned,
            team,
            performance.as_ref(),
            arg.limit,
        )
    };

    let action = if arg.bans { "ban" } else { "pick" };
    println!("Recommended {action}s for {team}:");
    println!(
        "{:>2}  {:<20} {:>5}  {:<8} {:>6}  Reason",
        "#", "Hero", "Score", "Type", "Win%"
    );
    for (rank, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:>2}  {:<20} {:>5.2}  {:<8} {:>6.1}  {}",
            rank + 1,
            suggestion.hero.name,
            suggestion.score,
            suggestion.category.to_string(),
            suggestion.win_rate * 100.0,
            suggestion.reason
        );
    }
    Ok(())
}
