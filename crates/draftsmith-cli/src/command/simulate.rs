use std::{path::PathBuf, sync::Arc};

use anyhow::{Context as _, ensure};
use draftsmith_engine::{
    CaptainsModeDraft, DraftMode, HeroId, InMemoryHeroCatalog, Team, turn_at,
};
use draftsmith_recommender::Recommender;

use crate::data::DraftData;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// JSON draft data file; a built-in hero pool is used when omitted
    #[arg(long)]
    data: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let data = DraftData::load_or_builtin(arg.data.as_deref())?;
    let (heroes, matchups, meta) = data.split();
    let recommender = Recommender::new(heroes.clone(), matchups, meta);
    let catalog = Arc::new(InMemoryHeroCatalog::new(heroes.clone()));
    let draft = match arg.seed {
        Some(seed) => CaptainsModeDraft::with_seed(catalog, seed),
        None => CaptainsModeDraft::new(catalog),
    };
    draft
        .init_draft(DraftMode::CaptainsMode, false)
        .context("failed to start the draft")?;

    let name = |id: HeroId| {
        heroes
            .iter()
            .find(|hero| hero.id == id)
            .map_or_else(|| id.to_string(), |hero| hero.name.clone())
    };

    while draft.is_draft_in_progress() {
        let index = draft.current_turn_index();
        let turn = turn_at(index).context("active draft must be inside the turn sequence")?;

        let radiant = draft.team_picks(Team::Radiant);
        let dire = draft.team_picks(Team::Dire);
        let banned = draft.banned_heroes();
        let suggestions = if turn.is_ban {
            recommender.recommended_bans(&radiant, &dire, &banned, turn.team, None, 1)
        } else {
            recommender.recommended_picks(&radiant, &dire, &banned, turn.team, None, 1)
        };
        let choice = suggestions
            .first()
            .context("no available hero left to suggest")?;

        let applied = if turn.is_ban {
            draft.ban_hero(choice.hero.id)
        } else {
            draft.select_hero(choice.hero.id)
        };
        ensure!(applied, "engine rejected the suggested hero");

        println!(
            "{:>2}. {:<7} {} {:<20} {:>5.2}  {}",
            index + 1,
            turn.team.to_string(),
            if turn.is_ban { "bans " } else { "picks" },
            choice.hero.name,
            choice.score,
            choice.reason
        );
    }

    println!();
    for team in [Team::Radiant, Team::Dire] {
        let picks: Vec<String> = draft.team_picks(team).into_iter().map(name).collect();
        println!("{team}: {}", picks.join(", "));
    }
    let bans: Vec<String> = draft.banned_heroes().into_iter().map(name).collect();
    println!("Banned: {}", bans.join(", "));
    Ok(())
}
