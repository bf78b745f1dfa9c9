//! Integration tests for playoff resolution: match winners, seeding, advancement, champion.

use tournament_score_sheet::{
    compute_standings, generate_fixtures, init_roster, resolve_bracket, resolve_playoff,
    Competitor, PlayoffMatch, Side, StandingsRow, SEMIFINAL_1_PENDING, SEMIFINAL_2_PENDING, TBD,
};

fn standings_named(names: &[&str]) -> Vec<StandingsRow> {
    let teams: Vec<Competitor> = init_roster(names.len())
        .into_iter()
        .zip(names)
        .map(|(c, name)| Competitor {
            name: name.to_string(),
            ..c
        })
        .collect();
    compute_standings(&teams, &generate_fixtures(teams.len()))
}

fn played(s1: u32, s2: u32) -> PlayoffMatch {
    PlayoffMatch::new(Some(s1), Some(s2))
}

fn unplayed() -> PlayoffMatch {
    PlayoffMatch::default()
}

#[test]
fn playoff_winner_by_strictly_greater_score() {
    assert_eq!(resolve_playoff(&played(3, 1)), Some(Side::One));
    assert_eq!(resolve_playoff(&played(0, 1)), Some(Side::Two));
}

#[test]
fn playoff_tie_or_missing_score_is_unresolved() {
    assert_eq!(resolve_playoff(&played(4, 4)), None);
    assert_eq!(resolve_playoff(&played(0, 0)), None);
    assert_eq!(resolve_playoff(&unplayed()), None);
    assert_eq!(resolve_playoff(&PlayoffMatch::new(Some(5), None)), None);
    assert_eq!(resolve_playoff(&PlayoffMatch::new(None, Some(5))), None);
}

#[test]
fn four_teams_no_scores_seed_one_v_four_and_two_v_three() {
    let standings = standings_named(&["Team 1", "Team 2", "Team 3", "Team 4"]);
    let bracket = resolve_bracket(&standings, &unplayed(), &unplayed(), &unplayed());

    assert_eq!(bracket.semifinal_1.team_1, "Team 1");
    assert_eq!(bracket.semifinal_1.team_2, "Team 4");
    assert_eq!(bracket.semifinal_2.team_1, "Team 2");
    assert_eq!(bracket.semifinal_2.team_2, "Team 3");
    assert_eq!(bracket.semifinal_1_winner, SEMIFINAL_1_PENDING);
    assert_eq!(bracket.semifinal_2_winner, SEMIFINAL_2_PENDING);
    assert_eq!(bracket.championship.team_1, SEMIFINAL_1_PENDING);
    assert_eq!(bracket.championship.team_2, SEMIFINAL_2_PENDING);
    assert_eq!(bracket.champion, None);
}

#[test]
fn lower_seed_advances_but_champion_waits_for_final() {
    let standings = standings_named(&["Alpha", "Bravo", "Charlie", "Delta"]);
    let bracket = resolve_bracket(&standings, &played(10, 20), &unplayed(), &unplayed());

    assert_eq!(bracket.semifinal_1_winner, "Delta");
    assert_eq!(bracket.championship.team_1, "Delta");
    assert_eq!(bracket.champion, None);
}

#[test]
fn champion_comes_from_winning_side_of_final() {
    let standings = standings_named(&["Alpha", "Bravo", "Charlie", "Delta"]);

    let bracket = resolve_bracket(&standings, &played(30, 20), &played(12, 15), &played(7, 9));
    assert_eq!(bracket.semifinal_1_winner, "Alpha");
    assert_eq!(bracket.semifinal_2_winner, "Charlie");
    assert_eq!(bracket.champion.as_deref(), Some("Charlie"));

    let bracket = resolve_bracket(&standings, &played(30, 20), &played(12, 15), &played(9, 7));
    assert_eq!(bracket.champion.as_deref(), Some("Alpha"));
}

#[test]
fn tied_final_has_no_champion() {
    let standings = standings_named(&["Alpha", "Bravo", "Charlie", "Delta"]);
    let bracket = resolve_bracket(&standings, &played(1, 0), &played(0, 1), &played(5, 5));
    assert_eq!(bracket.champion, None);
}

#[test]
fn tied_semifinal_does_not_advance_anyone() {
    let standings = standings_named(&["Alpha", "Bravo", "Charlie", "Delta"]);
    let bracket = resolve_bracket(&standings, &played(2, 2), &unplayed(), &unplayed());
    assert_eq!(bracket.semifinal_1_winner, SEMIFINAL_1_PENDING);
}

#[test]
fn decided_final_over_pending_semifinal_names_the_pending_slot() {
    let standings = standings_named(&["Alpha", "Bravo", "Charlie", "Delta"]);
    let bracket = resolve_bracket(&standings, &unplayed(), &unplayed(), &played(1, 0));
    assert_eq!(bracket.champion.as_deref(), Some(SEMIFINAL_1_PENDING));
}

#[test]
fn missing_seeds_show_tbd() {
    let standings = standings_named(&["Alpha", "Bravo", "Charlie"]);
    let bracket = resolve_bracket(&standings, &played(0, 5), &unplayed(), &unplayed());
    assert_eq!(bracket.semifinal_1.team_1, "Alpha");
    assert_eq!(bracket.semifinal_1.team_2, TBD);
    assert_eq!(bracket.semifinal_2.team_2, "Charlie");
    assert_eq!(bracket.semifinal_1_winner, TBD);
}

#[test]
fn empty_standings_do_not_fail() {
    let bracket = resolve_bracket(&[], &played(1, 0), &played(0, 1), &played(1, 0));
    assert_eq!(bracket.semifinal_1.team_1, TBD);
    assert_eq!(bracket.semifinal_2.team_1, TBD);
    assert_eq!(bracket.champion.as_deref(), Some(TBD));
}

#[test]
fn empty_name_shows_tbd() {
    let standings = standings_named(&["", "Bravo", "Charlie", "Delta"]);
    let bracket = resolve_bracket(&standings, &played(9, 1), &unplayed(), &unplayed());
    assert_eq!(bracket.semifinal_1.team_1, TBD);
    assert_eq!(bracket.semifinal_1_winner, TBD);
}

#[test]
fn seeding_follows_ranking_not_roster() {
    let teams = init_roster(4);
    let mut fixtures = generate_fixtures(4);
    // Team 4 beats everyone, Team 3 beats Team 1 and Team 2, Team 2 beats Team 1.
    for f in fixtures.iter_mut() {
        f.score_1 = Some(1);
        f.score_2 = Some(2);
    }
    let standings = compute_standings(&teams, &fixtures);
    let bracket = resolve_bracket(&standings, &unplayed(), &unplayed(), &unplayed());
    assert_eq!(bracket.semifinal_1.team_1, "Team 4");
    assert_eq!(bracket.semifinal_1.team_2, "Team 1");
    assert_eq!(bracket.semifinal_2.team_1, "Team 3");
    assert_eq!(bracket.semifinal_2.team_2, "Team 2");
}
