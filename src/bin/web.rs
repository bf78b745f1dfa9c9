//! Single binary web server: JSON API over in-memory score sheets.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tournament_score_sheet::{
    Bracket, PlayoffRound, Side, StandingsRow, Tournament, TournamentError, TournamentId,
    DEFAULT_COMPETITORS,
};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Snapshot plus everything derived from it, so clients never compute standings themselves.
#[derive(Serialize)]
struct TournamentView<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    standings: Vec<StandingsRow>,
    bracket: Bracket,
}

impl<'a> TournamentView<'a> {
    fn of(tournament: &'a Tournament) -> Self {
        let standings = tournament.standings();
        Self {
            tournament,
            standings,
            bracket: tournament.bracket(),
        }
    }
}

#[derive(Deserialize)]
struct TeamCountBody {
    #[serde(default = "default_team_count")]
    teams: usize,
}

fn default_team_count() -> usize {
    DEFAULT_COMPETITORS
}

#[derive(Deserialize)]
struct RenameBody {
    name: String,
}

#[derive(Deserialize)]
struct ScoreBody {
    side: Side,
    /// Raw text from the score input; empty clears the score.
    #[serde(default)]
    value: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and a roster or fixture position.
#[derive(Deserialize)]
struct TournamentIndexPath {
    id: TournamentId,
    index: usize,
}

/// Path segments: tournament id and playoff round (semifinal1, semifinal2, championship).
#[derive(Deserialize)]
struct TournamentRoundPath {
    id: TournamentId,
    round: PlayoffRound,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Look up a tournament, refresh its activity time and apply `edit`.
/// Takes the write lock even for reads, since every access refreshes `last_activity`.
/// Responds with the updated view, or the edit's error as 400.
fn with_tournament<F>(state: &AppState, id: TournamentId, edit: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match edit(&mut entry.tournament) {
        Ok(()) => HttpResponse::Ok().json(TournamentView::of(&entry.tournament)),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-score-sheet",
    })
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<TeamCountBody>>) -> HttpResponse {
    let teams = body.as_ref().map(|b| b.teams).unwrap_or_else(default_team_count);
    let tournament = match Tournament::new(teams) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(TournamentView::of(&tournament));
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {} with {} team(s)", id, teams);
    response
}

/// Get a tournament with fresh standings and bracket (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |_| Ok(()))
}

/// Change the number of teams. Discards names, fixtures and playoff scores.
#[put("/api/tournaments/{id}/teams")]
async fn api_set_team_count(state: AppState, path: Path<TournamentPath>, body: Json<TeamCountBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| t.configure(body.teams))
}

/// Reset all names and scores, keeping the team count.
#[post("/api/tournaments/{id}/reset")]
async fn api_reset_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.reset();
        Ok(())
    })
}

/// Rename the team at a roster position.
#[put("/api/tournaments/{id}/competitors/{index}/name")]
async fn api_rename_competitor(
    state: AppState,
    path: Path<TournamentIndexPath>,
    body: Json<RenameBody>,
) -> HttpResponse {
    let RenameBody { name } = body.into_inner();
    with_tournament(&state, path.id, |t| t.rename_competitor(path.index, name))
}

/// Enter or clear one side of a round-robin score.
#[put("/api/tournaments/{id}/fixtures/{index}/score")]
async fn api_set_fixture_score(
    state: AppState,
    path: Path<TournamentIndexPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| t.set_fixture_score(path.index, body.side, &body.value))
}

/// Enter or clear one side of a playoff score.
#[put("/api/tournaments/{id}/playoffs/{round}/score")]
async fn api_set_playoff_score(
    state: AppState,
    path: Path<TournamentRoundPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| t.set_playoff_score(path.round, body.side, &body.value))
}

/// Download the current standings as CSV.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match entry.tournament.standings_csv() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"standings.csv\""))
            .body(body),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Drop tournaments idle for at least `INACTIVITY_TIMEOUT` as of `now`. Returns how many went.
fn remove_inactive(tournaments: &mut HashMap<TournamentId, TournamentEntry>, now: Instant) -> usize {
    let before = tournaments.len();
    tournaments.retain(|_, entry| now.saturating_duration_since(entry.last_activity) < INACTIVITY_TIMEOUT);
    before - tournaments.len()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let removed = remove_inactive(&mut g, Instant::now());
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_set_team_count)
            .service(api_reset_tournament)
            .service(api_rename_competitor)
            .service(api_set_fixture_score)
            .service(api_set_playoff_score)
            .service(api_standings_csv)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(last_activity: Instant) -> TournamentEntry {
        TournamentEntry {
            tournament: Tournament::new(DEFAULT_COMPETITORS).unwrap(),
            last_activity,
        }
    }

    #[test]
    fn sweep_removes_only_idle_tournaments() {
        let start = Instant::now();
        let fresh = entry(start + INACTIVITY_TIMEOUT);
        let idle = entry(start);
        let (fresh_id, idle_id) = (fresh.tournament.id, idle.tournament.id);
        let mut tournaments = HashMap::from([(fresh_id, fresh), (idle_id, idle)]);

        let removed = remove_inactive(&mut tournaments, start + INACTIVITY_TIMEOUT);

        assert_eq!(removed, 1);
        assert!(tournaments.contains_key(&fresh_id));
        assert!(!tournaments.contains_key(&idle_id));
    }
}
