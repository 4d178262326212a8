//! Earth Defenders entry point
//!
//! Headless driver: loads settings, ranking and assets, then plays one
//! autopilot match at 60 Hz on the wall clock. Frames feed the measured
//! delta straight into `tick`.

use std::collections::VecDeque;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use earth_defenders::assets::{FsAssets, SceneVisuals};
use earth_defenders::audio::AudioManager;
use earth_defenders::consts::TARGET_FPS;
use earth_defenders::hud::Hud;
use earth_defenders::launcher::launch_extras;
use earth_defenders::settings::SETTINGS_FILE;
use earth_defenders::sim::{GameEvent, GameState, TickInput, tick};
use earth_defenders::{Ranking, Settings};

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    audio: AudioManager,
    ranking: Ranking,
    /// Menu presses replayed before the autopilot takes over
    script: VecDeque<TickInput>,
    last_hud: Option<Hud>,
}

enum Flow {
    Continue,
    Exit,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let mut assets = FsAssets::new(&settings.assets_dir);
        // Loaded for parity with a drawing front end; the headless loop only logs them
        let visuals = SceneVisuals::load(&mut assets);
        log::debug!("Visuals: {:?}", visuals);
        let audio = AudioManager::new(&mut assets, &settings);
        let ranking = Ranking::load(&settings.ranking_path);

        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Game initialized with seed: {}", seed);
        let state = GameState::new(seed).with_max_seconds(settings.max_seconds);

        // Solo (menu cursor starts there), step to the configured objective,
        // then Normal (default difficulty)
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        let mut script = VecDeque::from([confirm.clone()]);
        script.extend(std::iter::repeat_n(right, settings.objective.index()));
        script.push_back(confirm);

        Self {
            state,
            settings,
            audio,
            ranking,
            script,
            last_hud: None,
        }
    }

    fn next_input(&mut self) -> TickInput {
        self.script.pop_front().unwrap_or(TickInput {
            idle_mode: true,
            ..Default::default()
        })
    }

    fn frame(&mut self, dt: f32) -> Flow {
        let input = self.next_input();
        let events = tick(&mut self.state, &input, dt);
        self.audio.handle_events(&events);
        self.log_hud();

        let mut flow = Flow::Continue;
        for event in &events {
            match event {
                GameEvent::MatchEnded(summary) => {
                    let ranks = self.ranking.record_match(summary);
                    log::info!("Ranking positions: {:?}", ranks);
                    if let Err(e) = self.ranking.save(&self.settings.ranking_path) {
                        log::warn!("Could not save ranking: {}", e);
                    }
                    // One match per run
                    flow = Flow::Exit;
                }
                GameEvent::LaunchExtras => {
                    // Errors are already logged by the launcher
                    let _ = launch_extras(&self.settings, || log::debug!("Display context restored"));
                }
                GameEvent::Quit => flow = Flow::Exit,
                GameEvent::LifeLost { player, lives_left } => {
                    log::info!("{} lost a life ({} left)", player.label(), lives_left);
                }
                _ => {}
            }
        }
        flow
    }

    fn log_hud(&mut self) {
        let hud = Hud::from_state(&self.state);
        let changed = self.last_hud.as_ref().is_none_or(|last| {
            last.time_left != hud.time_left || last.panels != hud.panels || last.phase != hud.phase
        });
        if changed {
            let panels: Vec<String> = hud
                .panels
                .iter()
                .map(|p| {
                    format!(
                        "{} lives={} score={} load={} speed={}",
                        p.label, p.lives, p.score, p.load, p.speed_level
                    )
                })
                .collect();
            log::debug!(
                "HUD {:?} {} t={:?} [{}]",
                hud.phase,
                hud.objective.as_str(),
                hud.time_left,
                panels.join(" | ")
            );
            if let Some(banner) = hud.banner() {
                log::info!("{}", banner);
            }
        }
        self.last_hud = Some(hud);
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Earth Defenders (headless) starting...");

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let mut game = Game::new(settings);

    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(TARGET_FPS));
    let mut last = Instant::now();
    loop {
        let start = Instant::now();
        let dt = start.duration_since(last).as_secs_f32();
        last = start;

        if let Flow::Exit = game.frame(dt) {
            break;
        }
        thread::sleep(frame_budget.saturating_sub(start.elapsed()));
    }

    log::info!("Earth Defenders exiting");
}
