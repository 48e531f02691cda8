#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

//! Terminal demo: a PS agent learning the graduated mood-discrimination task,
//! with a live rolling-accuracy dashboard. Press `q` to quit.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use projective_sim::agent::{AgentConfig, Clip, PsAgent};
use projective_sim::task::{MoodTask, RollingAccuracy, APPROVE, BAD_PERCEPTS, GOOD_PERCEPTS, REJECT};
use projective_sim::ui::{draw_ui, probability_bar, DashboardState};

const TRIALS_PER_STAGE: usize = 100;
const ACCURACY_WINDOW: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App State: the graduated driver's configuration.
    let mut agent = PsAgent::new(AgentConfig {
        deliberation: 1,
        reflection: 2,
        growth_k: 0.2,
        actions: vec![APPROVE.to_string(), REJECT.to_string()],
        ..AgentConfig::default()
    })?;
    agent.add_clip(&Clip::symbol(GOOD_PERCEPTS[0]));
    agent.add_clip(&Clip::symbol(BAD_PERCEPTS[0]));

    let mut task = MoodTask::new(TRIALS_PER_STAGE);
    let tick_rate = Duration::from_millis(50);

    let res = run_app(&mut terminal, &mut agent, &mut task, tick_rate);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    agent: &mut PsAgent,
    task: &mut MoodTask,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut rng = rand::rng();
    let mut accuracy = RollingAccuracy::new(ACCURACY_WINDOW);
    let mut history: Vec<u64> = Vec::new();
    let mut pending_reward = 0.0;
    let mut last_percept = String::new();
    let mut last_action = String::new();
    let mut last_tick = Instant::now();

    loop {
        // 1. Run one trial per tick until the task is done.
        if last_tick.elapsed() >= tick_rate && !task.finished() {
            let percept = task.sample_percept(&mut rng);
            let action = agent
                .observe_environment(&percept, pending_reward)
                .map_err(|e| io::Error::other(e.to_string()))?
                .unwrap_or_default();

            pending_reward = task.grade(&percept, &action);
            accuracy.push(pending_reward > 0.0);
            history.push((accuracy.value() * 100.0).round() as u64);

            last_percept = percept.to_string();
            last_action = action;
            last_tick = Instant::now();
        }

        // 2. Render
        let state = dashboard_state(
            agent,
            task,
            &accuracy,
            &history,
            &last_percept,
            &last_action,
        );
        terminal.draw(|f| draw_ui(f, &state))?;

        // 3. Input
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q') {
                    return Ok(());
                }
            }
        }
    }
}

fn dashboard_state(
    agent: &PsAgent,
    task: &MoodTask,
    accuracy: &RollingAccuracy,
    history: &[u64],
    last_percept: &str,
    last_action: &str,
) -> DashboardState {
    let hud = format!(
        "Trial: {} | Stage: {} | Acc({}): {:.0}% | Last: {} -> {} | q quits",
        task.trial(),
        task.stage() + 1,
        ACCURACY_WINDOW,
        accuracy.value() * 100.0,
        last_percept,
        last_action,
    );

    let mut memory_lines = vec![format!(
        "clips: {} | actions: {}",
        agent.graph().clip_count(),
        agent.graph().action_count()
    )];
    for clip in agent.graph().clips() {
        if let Some(probs) = agent.action_probabilities(clip) {
            // Show the probability of answering "+" for each known percept.
            if let Some(plus) = agent.graph().action_index(APPROVE) {
                memory_lines.push(probability_bar(
                    &clip.to_string(),
                    APPROVE,
                    probs[plus],
                    24,
                ));
            }
        }
    }
    if let Some(walk) = agent.last_walk() {
        memory_lines.push(format!("last path: {:?}", walk.path()));
    }

    DashboardState {
        hud,
        accuracy_history: history.to_vec(),
        memory_lines,
    }
}
