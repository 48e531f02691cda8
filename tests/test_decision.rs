//! Tests for the deliberation/reflection decision engine through the agent.

use projective_sim::agent::{AgentConfig, Clip, PsAgent};

fn agent(deliberation: u32, reflection: u32, seed: u64) -> PsAgent {
    PsAgent::new(AgentConfig {
        deliberation,
        reflection,
        actions: vec!["+".to_string(), "-".to_string()],
        seed: Some(seed),
        ..AgentConfig::default()
    })
    .unwrap()
}

fn seed_clips(agent: &mut PsAgent, n: i64) {
    for i in 0..n {
        agent.add_clip(&Clip::from(vec![i]));
    }
}

#[test]
fn test_immediate_accept_path_length() {
    let mut agent = agent(0, 0, 11);
    seed_clips(&mut agent, 4);

    for _ in 0..30 {
        agent
            .observe_environment(&Clip::from(vec![0]), 0.0)
            .unwrap();
        // With d = 0 and r = 0 the path is always (percept, action).
        assert_eq!(agent.last_walk().unwrap().len(), 2);
    }
}

#[test]
fn test_path_bound_across_configurations() {
    for (d, r, seed) in [(1, 0, 1), (0, 2, 2), (2, 2, 3), (3, 1, 4)] {
        let mut agent = agent(d, r, seed);
        seed_clips(&mut agent, 5);

        let bound = (r as usize + 1) * (d as usize + 1) + 1;
        for i in 0..50_i64 {
            agent
                .observe_environment(&Clip::from(vec![i % 5]), 0.0)
                .unwrap();
            let walk = agent.last_walk().unwrap();
            assert!(
                walk.len() <= bound,
                "d={d} r={r}: path length {} exceeds bound {bound}",
                walk.len()
            );
            // The path always starts at the observed percept's clip.
            assert_eq!(walk.clips[0], usize::try_from(i % 5).unwrap());
        }
    }
}

#[test]
fn test_walk_visits_valid_clips() {
    let mut agent = agent(3, 2, 21);
    seed_clips(&mut agent, 6);

    for i in 0..40_i64 {
        agent
            .observe_environment(&Clip::from(vec![i % 6]), 0.0)
            .unwrap();
        let walk = agent.last_walk().unwrap();
        for &clip in &walk.clips {
            assert!(clip < agent.graph().clip_count());
        }
        assert!(walk.action < agent.graph().action_count());
    }
}

#[test]
fn test_walk_never_self_hops_with_multiple_clips() {
    let mut agent = agent(4, 0, 33);
    seed_clips(&mut agent, 3);

    // With baseline weights the diagonal is zero, so consecutive clips in a
    // walk must differ.
    for _ in 0..40 {
        agent
            .observe_environment(&Clip::from(vec![0]), 0.0)
            .unwrap();
        let clips = &agent.last_walk().unwrap().clips;
        for hop in clips.windows(2) {
            assert_ne!(hop[0], hop[1]);
        }
    }
}

#[test]
fn test_same_seed_same_decisions() {
    let make = || {
        let mut a = agent(2, 1, 99);
        seed_clips(&mut a, 4);
        let mut actions = Vec::new();
        for i in 0..30_i64 {
            let action = a
                .observe_environment(&Clip::from(vec![i % 4]), (i % 2) as f64)
                .unwrap()
                .unwrap();
            actions.push(action);
        }
        actions
    };
    assert_eq!(make(), make());
}
