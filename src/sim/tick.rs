//! Fixed timestep simulation tick
//!
//! Scroll kinematics and ground tile recycling, advanced deterministically.

use rand::Rng;

use super::state::GroundState;
use crate::tuning::Tuning;

/// Advance the ground state by exactly one tick.
///
/// Returns the number of tiles recycled during this tick.
pub fn tick<R: Rng>(state: &mut GroundState, tuning: &Tuning, rng: &mut R) -> u32 {
    state.scroll_velocity =
        (state.scroll_velocity + tuning.scroll_acceleration).min(tuning.max_scroll_velocity());
    state.scroll_offset += state.scroll_velocity;

    // A fast enough scroll can pass more than one tile in a tick
    let (recycled, remainder) = consume_scroll(state.scroll_offset, tuning.tile_width);
    state.scroll_offset = remainder;

    // Columns appended before the last `len` recycles are evicted again within this tick
    let columns = u32::try_from(state.heights().len()).unwrap_or(u32::MAX);
    for _ in recycled.saturating_sub(columns)..recycled {
        recycle_tile(state, tuning, rng);
    }

    state.tick += 1;
    state.tiles_recycled += u64::from(recycled);
    recycled
}

/// Split a scroll offset into whole tiles past the edge and what is left over.
///
/// The remainder lies in `[0, tile_width]`; an offset exactly at the edge is
/// not consumed. A NaN offset consumes nothing.
pub fn consume_scroll(offset: f32, tile_width: f32) -> (u32, f32) {
    if offset.is_nan() || tile_width.is_nan() || tile_width <= 0.0 || offset <= tile_width {
        return (0, offset);
    }

    let (offset, width) = (f64::from(offset), f64::from(tile_width));
    let mut tiles = ((offset - width) / width).ceil();
    if offset - tiles * width > width {
        tiles += 1.0;
    }
    let tiles = tiles.min(f64::from(u32::MAX));
    let remainder = (offset - tiles * width).clamp(0.0, width);
    (tiles as u32, remainder as f32)
}

/// Evict the leftmost column and append a new one
pub fn recycle_tile<R: Rng>(state: &mut GroundState, tuning: &Tuning, rng: &mut R) {
    let height = next_height(state.newest_height(), tuning, rng);
    state.push_column(height);
    log::trace!("tick {}: recycled tile, new height {}", state.tick + 1, height);
}

/// Height for a newly appended column: usually the previous one, sometimes a fresh draw
pub fn next_height<R: Rng>(previous: f32, tuning: &Tuning, rng: &mut R) -> f32 {
    let changes = match tuning.ground_change_prob {
        0 => false,
        n => rng.random_ratio(1, n),
    };
    if !changes {
        return previous;
    }

    let height = rng
        .random_range(tuning.ground_min..=tuning.ground_max)
        .clamp(tuning.ground_min, tuning.ground_max);
    log::debug!("ground height change: {} -> {}", previous, height);
    height
}

/// Replay every tick in `(state.tick, now]` in order.
///
/// Stale or repeated times are a no-op. Returns the number of ticks simulated.
pub fn advance<R: Rng>(
    state: &mut GroundState,
    tuning: &Tuning,
    rng: &mut R,
    now: u64,
) -> u64 {
    let start = state.tick;
    while state.tick < now {
        tick(state, tuning, rng);
    }
    state.tick - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn scenario_tuning() -> Tuning {
        Tuning {
            ground_min: 96.0,
            ground_max: 256.0,
            tile_width: 16.0,
            init_ground_y: 240.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_accelerates_then_scrolls() {
        let tuning = Tuning {
            init_scroll_velocity: 1.0,
            scroll_acceleration: 0.5,
            ..Default::default()
        };
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);

        tick(&mut state, &tuning, &mut rng);
        assert_eq!(state.scroll_velocity, 1.5);
        assert_eq!(state.scroll_offset, 1.5);
        assert_eq!(state.tick, 1);

        tick(&mut state, &tuning, &mut rng);
        assert_eq!(state.scroll_velocity, 2.0);
        assert_eq!(state.scroll_offset, 3.5);
        assert_eq!(state.tick, 2);
    }

    #[test]
    fn test_first_recycle_scenario() {
        let tuning = scenario_tuning();
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(7);

        loop {
            let before = state.scroll_offset;
            let recycled = tick(&mut state, &tuning, &mut rng);
            if recycled > 0 {
                assert_eq!(recycled, 1);
                assert_eq!(state.tiles_recycled, 1);
                let pre_recycle = before + state.scroll_velocity;
                assert!(pre_recycle > 16.0);
                assert_eq!(state.scroll_offset, pre_recycle - 16.0);
                break;
            }
            assert!(state.scroll_offset <= 16.0);
            assert!(state.tick < 100, "no recycle after 100 ticks");
        }
    }

    #[test]
    fn test_recycle_always_changes_height() {
        let tuning = Tuning {
            ground_change_prob: 1,
            ..scenario_tuning()
        };
        let mut state = GroundState::new(&tuning);
        let before = state.heights().to_vec();
        let mut rng = Pcg32::seed_from_u64(2024);

        recycle_tile(&mut state, &tuning, &mut rng);

        let after = state.heights();
        assert_eq!(after.len(), before.len());
        assert_eq!(&after[..after.len() - 1], &before[1..]);
        let newest = state.newest_height();
        assert!(tuning.height_in_range(newest));

        // Same seed draws the same height
        let mut rng = Pcg32::seed_from_u64(2024);
        assert_eq!(next_height(240.0, &tuning, &mut rng), newest);
    }

    #[test]
    fn test_constant_velocity_is_linear() {
        let tuning = Tuning {
            scroll_acceleration: 0.0,
            init_scroll_velocity: 1.0,
            ..scenario_tuning()
        };
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(3);

        for n in 1..=200u64 {
            tick(&mut state, &tuning, &mut rng);
            assert_eq!(state.scroll_velocity, 1.0);
            let consumed = state.tiles_recycled as f32 * tuning.tile_width;
            assert_eq!(state.scroll_offset, n as f32 - consumed);
            assert!(state.scroll_offset > 0.0 && state.scroll_offset <= tuning.tile_width);
        }
        // Offset must strictly exceed a tile width: 17 ticks per recycle after the first
        assert_eq!(state.tiles_recycled, (200 - 1) / 16);
    }

    #[test]
    fn test_disabled_change_keeps_ground_flat() {
        let tuning = Tuning {
            ground_change_prob: 0,
            scroll_acceleration: 0.05,
            ..scenario_tuning()
        };
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(99);

        advance(&mut state, &tuning, &mut rng, 5_000);
        assert!(state.tiles_recycled > 100);
        assert!(state.heights().iter().all(|&h| h == tuning.init_ground_y));
    }

    #[test]
    fn test_fast_scroll_recycles_several_tiles_per_tick() {
        let tuning = Tuning {
            init_scroll_velocity: 40.0,
            scroll_acceleration: 0.0,
            ..scenario_tuning()
        };
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(5);

        assert_eq!(tick(&mut state, &tuning, &mut rng), 2);
        assert_eq!(state.scroll_offset, 8.0);
        // 48 leaves exactly one tile width, which is not past the edge
        assert_eq!(tick(&mut state, &tuning, &mut rng), 2);
        assert_eq!(state.scroll_offset, 16.0);
    }

    #[test]
    fn test_consume_scroll() {
        assert_eq!(consume_scroll(15.0, 16.0), (0, 15.0));
        assert_eq!(consume_scroll(16.0, 16.0), (0, 16.0));
        assert_eq!(consume_scroll(17.0, 16.0), (1, 1.0));
        assert_eq!(consume_scroll(40.0, 16.0), (2, 8.0));
        assert_eq!(consume_scroll(48.0, 16.0), (2, 16.0));
        assert_eq!(consume_scroll(1.0e30, 16.0).0, u32::MAX);
        assert_eq!(consume_scroll(f32::INFINITY, 16.0).0, u32::MAX);
        assert_eq!(consume_scroll(f32::NAN, 16.0).0, 0);
    }

    #[test]
    fn test_huge_acceleration_still_returns() {
        // Skips validation on purpose: the tick itself must stay bounded
        let tuning = Tuning {
            scroll_acceleration: 1.0e10,
            ground_change_prob: 1,
            ..Default::default()
        };
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(13);

        assert_eq!(advance(&mut state, &tuning, &mut rng, 3), 3);
        assert_eq!(state.scroll_velocity, tuning.max_scroll_velocity());
        assert!(state.scroll_offset >= 0.0 && state.scroll_offset <= tuning.tile_width);
        assert_eq!(state.tiles_recycled, 3 * (1 << 20) - 1);
        assert_eq!(state.heights().len(), tuning.ground_columns());
        assert!(state.heights().iter().all(|&h| tuning.height_in_range(h)));
    }

    #[test]
    fn test_velocity_never_decreases_at_ceiling() {
        let tuning = Tuning {
            init_scroll_velocity: Tuning::default().max_scroll_velocity() - 1.0,
            scroll_acceleration: 4.0,
            ..Default::default()
        };
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(21);

        let mut last = state.scroll_velocity;
        for _ in 0..10 {
            tick(&mut state, &tuning, &mut rng);
            assert!(state.scroll_velocity >= last);
            last = state.scroll_velocity;
        }
        assert_eq!(last, tuning.max_scroll_velocity());
    }

    #[test]
    fn test_advance_stale_time_is_noop() {
        let tuning = Tuning::default();
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(11);

        assert_eq!(advance(&mut state, &tuning, &mut rng, 120), 120);
        let saved = state.clone();
        assert_eq!(advance(&mut state, &tuning, &mut rng, 120), 0);
        assert_eq!(advance(&mut state, &tuning, &mut rng, 3), 0);
        assert_eq!(state, saved);
    }

    #[test]
    fn test_advance_from_zero_to_zero() {
        let tuning = Tuning::default();
        let mut state = GroundState::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(advance(&mut state, &tuning, &mut rng, 0), 0);
        assert_eq!(state, GroundState::new(&tuning));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let tuning = Tuning::default();
        let mut state1 = GroundState::new(&tuning);
        let mut state2 = GroundState::new(&tuning);
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);

        advance(&mut state1, &tuning, &mut rng1, 3_000);
        advance(&mut state2, &tuning, &mut rng2, 3_000);
        assert_eq!(state1, state2);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn catch_up_matches_single_advance(
                seed in any::<u64>(),
                times in proptest::collection::vec(0u64..2_000, 1..12),
            ) {
                let mut times = times;
                times.sort_unstable();
                let tuning = Tuning::default();

                let mut stepped = GroundState::new(&tuning);
                let mut rng = Pcg32::seed_from_u64(seed);
                for &t in &times {
                    advance(&mut stepped, &tuning, &mut rng, t);
                }

                let mut direct = GroundState::new(&tuning);
                let mut rng = Pcg32::seed_from_u64(seed);
                advance(&mut direct, &tuning, &mut rng, *times.last().unwrap());

                prop_assert_eq!(stepped, direct);
            }

            #[test]
            fn heights_stay_in_range_and_length_is_fixed(
                seed in any::<u64>(),
                prob in 0u32..4,
                accel in 0.0f32..0.05,
                horizon in 0u64..4_000,
            ) {
                let tuning = Tuning {
                    ground_change_prob: prob,
                    scroll_acceleration: accel,
                    ..Default::default()
                };
                let mut state = GroundState::new(&tuning);
                let mut rng = Pcg32::seed_from_u64(seed);
                advance(&mut state, &tuning, &mut rng, horizon);

                prop_assert_eq!(state.heights().len(), tuning.ground_columns());
                prop_assert!(state.heights().iter().all(|&h| tuning.height_in_range(h)));
                prop_assert!(state.scroll_offset <= tuning.tile_width);
                prop_assert_eq!(state.tick, horizon);
            }
        }
    }
}
