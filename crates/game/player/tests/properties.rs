//! Property tests for the mutation operations.
mod common;

use common::kanto;
use game_player::{OakItem, Pokeball};
use proptest::prelude::*;

fn species() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Bulbasaur"),
        Just("Charmander"),
        Just("Squirtle"),
        Just("Pidgey"),
        Just("Rattata"),
        Just("Pikachu"),
    ]
}

#[derive(Clone, Debug)]
enum Purse {
    Gain(u64),
    Pay(u64),
}

fn purse_op() -> impl Strategy<Value = Purse> {
    prop_oneof![
        (0u64..10_000).prop_map(Purse::Gain),
        (0u64..10_000).prop_map(Purse::Pay),
    ]
}

proptest! {
    #[test]
    fn money_matches_a_ledger(ops in prop::collection::vec(purse_op(), 0..64)) {
        let world = kanto();
        let env = world.env();
        let mut state = world.new_game();
        let mut ledger = 0u64;

        for op in ops {
            match op {
                Purse::Gain(amount) => {
                    prop_assert_eq!(state.gain_money(amount, &env), amount);
                    ledger += amount;
                }
                Purse::Pay(amount) => {
                    let paid = state.pay_money(amount);
                    prop_assert_eq!(paid, amount <= ledger);
                    if paid {
                        ledger -= amount;
                    }
                }
            }
            prop_assert_eq!(state.money(), ledger);
        }
    }

    #[test]
    fn captures_keep_one_entry_per_species(
        catches in prop::collection::vec((species(), any::<bool>()), 0..40)
    ) {
        let world = kanto();
        let env = world.env();
        let mut state = world.new_game();

        for (name, shiny) in &catches {
            state.capture_pokemon(name, *shiny, &env);
        }

        let mut names: Vec<&str> = state.caught_pokemon().iter().map(|p| p.name()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total);

        for shiny in state.caught_shiny() {
            prop_assert!(state.already_caught(shiny));
        }
        let expected_shinies = catches.iter().filter(|(_, shiny)| *shiny).map(|(n, _)| *n);
        for name in expected_shinies {
            prop_assert!(state.already_caught_shiny(name));
        }
    }

    #[test]
    fn capped_kills_never_exceed_threshold(
        route in 1usize..=25,
        kills in 0u64..40,
        needed in 1u64..20,
    ) {
        let world = kanto();
        let mut state = world.new_game();
        state.set_route(route).unwrap();
        state.set_route_kills_needed(needed);
        for _ in 0..kills {
            state.add_route_kill().unwrap();
        }

        prop_assert_eq!(state.route_kills(route), Some(kills));
        prop_assert_eq!(state.capped_route_kills(route), kills.min(needed));
    }

    #[test]
    fn chosen_ball_is_in_stock(
        used in prop::collection::vec(0usize..4, 0..8),
        selection in 0usize..4,
        shiny in any::<bool>(),
    ) {
        let world = kanto();
        let mut state = world.new_game();
        // Drain tiers down to a handful of balls so empty tiers show up.
        for ball in Pokeball::TIERS {
            for _ in 0..998 {
                state.use_pokeball(ball);
            }
        }
        for slot in used {
            state.use_pokeball(Pokeball::TIERS[slot]);
        }
        state.set_not_caught_ball_selection(Pokeball::TIERS[selection]);

        let ball = state.calculate_pokeball_to_use(false, shiny);
        if ball != Pokeball::None {
            prop_assert!(state.pokeball_count(ball) > 0);
            let limit = if shiny { Pokeball::Masterball } else { Pokeball::TIERS[selection] };
            prop_assert!(ball <= limit);
        }
    }

    #[test]
    fn oak_item_exp_accumulates(amounts in prop::collection::vec(0u64..1_000, 0..16)) {
        let world = kanto();
        let mut state = world.new_game();
        let mut total = 0;
        for amount in amounts {
            total += amount;
            prop_assert_eq!(state.gain_oak_item_exp(OakItem::ShinyCharm, amount).unwrap(), total);
        }
        prop_assert_eq!(state.oak_item_exp(OakItem::ShinyCharm), Some(total));
    }
}
